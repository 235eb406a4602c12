use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::freelancer_links;
use crate::modules::profile::application::domain::entities::{
    BasicProfile, FreelancerProfile, FreelancerProfileDetail, ProfileLink, VocabItem,
};
use crate::modules::profile::application::ports::outgoing::profile_query::{
    ProfileListFilter, ProfileOrdering, ProfileQuery, ProfileQueryError,
};
use crate::modules::vocabulary::adapter::outgoing::sea_orm_entity::{languages, niches, skills};

use super::sea_orm_entity::{
    admin_profiles, freelancer_languages, freelancer_niches, freelancer_profiles,
    freelancer_skills,
};

#[derive(Clone, Debug)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: sea_orm::DbErr) -> ProfileQueryError {
        ProfileQueryError::DatabaseError(e.to_string())
    }

    fn freelancer_from(model: freelancer_profiles::Model, user: users::Model) -> FreelancerProfile {
        FreelancerProfile {
            id: model.id,
            uuid: user.uuid,
            username: user.username,
            email: user.email,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            about_me: model.about_me,
            location: model.location,
            profile_pic_url: model.profile_pic_url,
            resume_url: model.resume_url,
        }
    }

    fn admin_from(model: admin_profiles::Model, user: users::Model) -> BasicProfile {
        BasicProfile {
            id: model.id,
            uuid: user.uuid,
            username: user.username,
            email: user.email,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            profile_pic_url: model.profile_pic_url,
        }
    }

    /// Vocabulary rows attached to a profile, resolved in two steps so
    /// the three join tables stay uniform.
    async fn attached_vocab<J, V, F, M>(
        &self,
        profile_id: i64,
        profile_col: J::Column,
        vocab_id: F,
        vocab_id_col: V::Column,
        name_col: V::Column,
        to_item: M,
    ) -> Result<Vec<VocabItem>, ProfileQueryError>
    where
        J: EntityTrait,
        V: EntityTrait,
        F: Fn(&J::Model) -> i64,
        M: Fn(V::Model) -> VocabItem,
    {
        let join_rows = J::find()
            .filter(profile_col.eq(profile_id))
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;
        let ids: Vec<i64> = join_rows.iter().map(vocab_id).collect();
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = V::find()
            .filter(vocab_id_col.is_in(ids))
            .order_by_asc(name_col)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        Ok(rows.into_iter().map(to_item).collect())
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn list_freelancers(
        &self,
        filter: ProfileListFilter,
    ) -> Result<Vec<FreelancerProfile>, ProfileQueryError> {
        let mut query = freelancer_profiles::Entity::find().inner_join(users::Entity);

        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            query = query
                .join_rev(
                    JoinType::LeftJoin,
                    freelancer_niches::Relation::Profile.def(),
                )
                .join(JoinType::LeftJoin, freelancer_niches::Relation::Niche.def())
                .filter(
                    Condition::any()
                        .add(users::Column::Username.contains(term))
                        .add(users::Column::Email.contains(term))
                        .add(freelancer_profiles::Column::FirstName.contains(term))
                        .add(freelancer_profiles::Column::LastName.contains(term))
                        .add(niches::Column::Name.contains(term)),
                )
                .distinct();
        }

        query = match filter.ordering {
            ProfileOrdering::UsernameAsc => query.order_by_asc(users::Column::Username),
            ProfileOrdering::UsernameDesc => query.order_by_desc(users::Column::Username),
        };

        let rows = query
            .select_also(users::Entity)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|(profile, user)| user.map(|u| Self::freelancer_from(profile, u)))
            .collect())
    }

    async fn find_freelancer(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<FreelancerProfileDetail>, ProfileQueryError> {
        let found = freelancer_profiles::Entity::find()
            .inner_join(users::Entity)
            .filter(users::Column::Uuid.eq(user_uuid))
            .select_also(users::Entity)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?;

        let (model, user) = match found {
            Some((model, Some(user))) => (model, user),
            _ => return Ok(None),
        };
        let profile_id = model.id;
        let profile = Self::freelancer_from(model, user);

        let niches = self
            .attached_vocab::<freelancer_niches::Entity, niches::Entity, _, _>(
                profile_id,
                freelancer_niches::Column::ProfileId,
                |row| row.niche_id,
                niches::Column::Id,
                niches::Column::Name,
                |m| VocabItem {
                    id: m.id,
                    name: m.name,
                },
            )
            .await?;
        let skills = self
            .attached_vocab::<freelancer_skills::Entity, skills::Entity, _, _>(
                profile_id,
                freelancer_skills::Column::ProfileId,
                |row| row.skill_id,
                skills::Column::Id,
                skills::Column::Name,
                |m| VocabItem {
                    id: m.id,
                    name: m.name,
                },
            )
            .await?;
        let languages = self
            .attached_vocab::<freelancer_languages::Entity, languages::Entity, _, _>(
                profile_id,
                freelancer_languages::Column::ProfileId,
                |row| row.language_id,
                languages::Column::Id,
                languages::Column::Name,
                |m| VocabItem {
                    id: m.id,
                    name: m.name,
                },
            )
            .await?;

        let links: Vec<ProfileLink> = freelancer_links::Entity::find()
            .filter(freelancer_links::Column::ProfileId.eq(profile_id))
            .order_by_asc(freelancer_links::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?
            .into_iter()
            .map(ProfileLink::from)
            .collect();

        Ok(Some(FreelancerProfileDetail {
            profile,
            niches,
            skills,
            languages,
            links,
        }))
    }

    async fn freelancer_profile_id(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<i64>, ProfileQueryError> {
        freelancer_profiles::Entity::find()
            .select_only()
            .column(freelancer_profiles::Column::Id)
            .inner_join(users::Entity)
            .filter(users::Column::Uuid.eq(user_uuid))
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(Self::db_err)
    }

    async fn list_admins(
        &self,
        filter: ProfileListFilter,
    ) -> Result<Vec<BasicProfile>, ProfileQueryError> {
        let mut query = admin_profiles::Entity::find().inner_join(users::Entity);

        if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(users::Column::Username.contains(term))
                    .add(users::Column::Email.contains(term))
                    .add(admin_profiles::Column::FirstName.contains(term))
                    .add(admin_profiles::Column::LastName.contains(term)),
            );
        }

        query = match filter.ordering {
            ProfileOrdering::UsernameAsc => query.order_by_asc(users::Column::Username),
            ProfileOrdering::UsernameDesc => query.order_by_desc(users::Column::Username),
        };

        let rows = query
            .select_also(users::Entity)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(Self::db_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|(profile, user)| user.map(|u| Self::admin_from(profile, u)))
            .collect())
    }

    async fn find_admin(
        &self,
        user_uuid: Uuid,
    ) -> Result<Option<BasicProfile>, ProfileQueryError> {
        let found = admin_profiles::Entity::find()
            .inner_join(users::Entity)
            .filter(users::Column::Uuid.eq(user_uuid))
            .select_also(users::Entity)
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?;

        Ok(match found {
            Some((model, Some(user))) => Some(Self::admin_from(model, user)),
            _ => None,
        })
    }

    async fn admin_profile_id(&self, user_uuid: Uuid) -> Result<Option<i64>, ProfileQueryError> {
        admin_profiles::Entity::find()
            .select_only()
            .column(admin_profiles::Column::Id)
            .inner_join(users::Entity)
            .filter(users::Column::Uuid.eq(user_uuid))
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(Self::db_err)
    }
}
