use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::modules::profile::application::domain::entities::VocabKind;
use crate::modules::profile::application::ports::outgoing::attachment_repository::{
    AttachmentReport, AttachmentRepositoryError, VocabAttachmentRepository,
};
use crate::modules::vocabulary::adapter::outgoing::sea_orm_entity::{languages, niches, skills};

use super::sea_orm_entity::{freelancer_languages, freelancer_niches, freelancer_skills};

#[derive(Clone, Debug)]
pub struct VocabAttachmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VocabAttachmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: DbErr) -> AttachmentRepositoryError {
        AttachmentRepositoryError::DatabaseError(e.to_string())
    }

    async fn attach_one(
        txn: &DatabaseTransaction,
        profile_id: i64,
        kind: VocabKind,
        id: i64,
        report: &mut AttachmentReport,
    ) -> Result<(), DbErr> {
        // Lookup first so a missing id becomes a message, not a broken
        // foreign key; the upsert lands on the unique pair index.
        let created_name = match kind {
            VocabKind::Niche => match niches::Entity::find_by_id(id).one(txn).await? {
                None => None,
                Some(row) => {
                    let inserted =
                        freelancer_niches::Entity::insert(freelancer_niches::ActiveModel {
                            profile_id: Set(profile_id),
                            niche_id: Set(id),
                            ..Default::default()
                        })
                        .on_conflict(
                            OnConflict::columns([
                                freelancer_niches::Column::ProfileId,
                                freelancer_niches::Column::NicheId,
                            ])
                            .do_nothing()
                            .to_owned(),
                        )
                        .exec_without_returning(txn)
                        .await?;
                    Some((row.name, inserted > 0))
                }
            },
            VocabKind::Skill => match skills::Entity::find_by_id(id).one(txn).await? {
                None => None,
                Some(row) => {
                    let inserted =
                        freelancer_skills::Entity::insert(freelancer_skills::ActiveModel {
                            profile_id: Set(profile_id),
                            skill_id: Set(id),
                            ..Default::default()
                        })
                        .on_conflict(
                            OnConflict::columns([
                                freelancer_skills::Column::ProfileId,
                                freelancer_skills::Column::SkillId,
                            ])
                            .do_nothing()
                            .to_owned(),
                        )
                        .exec_without_returning(txn)
                        .await?;
                    Some((row.name, inserted > 0))
                }
            },
            VocabKind::Language => match languages::Entity::find_by_id(id).one(txn).await? {
                None => None,
                Some(row) => {
                    let inserted =
                        freelancer_languages::Entity::insert(freelancer_languages::ActiveModel {
                            profile_id: Set(profile_id),
                            language_id: Set(id),
                            ..Default::default()
                        })
                        .on_conflict(
                            OnConflict::columns([
                                freelancer_languages::Column::ProfileId,
                                freelancer_languages::Column::LanguageId,
                            ])
                            .do_nothing()
                            .to_owned(),
                        )
                        .exec_without_returning(txn)
                        .await?;
                    Some((row.name, inserted > 0))
                }
            },
        };

        match created_name {
            None => report
                .errors
                .push(format!("{} with id {} does not exist.", kind.noun(), id)),
            Some((name, true)) => report.created.push(name),
            Some((_, false)) => {}
        }
        Ok(())
    }

    async fn vocab_exists<C: ConnectionTrait>(
        conn: &C,
        kind: VocabKind,
        id: i64,
    ) -> Result<bool, DbErr> {
        Ok(match kind {
            VocabKind::Niche => niches::Entity::find_by_id(id).one(conn).await?.is_some(),
            VocabKind::Skill => skills::Entity::find_by_id(id).one(conn).await?.is_some(),
            VocabKind::Language => languages::Entity::find_by_id(id).one(conn).await?.is_some(),
        })
    }

    async fn delete_pair<C: ConnectionTrait>(
        conn: &C,
        profile_id: i64,
        kind: VocabKind,
        id: i64,
    ) -> Result<u64, DbErr> {
        let result = match kind {
            VocabKind::Niche => {
                freelancer_niches::Entity::delete_many()
                    .filter(freelancer_niches::Column::ProfileId.eq(profile_id))
                    .filter(freelancer_niches::Column::NicheId.eq(id))
                    .exec(conn)
                    .await?
            }
            VocabKind::Skill => {
                freelancer_skills::Entity::delete_many()
                    .filter(freelancer_skills::Column::ProfileId.eq(profile_id))
                    .filter(freelancer_skills::Column::SkillId.eq(id))
                    .exec(conn)
                    .await?
            }
            VocabKind::Language => {
                freelancer_languages::Entity::delete_many()
                    .filter(freelancer_languages::Column::ProfileId.eq(profile_id))
                    .filter(freelancer_languages::Column::LanguageId.eq(id))
                    .exec(conn)
                    .await?
            }
        };
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl VocabAttachmentRepository for VocabAttachmentRepositoryPostgres {
    async fn count_attached(
        &self,
        profile_id: i64,
        kind: VocabKind,
    ) -> Result<u64, AttachmentRepositoryError> {
        let count = match kind {
            VocabKind::Niche => freelancer_niches::Entity::find()
                .filter(freelancer_niches::Column::ProfileId.eq(profile_id))
                .count(&*self.db)
                .await
                .map_err(Self::db_err)?,
            VocabKind::Skill => freelancer_skills::Entity::find()
                .filter(freelancer_skills::Column::ProfileId.eq(profile_id))
                .count(&*self.db)
                .await
                .map_err(Self::db_err)?,
            VocabKind::Language => freelancer_languages::Entity::find()
                .filter(freelancer_languages::Column::ProfileId.eq(profile_id))
                .count(&*self.db)
                .await
                .map_err(Self::db_err)?,
        };
        Ok(count)
    }

    async fn attach_many(
        &self,
        profile_id: i64,
        kind: VocabKind,
        ids: &[i64],
    ) -> Result<AttachmentReport, AttachmentRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::db_err)?;
        let mut report = AttachmentReport::default();

        for &id in ids {
            Self::attach_one(&txn, profile_id, kind, id, &mut report)
                .await
                .map_err(Self::db_err)?;
        }

        txn.commit().await.map_err(Self::db_err)?;
        Ok(report)
    }

    async fn detach_many(
        &self,
        profile_id: i64,
        kind: VocabKind,
        ids: &[i64],
    ) -> Result<AttachmentReport, AttachmentRepositoryError> {
        let mut report = AttachmentReport::default();

        for &id in ids {
            if !Self::vocab_exists(&*self.db, kind, id)
                .await
                .map_err(Self::db_err)?
            {
                report
                    .errors
                    .push(format!("{} with id {} does not exist.", kind.noun(), id));
                continue;
            }
            let removed = Self::delete_pair(&*self.db, profile_id, kind, id)
                .await
                .map_err(Self::db_err)?;
            if removed == 0 {
                report.errors.push(format!(
                    "{} with id {} is not attached to this profile.",
                    kind.noun(),
                    id
                ));
            }
        }

        Ok(report)
    }
}
