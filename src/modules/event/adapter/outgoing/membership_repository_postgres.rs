use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
};
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::event::application::domain::entities::EventMember;
use crate::modules::event::application::ports::outgoing::membership_repository::{
    MembershipRepository, MembershipRepositoryError,
};

use super::sea_orm_entity::{event_attendees, event_cohosts, events};

#[derive(Clone, Debug)]
pub struct MembershipRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MembershipRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_err(e: sea_orm::DbErr) -> MembershipRepositoryError {
        MembershipRepositoryError::DatabaseError(e.to_string())
    }

    fn map_unique_violation(e: sea_orm::DbErr) -> MembershipRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return MembershipRepositoryError::Duplicate;
        }
        Self::db_err(e)
    }

    async fn user_row(&self, user_uuid: Uuid) -> Result<users::Model, MembershipRepositoryError> {
        users::Entity::find()
            .filter(users::Column::Uuid.eq(user_uuid))
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(MembershipRepositoryError::UserNotFound)
    }

    async fn require_event(&self, event_uuid: Uuid) -> Result<(), MembershipRepositoryError> {
        events::Entity::find_by_id(event_uuid)
            .select_only()
            .column(events::Column::Uuid)
            .into_tuple::<Uuid>()
            .one(&*self.db)
            .await
            .map_err(Self::db_err)?
            .ok_or(MembershipRepositoryError::EventNotFound)?;
        Ok(())
    }

    fn member_from(user: users::Model) -> EventMember {
        EventMember {
            uuid: user.uuid,
            username: user.username,
            email: user.email,
        }
    }
}

#[async_trait]
impl MembershipRepository for MembershipRepositoryPostgres {
    async fn add_attendee(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<EventMember, MembershipRepositoryError> {
        self.require_event(event_uuid).await?;
        let user = self.user_row(user_uuid).await?;
        event_attendees::Entity::insert(event_attendees::ActiveModel {
            event_uuid: Set(event_uuid),
            user_id: Set(user.id),
            ..Default::default()
        })
        .exec_without_returning(&*self.db)
        .await
        .map_err(Self::map_unique_violation)?;
        Ok(Self::member_from(user))
    }

    async fn remove_attendee(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<(), MembershipRepositoryError> {
        let user = self.user_row(user_uuid).await?;
        let result = event_attendees::Entity::delete_many()
            .filter(event_attendees::Column::EventUuid.eq(event_uuid))
            .filter(event_attendees::Column::UserId.eq(user.id))
            .exec(&*self.db)
            .await
            .map_err(Self::db_err)?;
        if result.rows_affected == 0 {
            return Err(MembershipRepositoryError::NotMember);
        }
        Ok(())
    }

    async fn add_cohost(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<EventMember, MembershipRepositoryError> {
        self.require_event(event_uuid).await?;
        let user = self.user_row(user_uuid).await?;
        event_cohosts::Entity::insert(event_cohosts::ActiveModel {
            event_uuid: Set(event_uuid),
            user_id: Set(user.id),
            ..Default::default()
        })
        .exec_without_returning(&*self.db)
        .await
        .map_err(Self::map_unique_violation)?;
        Ok(Self::member_from(user))
    }

    async fn remove_cohost(
        &self,
        event_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<(), MembershipRepositoryError> {
        let user = self.user_row(user_uuid).await?;
        let result = event_cohosts::Entity::delete_many()
            .filter(event_cohosts::Column::EventUuid.eq(event_uuid))
            .filter(event_cohosts::Column::UserId.eq(user.id))
            .exec(&*self.db)
            .await
            .map_err(Self::db_err)?;
        if result.rows_affected == 0 {
            return Err(MembershipRepositoryError::NotMember);
        }
        Ok(())
    }
}
