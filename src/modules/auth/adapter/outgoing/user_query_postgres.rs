use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    admin_profiles, freelancer_profiles, sponsor_profiles,
};

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_one(
        &self,
        filter: sea_orm::sea_query::SimpleExpr,
    ) -> Result<Option<User>, UserQueryError> {
        let found = UserEntity::find()
            .filter(filter)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        found
            .map(|model| model.into_domain().map_err(UserQueryError::DatabaseError))
            .transpose()
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        self.find_one(UserColumn::Username.eq(username)).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.find_one(UserColumn::Email.eq(email)).await
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<User>, UserQueryError> {
        self.find_one(UserColumn::Uuid.eq(uuid)).await
    }

    async fn signup_provider(&self, user: &User) -> Result<Option<String>, UserQueryError> {
        let provider: Option<String> = match user.role {
            Role::Freelancer => freelancer_profiles::Entity::find()
                .select_only()
                .column(freelancer_profiles::Column::Provider)
                .filter(freelancer_profiles::Column::UserId.eq(user.id))
                .into_tuple()
                .one(&*self.db)
                .await
                .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?,
            Role::Sponsor => sponsor_profiles::Entity::find()
                .select_only()
                .column(sponsor_profiles::Column::Provider)
                .filter(sponsor_profiles::Column::UserId.eq(user.id))
                .into_tuple()
                .one(&*self.db)
                .await
                .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?,
            Role::Admin => admin_profiles::Entity::find()
                .select_only()
                .column(admin_profiles::Column::Provider)
                .filter(admin_profiles::Column::UserId.eq(user.id))
                .into_tuple()
                .one(&*self.db)
                .await
                .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?,
        };

        Ok(provider)
    }
}
