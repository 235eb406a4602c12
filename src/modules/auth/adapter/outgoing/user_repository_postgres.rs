use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{NewUser, Role, User};
use crate::modules::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    admin_profiles, freelancer_profiles, sponsor_profiles,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use sea_orm::{ColumnTrait, QueryFilter};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_unique_violation(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        let is_unique = err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint");
        if is_unique && err_str.contains("username") {
            return UserRepositoryError::UsernameTaken;
        }
        if is_unique && err_str.contains("email") {
            return UserRepositoryError::EmailTaken;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_with_profile(&self, data: NewUser) -> Result<User, UserRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        let active_user = UserActiveModel {
            uuid: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            is_active: Set(true),
            ..Default::default()
        };

        let inserted = active_user
            .insert(&txn)
            .await
            .map_err(Self::map_unique_violation)?;

        // The profile row lands in the table matching the role, same
        // transaction as the user row.
        match data.role {
            Role::Freelancer => {
                freelancer_profiles::ActiveModel {
                    user_id: Set(inserted.id),
                    provider: Set(data.provider),
                    provider_user_id: Set(data.provider_user_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
            }
            Role::Sponsor => {
                sponsor_profiles::ActiveModel {
                    user_id: Set(inserted.id),
                    provider: Set(data.provider),
                    provider_user_id: Set(data.provider_user_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
            }
            Role::Admin => {
                admin_profiles::ActiveModel {
                    user_id: Set(inserted.id),
                    provider: Set(data.provider),
                    provider_user_id: Set(data.provider_user_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        inserted
            .into_domain()
            .map_err(UserRepositoryError::DatabaseError)
    }

    async fn update_password(
        &self,
        user_uuid: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Uuid.eq(user_uuid))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_hash = Set(new_password_hash);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_by_uuid(&self, user_uuid: Uuid) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Uuid.eq(user_uuid))
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let active_user: UserActiveModel = user.into();
        active_user
            .delete(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
