use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::PasswordOtp;
use crate::modules::auth::application::ports::outgoing::{OtpRepository, OtpRepositoryError};

use super::sea_orm_entity::password_otps::{
    ActiveModel as OtpActiveModel, Column as OtpColumn, Entity as OtpEntity,
};

#[derive(Clone, Debug)]
pub struct OtpRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OtpRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OtpRepository for OtpRepositoryPostgres {
    async fn replace(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), OtpRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;

        // At most one live code per email.
        OtpEntity::delete_many()
            .filter(OtpColumn::Email.eq(email))
            .exec(&txn)
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;

        OtpActiveModel {
            email: Set(email.to_string()),
            code: Set(code.to_string()),
            expires_at: Set(expires_at.into()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))
    }

    async fn find(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<PasswordOtp>, OtpRepositoryError> {
        let found = OtpEntity::find()
            .filter(OtpColumn::Email.eq(email))
            .filter(OtpColumn::Code.eq(code))
            .one(&*self.db)
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;

        Ok(found.map(PasswordOtp::from))
    }

    async fn delete(&self, id: i64) -> Result<(), OtpRepositoryError> {
        OtpEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
