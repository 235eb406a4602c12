use crate::modules::auth::application::domain::entities::PasswordOtp;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "password_otps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub email: String,
    pub code: String,
    pub expires_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PasswordOtp {
    fn from(model: Model) -> Self {
        PasswordOtp {
            id: model.id,
            email: model.email,
            code: model.code,
            expires_at: model.expires_at.with_timezone(&chrono::Utc),
        }
    }
}
