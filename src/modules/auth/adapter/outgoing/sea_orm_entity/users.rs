use crate::modules::auth::application::domain::entities::{Role, User};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// A row with an unrecognized role is corrupt data, not a variant to
    /// limp along with.
    pub fn into_domain(self) -> Result<User, String> {
        let role = Role::parse(&self.role)
            .ok_or_else(|| format!("unknown role '{}' on user {}", self.role, self.id))?;
        Ok(User {
            id: self.id,
            uuid: self.uuid,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role,
            is_active: self.is_active,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        })
    }
}
