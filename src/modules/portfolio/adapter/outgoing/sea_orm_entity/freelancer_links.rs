use sea_orm::entity::prelude::*;

use crate::modules::profile::application::domain::entities::ProfileLink;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "freelancer_links")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub profile_id: i64,
    pub name: String,
    pub icon: Option<String>,
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::freelancer_profiles::Entity",
        from = "Column::ProfileId",
        to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::freelancer_profiles::Column::Id"
    )]
    Profile,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProfileLink {
    fn from(model: Model) -> Self {
        ProfileLink {
            id: model.id,
            profile_id: model.profile_id,
            name: model.name,
            icon: model.icon,
            url: model.url,
        }
    }
}
