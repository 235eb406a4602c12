use sea_orm::entity::prelude::*;

use crate::modules::profile::application::domain::entities::PortfolioProject;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub profile_id: i64,
    pub name: String,
    pub url: String,
    pub skills: Option<String>,
    pub tools: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub cover_image_public_id: Option<String>,
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

impl From<Model> for PortfolioProject {
    fn from(model: Model) -> Self {
        PortfolioProject {
            id: model.id,
            profile_id: model.profile_id,
            name: model.name,
            url: model.url,
            skills: model.skills,
            tools: model.tools,
            description: model.description,
            cover_image_url: model.cover_image_url,
            cover_image_public_id: model.cover_image_public_id,
        }
    }
}
