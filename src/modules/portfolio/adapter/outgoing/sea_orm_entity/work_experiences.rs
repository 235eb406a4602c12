use sea_orm::entity::prelude::*;

use crate::modules::profile::application::domain::entities::WorkExperience;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "work_experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub profile_id: i64,
    pub job_title: String,
    pub company: String,
    pub company_url: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub description: String,
    pub current_role: bool,
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

impl From<Model> for WorkExperience {
    fn from(model: Model) -> Self {
        WorkExperience {
            id: model.id,
            profile_id: model.profile_id,
            job_title: model.job_title,
            company: model.company,
            company_url: model.company_url,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
            current_role: model.current_role,
        }
    }
}
