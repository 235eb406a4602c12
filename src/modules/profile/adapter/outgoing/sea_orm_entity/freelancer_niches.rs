use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "freelancer_niches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub profile_id: i64,
    pub niche_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::freelancer_profiles::Entity",
        from = "Column::ProfileId",
        to = "super::freelancer_profiles::Column::Id"
    )]
    Profile,
    #[sea_orm(
        belongs_to = "crate::modules::vocabulary::adapter::outgoing::sea_orm_entity::niches::Entity",
        from = "Column::NicheId",
        to = "crate::modules::vocabulary::adapter::outgoing::sea_orm_entity::niches::Column::Id"
    )]
    Niche,
}

impl ActiveModelBehavior for ActiveModel {}
