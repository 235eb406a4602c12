use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use crate::modules::event::application::domain::entities::Event;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub name: String,
    pub location: String,
    pub starts_at: DateTimeWithTimeZone,
    pub details: String,
    pub price: Option<Decimal>,
    pub max_attendance: Option<i32>,
    pub host_profile_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::admin_profiles::Entity",
        from = "Column::HostProfileId",
        to = "crate::modules::profile::adapter::outgoing::sea_orm_entity::admin_profiles::Column::Id"
    )]
    Host,
}

impl Related<crate::modules::profile::adapter::outgoing::sea_orm_entity::admin_profiles::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Host.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Event {
            uuid: model.uuid,
            name: model.name,
            location: model.location,
            starts_at: model.starts_at,
            details: model.details,
            price: model.price,
            max_attendance: model.max_attendance,
            host_profile_id: model.host_profile_id,
        }
    }
}
