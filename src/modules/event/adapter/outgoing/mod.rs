pub mod event_query_postgres;
pub mod event_repository_postgres;
pub mod membership_repository_postgres;
pub mod sea_orm_entity;
