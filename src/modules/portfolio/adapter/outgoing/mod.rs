pub mod link_repository_postgres;
pub mod project_repository_postgres;
pub mod sea_orm_entity;
pub mod work_experience_repository_postgres;
