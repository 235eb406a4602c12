pub mod sea_orm_entity;
pub mod vocabulary_query_postgres;
pub mod vocabulary_repository_postgres;
