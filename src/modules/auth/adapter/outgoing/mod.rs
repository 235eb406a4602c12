pub mod jwt;
pub mod otp_repository_postgres;
pub mod sea_orm_entity;
pub mod security;
pub mod token_blacklist_redis;
pub mod user_query_postgres;
pub mod user_repository_postgres;
