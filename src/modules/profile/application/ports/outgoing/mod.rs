pub mod attachment_repository;
pub mod profile_query;
pub mod profile_repository;
