pub mod event_query;
pub mod event_repository;
pub mod membership_repository;
