pub mod media_binding_repository;
pub mod media_store;
