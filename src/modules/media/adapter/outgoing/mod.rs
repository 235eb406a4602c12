pub mod media_binding_repository_postgres;
pub mod media_store_gcs;
