pub mod vocabulary_query;
pub mod vocabulary_repository;
