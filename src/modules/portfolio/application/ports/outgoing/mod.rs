pub mod link_repository;
pub mod project_repository;
pub mod work_experience_repository;
