pub mod links;
pub mod projects;
pub mod work_experiences;

pub use links::{create_link_handler, delete_link_handler, update_link_handler};
pub use projects::{create_project_handler, delete_project_handler, list_projects_handler};
pub use work_experiences::{
    create_work_experience_handler, delete_work_experience_handler, list_work_experiences_handler,
};
