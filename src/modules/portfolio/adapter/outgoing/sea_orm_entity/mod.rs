pub mod freelancer_links;
pub mod projects;
pub mod work_experiences;
