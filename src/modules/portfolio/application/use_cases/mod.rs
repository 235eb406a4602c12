pub mod manage_links;
pub mod manage_projects;
pub mod manage_work_experiences;

#[cfg(test)]
pub mod mocks;
