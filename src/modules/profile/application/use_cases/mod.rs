pub mod attach_vocabularies;
pub mod delete_freelancer_profile;
pub mod detach_vocabularies;
pub mod get_admin_profile;
pub mod get_freelancer_profile;
pub mod list_admin_profiles;
pub mod list_freelancer_profiles;
pub mod update_admin_profile;
pub mod update_freelancer_profile;

#[cfg(test)]
pub mod mocks;
