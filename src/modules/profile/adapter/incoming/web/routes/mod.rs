pub mod admin_profiles;
pub mod attachments;
pub mod freelancer_profiles;

pub use admin_profiles::{
    get_admin_profile_handler, list_admin_profiles_handler, update_admin_profile_handler,
};
pub use attachments::{
    attach_languages_handler, attach_niches_handler, attach_skills_handler,
    detach_languages_handler, detach_niches_handler, detach_skills_handler,
};
pub use freelancer_profiles::{
    delete_freelancer_profile_handler, get_freelancer_profile_handler,
    list_freelancer_profiles_handler, update_freelancer_profile_handler,
};
