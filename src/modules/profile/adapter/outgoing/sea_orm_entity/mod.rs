pub mod admin_profiles;
pub mod freelancer_languages;
pub mod freelancer_niches;
pub mod freelancer_profiles;
pub mod freelancer_skills;
pub mod sponsor_profiles;
