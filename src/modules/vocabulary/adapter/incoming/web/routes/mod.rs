pub mod create_vocabulary;
pub mod list_vocabulary;

pub use create_vocabulary::{create_language_handler, create_niche_handler, create_skill_handler};
pub use list_vocabulary::{list_languages_handler, list_niches_handler, list_skills_handler};
