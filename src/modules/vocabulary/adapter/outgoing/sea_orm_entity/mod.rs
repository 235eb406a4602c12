pub mod languages;
pub mod niches;
pub mod skills;
