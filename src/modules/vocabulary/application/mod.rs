pub mod ports;
pub mod use_cases;
pub mod vocabulary_use_cases;
