pub mod json_config;
pub mod pagination;
pub mod response;

pub use json_config::custom_json_config;
pub use pagination::PageQuery;
pub use response::ApiResponse;
