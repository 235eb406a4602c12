pub mod profile_picture;
pub mod project_cover;
pub mod resume;

pub use profile_picture::{delete_profile_picture_handler, upload_profile_picture_handler};
pub use project_cover::{delete_project_cover_handler, upload_project_cover_handler};
pub use resume::{delete_resume_handler, upload_resume_handler};
