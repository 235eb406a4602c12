pub mod google;

pub use google::{sso_google_callback_handler, sso_google_login_handler};
