pub mod change_password;
pub mod login_user;
pub mod logout_user;
pub mod password_otp;
pub mod refresh_token;
pub mod register_user;

pub use change_password::change_password_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
pub use password_otp::{request_password_otp_handler, verify_password_otp_handler};
pub use refresh_token::refresh_token_handler;
pub use register_user::{
    register_admin_handler, register_freelancer_handler, register_sponsor_handler,
};

use actix_web::cookie::{Cookie, SameSite};

/// HttpOnly cookie pair set by login-shaped successes; the extractor
/// falls back to `access-token` when no Authorization header is sent.
pub fn auth_cookies(access: &str, refresh: &str) -> (Cookie<'static>, Cookie<'static>) {
    let access_cookie = Cookie::build("access-token", access.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    let refresh_cookie = Cookie::build("refresh-token", refresh.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    (access_cookie, refresh_cookie)
}
