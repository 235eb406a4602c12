pub mod change_password;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod register_user;
pub mod request_password_otp;
pub mod verify_password_otp;

#[cfg(test)]
pub mod mocks;
