pub mod password_otps;
pub mod users;
