pub mod otp_mailer;

pub use otp_mailer::OtpMailer;
