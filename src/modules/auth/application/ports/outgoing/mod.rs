pub mod otp_repository;
pub mod password_hasher;
pub mod token_blacklist_repository;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use otp_repository::{OtpRepository, OtpRepositoryError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_blacklist_repository::{TokenBlacklistError, TokenBlacklistRepository};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserRepository, UserRepositoryError};
