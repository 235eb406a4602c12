pub mod auth;
pub mod email;
pub mod event;
pub mod media;
pub mod newsfeed;
pub mod portfolio;
pub mod profile;
pub mod sso;
pub mod vocabulary;
