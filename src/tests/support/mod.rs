pub mod app_state_builder;
pub mod auth;

pub use app_state_builder::TestAppStateBuilder;
