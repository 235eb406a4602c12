pub mod google_oauth_provider;
pub mod login_state_redis;
