pub mod login_state_store;
pub mod oauth_provider;

pub use login_state_store::{LoginStateError, LoginStateStore, PendingLogin};
pub use oauth_provider::{OAuthProvider, OAuthProviderError, OAuthUser};
