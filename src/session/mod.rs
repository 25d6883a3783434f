pub mod auth_api;
pub mod cookie_session;
pub mod remote_auth;
pub mod token_session;

pub use auth_api::{check_credentials, AuthApi, PlainAuthApi};
pub use cookie_session::CookieSessionModel;
pub use remote_auth::{HttpRemoteAuth, RemoteAuth};
pub use token_session::SessionModel;

/// Anything that can answer "is the current client logged in?".
pub trait Authenticated {
    fn is_authenticated(&self) -> bool;
}
