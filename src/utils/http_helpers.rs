use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::error;

use crate::config::ServerConfig;

/// A general purpose HTTP error type that can be converted into an `IntoResponse`.
/// Renders as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct HTTPError {
    status: StatusCode,
    message: String,
}

impl HTTPError {
    /// Creates a new HTTP error with the given status code and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        HTTPError {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }
}

impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

impl From<tower_sessions::session::Error> for HTTPError {
    fn from(e: tower_sessions::session::Error) -> Self {
        error!("Session store failure: {}", e);
        HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, "Session store failure")
    }
}

/// In-memory server sessions behind a script-inaccessible cookie named
/// `server.cookie_name`. Idle sessions expire after `server.session_ttl_in_s`.
///
/// The cookie is not marked `Secure`: the stub server speaks plain HTTP.
pub fn session_layer(config: &ServerConfig) -> SessionManagerLayer<MemoryStore> {
    let ttl = Duration::seconds(i64::from(config.session_ttl_in_s));
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.cookie_name.clone())
        .with_http_only(true)
        .with_secure(false)
        .with_same_site(SameSite::Strict)
        .with_expiry(Expiry::OnInactivity(ttl))
}
