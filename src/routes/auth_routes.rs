//! `/api/auth/*`: cookie-based login, logout and session validation.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{info, warn};

use crate::models::Credentials;
use crate::session::check_credentials;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

const EMAIL_KEY: &str = "email";

/// Registers authentication routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/validate", get(validate))
}

#[derive(Serialize, Deserialize)]
struct SessionResponse {
    email: String,
}

/// Binds the email to a fresh session id; the session layer hands out the
/// HttpOnly cookie. A session the client already held is replaced.
async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<Credentials>,
) -> Result<Json<SessionResponse>, HTTPError> {
    if !check_credentials(&state.config.users, &credentials) {
        warn!("Rejected login for '{}'", credentials.email);
        return Err(HTTPError::unauthorized("Invalid email or password"));
    }

    let email = credentials.email.trim().to_string();
    session.cycle_id().await?;
    session.insert(EMAIL_KEY, &email).await?;
    info!("Opened session for '{}'", email);

    Ok(Json(SessionResponse { email }))
}

/// Always succeeds; drops the session if the cookie names one.
async fn logout(session: Session) -> &'static str {
    match session.get::<String>(EMAIL_KEY).await {
        Ok(Some(email)) => info!("Closing session for '{}'", email),
        Ok(None) => {}
        Err(e) => warn!("Could not read session on logout: {}", e),
    }
    if let Err(e) = session.flush().await {
        warn!("Could not drop session on logout: {}", e);
    }
    "Logged out"
}

async fn validate(session: Session) -> Result<Json<SessionResponse>, HTTPError> {
    match session.get::<String>(EMAIL_KEY).await? {
        Some(email) => Ok(Json(SessionResponse { email })),
        None => Err(HTTPError::unauthorized("Session expired or unknown")),
    }
}
