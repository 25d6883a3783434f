//! HTTP route definitions and handlers of the stub authentication server.

mod auth_routes;
mod health_routes;

use crate::state::AppState;
use crate::utils::http_helpers::session_layer;
use axum::Router;

/// Creates the application router with all configured routes.
pub fn create_router(state: AppState) -> Router {
    let sessions = session_layer(&state.config.server);
    Router::new()
        .merge(auth_routes::routes())
        .merge(health_routes::routes())
        .layer(sessions)
        .with_state(state)
}
