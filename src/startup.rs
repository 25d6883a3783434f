//! Stub authentication server startup.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::routes;
use crate::state::AppState;

/// Binds to `server.bind_address` and serves the auth routes until the
/// process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    if config.users.is_empty() {
        tracing::warn!("No users configured; every login will be rejected.");
    }

    let state = AppState::new(config.clone());
    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    info!("Starting stub auth server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
