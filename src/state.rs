//! Shared state of the stub authentication server.

use std::sync::Arc;

use crate::config::ConfigV1;

/// State shared across all HTTP handlers. Cheap to clone.
///
/// Server-side sessions live in the session layer installed by
/// [`create_router`](crate::routes::create_router), not here.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
}

impl AppState {
    pub fn new(config: Arc<ConfigV1>) -> Self {
        AppState { config }
    }
}
