//! Cookie-based session: the server owns the credential, the client only
//! tracks whether the last round trip said we are logged in.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{Authenticated, RemoteAuth};
use crate::error::AuthError;
use crate::models::{AuthStatus, Credentials};
use crate::utils::observers::{Observers, SubscriptionId};

pub struct CookieSessionModel {
    status: AuthStatus,
    remote: Arc<dyn RemoteAuth>,
    observers: Observers<AuthStatus>,
}

impl CookieSessionModel {
    /// Starts unauthenticated without touching the network.
    pub fn new(remote: Arc<dyn RemoteAuth>) -> Self {
        CookieSessionModel {
            status: AuthStatus::Unauthenticated,
            remote,
            observers: Observers::default(),
        }
    }

    /// Startup path: ask the server to decide the initial state.
    pub async fn restore(remote: Arc<dyn RemoteAuth>) -> Self {
        let mut session = Self::new(remote);
        if let Err(e) = session.validate_session().await {
            debug!("Starting unauthenticated, session check failed: {}", e);
        }
        session
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    /// On failure the flag keeps its previous value.
    pub async fn login_remote(&mut self, credentials: &Credentials) -> Result<(), AuthError> {
        match self.remote.login(credentials).await {
            Ok(()) => {
                info!("Remote login succeeded for '{}'", credentials.email);
                self.transition(AuthStatus::Authenticated);
                Ok(())
            }
            Err(e) => {
                warn!(
                    "Remote login via '{}' failed for '{}': {}",
                    self.remote.get_name(),
                    credentials.email,
                    e
                );
                Err(e)
            }
        }
    }

    /// On failure the flag keeps its previous value.
    pub async fn logout_remote(&mut self) -> Result<(), AuthError> {
        match self.remote.logout().await {
            Ok(()) => {
                info!("Remote logout succeeded");
                self.transition(AuthStatus::Unauthenticated);
                Ok(())
            }
            Err(e) => {
                warn!("Remote logout via '{}' failed: {}", self.remote.get_name(), e);
                Err(e)
            }
        }
    }

    /// Any failure, including transport errors, means unauthenticated.
    pub async fn validate_session(&mut self) -> Result<(), AuthError> {
        match self.remote.validate().await {
            Ok(()) => {
                info!("Remote session is valid");
                self.transition(AuthStatus::Authenticated);
                Ok(())
            }
            Err(e) => {
                info!("Remote session is not valid: {}", e);
                self.transition(AuthStatus::Unauthenticated);
                Err(e)
            }
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&AuthStatus) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn transition(&mut self, status: AuthStatus) {
        self.status = status;
        self.observers.notify(&self.status);
    }
}

impl Authenticated for CookieSessionModel {
    fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }
}
