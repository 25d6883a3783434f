//! Token-based session: the credential lives in durable client storage.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{AuthApi, Authenticated};
use crate::error::AuthError;
use crate::models::{Credentials, SessionState, Token};
use crate::storage::Storage;
use crate::utils::observers::{Observers, SubscriptionId};

pub struct SessionModel {
    state: SessionState,
    storage: Arc<dyn Storage>,
    token_key: String,
    observers: Observers<SessionState>,
}

impl SessionModel {
    /// Startup path: authenticated iff a non-blank token is stored under `token_key`.
    pub fn restore_session(storage: Arc<dyn Storage>, token_key: impl Into<String>) -> Self {
        let token_key = token_key.into();
        let state = match storage.get(&token_key).map(Token::parse) {
            Some(Ok(token)) => {
                info!("Restored session from '{}' storage", storage.get_name());
                SessionState::authenticated(token)
            }
            Some(Err(_)) => {
                warn!("Stored token under '{}' is blank; ignoring it", token_key);
                SessionState::unauthenticated()
            }
            None => {
                debug!("No stored token under '{}'", token_key);
                SessionState::unauthenticated()
            }
        };
        SessionModel {
            state,
            storage,
            token_key,
            observers: Observers::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn token(&self) -> Option<&Token> {
        self.state.token()
    }

    pub fn login(&mut self, token: Token) {
        self.storage.set(&self.token_key, token.as_str());
        self.state = SessionState::authenticated(token);
        info!("Session logged in");
        self.observers.notify(&self.state);
    }

    /// Exchange credentials for a token through `api`, then [`login`](Self::login).
    /// A rejected login leaves the session untouched.
    pub async fn login_with_credentials(
        &mut self,
        api: &dyn AuthApi,
        credentials: &Credentials,
    ) -> Result<(), AuthError> {
        match api.login(credentials).await {
            Ok(token) => {
                self.login(token);
                Ok(())
            }
            Err(e) => {
                warn!(
                    "Login via '{}' failed for '{}': {}",
                    api.get_name(),
                    credentials.email,
                    e
                );
                Err(e)
            }
        }
    }

    /// Idempotent: observers are only told about an actual transition.
    pub fn logout(&mut self) {
        self.storage.remove(&self.token_key);
        if !self.state.is_authenticated() {
            debug!("Logout while already logged out");
            return;
        }
        self.state = SessionState::unauthenticated();
        info!("Session logged out");
        self.observers.notify(&self.state);
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl Authenticated for SessionModel {
    fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserEntry;
    use crate::models::AuthStatus;
    use crate::session::PlainAuthApi;
    use crate::storage::MemoryStorage;
    use std::sync::Mutex;

    fn storage() -> Arc<dyn Storage> {
        Arc::new(MemoryStorage::new())
    }

    fn token(s: &str) -> Token {
        Token::parse(s).unwrap()
    }

    #[test]
    fn test_fresh_storage_is_unauthenticated() {
        let session = SessionModel::restore_session(storage(), "token");
        assert_eq!(session.state().status(), AuthStatus::Unauthenticated);
        assert!(session.token().is_none());
    }

    #[test]
    fn test_login_persists_and_survives_restart() {
        let storage = storage();
        let mut session = SessionModel::restore_session(storage.clone(), "token");
        session.login(token("t-1"));

        assert!(session.is_authenticated());
        assert_eq!(storage.get("token").as_deref(), Some("t-1"));

        let restarted = SessionModel::restore_session(storage, "token");
        assert!(restarted.is_authenticated());
        assert_eq!(restarted.token(), Some(&token("t-1")));
    }

    #[test]
    fn test_logout_clears_memory_and_storage() {
        let storage = storage();
        let mut session = SessionModel::restore_session(storage.clone(), "token");
        session.login(token("t-1"));
        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(storage.get("token"), None);
        assert!(!SessionModel::restore_session(storage, "token").is_authenticated());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = storage();
        let notified = Arc::new(Mutex::new(0));
        let mut session = SessionModel::restore_session(storage.clone(), "token");
        let n = notified.clone();
        session.subscribe(move |_| *n.lock().unwrap() += 1);

        session.logout();
        session.logout();

        assert!(!session.is_authenticated());
        assert_eq!(*notified.lock().unwrap(), 0);
    }

    #[test]
    fn test_blank_stored_token_is_ignored() {
        let storage = storage();
        storage.set("token", "   ");
        assert!(!SessionModel::restore_session(storage, "token").is_authenticated());
    }

    #[test]
    fn test_custom_key_is_used() {
        let storage = storage();
        let mut session = SessionModel::restore_session(storage.clone(), "auth-token");
        session.login(token("abc"));
        assert_eq!(storage.get("auth-token").as_deref(), Some("abc"));
        assert_eq!(storage.get("token"), None);
    }

    #[test]
    fn test_observers_see_each_transition() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut session = SessionModel::restore_session(storage(), "token");
        let s = seen.clone();
        session.subscribe(move |state| s.lock().unwrap().push(state.status()));

        session.login(token("a"));
        session.logout();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![AuthStatus::Authenticated, AuthStatus::Unauthenticated]
        );
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials() {
        let storage = storage();
        let api = PlainAuthApi::new(&[UserEntry {
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
        }]);
        let mut session = SessionModel::restore_session(storage.clone(), "token");

        session
            .login_with_credentials(&api, &Credentials::new("ada@example.com", "hunter22"))
            .await
            .unwrap();

        assert!(session.is_authenticated());
        let stored = storage.get("token").unwrap();
        assert_eq!(session.token().map(Token::as_str), Some(stored.as_str()));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(storage.get("token"), None);
    }

    #[tokio::test]
    async fn test_rejected_credentials_leave_state() {
        let storage = storage();
        let api = PlainAuthApi::new(&[]);
        let mut session = SessionModel::restore_session(storage.clone(), "token");

        let result = session
            .login_with_credentials(&api, &Credentials::new("ada@example.com", "x"))
            .await;

        assert_eq!(result, Err(AuthError::Rejected));
        assert!(!session.is_authenticated());
        assert_eq!(storage.get("token"), None);
    }
}
