//! The explicitly constructed client state container: storage, session and
//! task list, built once at startup and handed to the presentation layer.

use std::sync::Arc;

use tracing::info;

use crate::config::{ConfigV1, SessionMode};
use crate::error::{AuthError, LoginError, ValidationError};
use crate::guard::{Access, RouteGuard};
use crate::models::{Credentials, TaskId, TaskText};
use crate::session::{
    AuthApi, Authenticated, CookieSessionModel, HttpRemoteAuth, PlainAuthApi, SessionModel,
};
use crate::storage::{create_storage, Storage};
use crate::tasks::TaskListModel;
use crate::validation::LoginForm;

/// The session variant picked by `session.mode`.
pub enum Session {
    Token(SessionModel),
    Cookie(CookieSessionModel),
}

impl Session {
    /// Token mode asks `api` for a token; cookie mode goes to the server.
    pub async fn login(
        &mut self,
        api: &dyn AuthApi,
        credentials: &Credentials,
    ) -> Result<(), AuthError> {
        match self {
            Session::Token(session) => session.login_with_credentials(api, credentials).await,
            Session::Cookie(session) => session.login_remote(credentials).await,
        }
    }

    pub async fn logout(&mut self) -> Result<(), AuthError> {
        match self {
            Session::Token(session) => {
                session.logout();
                Ok(())
            }
            Session::Cookie(session) => session.logout_remote().await,
        }
    }
}

impl Authenticated for Session {
    fn is_authenticated(&self) -> bool {
        match self {
            Session::Token(session) => session.is_authenticated(),
            Session::Cookie(session) => session.is_authenticated(),
        }
    }
}

pub struct ClientState {
    storage: Arc<dyn Storage>,
    session: Session,
    tasks: TaskListModel,
    guard: RouteGuard,
    auth_api: Arc<dyn AuthApi>,
}

impl ClientState {
    /// Restore the session and the task list described by `config`.
    ///
    /// Only fails when the HTTP client for cookie mode cannot be built.
    pub async fn initialize(config: &ConfigV1) -> Result<Self, AuthError> {
        let storage = create_storage(&config.storage);
        let session = match config.session.mode {
            SessionMode::Token => Session::Token(SessionModel::restore_session(
                storage.clone(),
                &config.session.token_key,
            )),
            SessionMode::Cookie => {
                let remote = Arc::new(HttpRemoteAuth::new(&config.session.remote)?);
                Session::Cookie(CookieSessionModel::restore(remote).await)
            }
        };
        Ok(Self::from_parts(config, storage, session))
    }

    /// Assemble a client around an already restored session.
    pub fn from_parts(config: &ConfigV1, storage: Arc<dyn Storage>, session: Session) -> Self {
        let tasks = TaskListModel::load_from_storage(storage.clone(), &config.tasks.storage_key);
        let client = ClientState {
            storage,
            session,
            tasks,
            guard: RouteGuard::new(&config.routes),
            auth_api: Arc::new(PlainAuthApi::new(&config.users)),
        };
        info!(
            "Client state ready: authenticated={}, tasks={}",
            client.session.is_authenticated(),
            client.tasks.tasks().len()
        );
        client
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn tasks(&self) -> &TaskListModel {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskListModel {
        &mut self.tasks
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Validate the form, then log in with the configured session variant.
    pub async fn login(&mut self, form: &LoginForm) -> Result<(), LoginError> {
        let credentials = form.validate().map_err(LoginError::Invalid)?;
        self.session
            .login(self.auth_api.as_ref(), &credentials)
            .await?;
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<(), AuthError> {
        self.session.logout().await
    }

    /// ADD from raw user input; blank text never reaches the list.
    pub fn add_task(&mut self, raw: &str) -> Result<TaskId, ValidationError> {
        let text = TaskText::parse(raw)?;
        Ok(self.tasks.add(text))
    }

    pub fn check_route(&self, path: &str) -> Access {
        self.guard.check(path, &self.session)
    }
}
