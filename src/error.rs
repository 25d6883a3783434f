//! Error types shared across the session, task and validation layers.

use thiserror::Error;

/// Input rejected before it reaches a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task text must not be empty")]
    EmptyTaskText,
    #[error("token must not be empty")]
    EmptyToken,
}

/// Failure of an authentication round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Bad credentials, or an expired/unknown session.
    #[error("authentication rejected")]
    Rejected,
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Transport(e.to_string())
    }
}

/// Why a login form submission did not log the client in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("login form is invalid")]
    Invalid(Vec<crate::validation::FieldError>),
    #[error(transparent)]
    Auth(#[from] AuthError),
}
