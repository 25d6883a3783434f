use super::token::Token;

/// The two states of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    Authenticated,
}

/// Client-side record of the current session in the token variant.
///
/// The status is derived from the token, so "authenticated without a token"
/// cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    token: Option<Token>,
}

impl SessionState {
    pub fn authenticated(token: Token) -> Self {
        SessionState { token: Some(token) }
    }

    pub fn unauthenticated() -> Self {
        SessionState { token: None }
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn status(&self) -> AuthStatus {
        match self.token {
            Some(_) => AuthStatus::Authenticated,
            None => AuthStatus::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == AuthStatus::Authenticated
    }
}
