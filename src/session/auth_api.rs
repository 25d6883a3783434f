use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::UserEntry;
use crate::error::AuthError;
use crate::models::{Credentials, Token};

/// Exchanges credentials for a token (token-based session variant).
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// A descriptive name for logs.
    fn get_name(&self) -> &str;
    async fn login(&self, credentials: &Credentials) -> Result<Token, AuthError>;
}

/// True if `credentials` match one of the configured accounts.
/// Emails compare case-insensitively, passwords exactly.
pub fn check_credentials(users: &[UserEntry], credentials: &Credentials) -> bool {
    users.iter().any(|entry| {
        entry.email.eq_ignore_ascii_case(credentials.email.trim())
            && entry.password == credentials.password
    })
}

/// Stub API that checks credentials against a fixed account list and
/// hands out random tokens.
pub struct PlainAuthApi {
    users: Vec<UserEntry>,
}

impl PlainAuthApi {
    pub fn new(users: &[UserEntry]) -> Self {
        info!("Creating plain auth API with {} account(s)", users.len());
        Self {
            users: users.to_vec(),
        }
    }
}

#[async_trait]
impl AuthApi for PlainAuthApi {
    fn get_name(&self) -> &str {
        "plain"
    }

    async fn login(&self, credentials: &Credentials) -> Result<Token, AuthError> {
        debug!("Plain login attempt for '{}'", credentials.email);
        if check_credentials(&self.users, credentials) {
            Ok(Token::generate())
        } else {
            Err(AuthError::Rejected)
        }
    }
}
