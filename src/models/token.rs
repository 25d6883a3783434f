use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// An opaque credential proving a prior successful login. Never empty.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Accepts any string that is not empty or whitespace-only.
    /// The value is kept verbatim.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyToken);
        }
        Ok(Token(raw))
    }

    /// A freshly generated random token (UUID v4).
    pub fn generate() -> Self {
        Token(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Token {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Token::parse(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

// Keep credentials out of logs.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}
