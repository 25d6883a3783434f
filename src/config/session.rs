use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which authentication design the client runs with.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
pub enum SessionMode {
    /// Token kept in durable client storage.
    #[serde(rename = "token")]
    #[default]
    Token,
    /// HttpOnly cookie owned by the server; the client only tracks a flag.
    #[serde(rename = "cookie")]
    Cookie,
}

#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct SessionConfig {
    #[serde(default)]
    pub mode: SessionMode,
    /// Storage key holding the token in `token` mode.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Remote endpoint used in `cookie` mode.
    #[serde(default)]
    pub remote: RemoteAuthConfig,
}

fn default_token_key() -> String {
    "token".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            mode: SessionMode::default(),
            token_key: default_token_key(),
            remote: RemoteAuthConfig::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct RemoteAuthConfig {
    /// Base URL the `/api/auth/*` paths are appended to.
    pub base_url: String,
    /// No timeout unless set.
    #[serde(default)]
    pub timeout_in_ms: Option<u64>,
}

impl Default for RemoteAuthConfig {
    fn default() -> Self {
        RemoteAuthConfig {
            base_url: "http://127.0.0.1:8081".to_string(),
            timeout_in_ms: None,
        }
    }
}

/// Route protection settings.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct RoutesConfig {
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_protected")]
    pub protected: Vec<String>,
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_protected() -> Vec<String> {
    vec!["/todos".to_string()]
}

impl Default for RoutesConfig {
    fn default() -> Self {
        RoutesConfig {
            login_path: default_login_path(),
            protected: default_protected(),
        }
    }
}
