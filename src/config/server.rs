use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings for the stub authentication server.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ServerConfig {
    pub bind_address: String,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Idle time after which a server-side session is dropped.
    #[serde(default = "default_session_ttl_in_s")]
    pub session_ttl_in_s: u32,
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_session_ttl_in_s() -> u32 {
    60 * 60 * 24
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1:8081".to_string(),
            cookie_name: default_cookie_name(),
            session_ttl_in_s: default_session_ttl_in_s(),
        }
    }
}

/// Represents a single account entry (email + password) known to the stub APIs.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct UserEntry {
    pub email: String,
    pub password: String,
}
