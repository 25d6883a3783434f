use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::config::RemoteAuthConfig;
use crate::error::AuthError;
use crate::models::Credentials;

/// Server-side authentication for the cookie variant. The credential is an
/// HttpOnly cookie handled by the transport; callers only learn success or
/// failure.
#[async_trait]
pub trait RemoteAuth: Send + Sync {
    fn get_name(&self) -> &str;
    /// `POST /api/auth/login`
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError>;
    /// `POST /api/auth/logout`
    async fn logout(&self) -> Result<(), AuthError>;
    /// `GET /api/auth/validate`
    async fn validate(&self) -> Result<(), AuthError>;
}

/// [`RemoteAuth`] over HTTP. The client keeps a cookie jar so the session
/// cookie set by `login` is replayed on later calls.
pub struct HttpRemoteAuth {
    client: Client,
    base_url: String,
}

impl HttpRemoteAuth {
    pub fn new(config: &RemoteAuthConfig) -> Result<Self, AuthError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(ms) = config.timeout_in_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check_status(response: Response) -> Result<(), AuthError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::UNAUTHORIZED {
        Err(AuthError::Rejected)
    } else {
        Err(AuthError::UnexpectedStatus(status.as_u16()))
    }
}

#[async_trait]
impl RemoteAuth for HttpRemoteAuth {
    fn get_name(&self) -> &str {
        "http"
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let url = self.url("/api/auth/login");
        debug!("Sending login request to: {}", url);
        let response = self.client.post(&url).json(credentials).send().await?;
        check_status(response)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        let url = self.url("/api/auth/logout");
        debug!("Sending logout request to: {}", url);
        let response = self.client.post(&url).send().await?;
        check_status(response)
    }

    async fn validate(&self) -> Result<(), AuthError> {
        let url = self.url("/api/auth/validate");
        debug!("Sending validate request to: {}", url);
        let response = self.client.get(&url).send().await?;
        check_status(response)
    }
}
