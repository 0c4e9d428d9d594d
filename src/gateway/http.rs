//! Reqwest-backed user gateway.
//!
//! The primary transport uses a shared async [`reqwest::Client`]. The fallback
//! builds a [`reqwest::blocking::Client`] per call and runs it on the tokio
//! blocking pool, so it shares no connection state with the primary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use tracing::Instrument;

use super::UserGateway;
use crate::domain::{Result, User, UserdeckError};
use crate::Config;

/// HTTP implementation of [`UserGateway`].
#[derive(Debug, Clone)]
pub struct HttpUserGateway {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl HttpUserGateway {
    /// Builds a gateway for `{base_url}{users_endpoint}`.
    ///
    /// # Errors
    ///
    /// Returns [`UserdeckError::Config`] when the base URL, users endpoint or
    /// timeout is missing, or the joined URL does not parse.
    /// Returns [`UserdeckError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let raw_url = config.api_url(config.users_endpoint()?)?;
        let timeout = config.api_timeout()?;
        let url = Url::parse(&raw_url)
            .map_err(|e| UserdeckError::Config(format!("invalid users URL {raw_url:?}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UserdeckError::Network(e.to_string()))?;

        tracing::debug!(url = %url, timeout_ms = timeout.as_millis(), "user gateway configured");

        Ok(Self { client, url, timeout })
    }

    /// The resolved users URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch_primary(&self) -> Result<Vec<User>> {
        let response = self
            .client
            .get(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(UserdeckError::Http { status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_users(&body)
    }
}

#[async_trait]
impl UserGateway for HttpUserGateway {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        let span = tracing::debug_span!("fetch_users", url = %self.url);
        self.fetch_primary().instrument(span).await
    }

    async fn fetch_users_fallback(&self) -> Result<Vec<User>> {
        let span = tracing::debug_span!("fetch_users_fallback", url = %self.url);
        let url = self.url.clone();
        let timeout = self.timeout;
        tokio::task::spawn_blocking(move || span.in_scope(|| fetch_blocking(url, timeout)))
            .await
            .map_err(|e| UserdeckError::Runtime(e.to_string()))?
    }
}

/// Performs the fallback request on the current (blocking) thread.
///
/// Only `200 OK` counts as success on this transport.
fn fetch_blocking(url: Url, timeout: Duration) -> Result<Vec<User>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| UserdeckError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .map_err(map_transport_error)?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(UserdeckError::Http { status: status.as_u16() });
    }

    let body = response.bytes().map_err(map_transport_error)?;
    let users = parse_users(&body)?;
    tracing::debug!(user_count = users.len(), "fallback fetch succeeded");
    Ok(users)
}

fn parse_users(body: &[u8]) -> Result<Vec<User>> {
    serde_json::from_slice(body).map_err(|e| UserdeckError::Parse(e.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> UserdeckError {
    if error.is_timeout() {
        UserdeckError::Timeout
    } else {
        UserdeckError::Network(error.to_string())
    }
}
