//! Client for the remote keyword-echo function.
//!
//! Forwards `keyword` as a query parameter and hands the remote's answer back
//! unchanged. No retries: a failed call is reported to the caller at once.

use std::time::Duration;

use thiserror::Error;

/// Errors from the remote keyword function.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

/// Successful response from the remote function, relayed as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct KeywordProxy {
    client: reqwest::Client,
    url: String,
}

impl std::fmt::Debug for KeywordProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordProxy").field("url", &self.url).finish_non_exhaustive()
    }
}

impl KeywordProxy {
    /// Creates a client for the function at `url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(url: String, timeout: Duration) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProxyError::ClientInit(e.to_string()))?;
        Ok(Self { client, url })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Call the remote function with `keyword`.
    ///
    /// # Errors
    /// Transport failures, unreadable bodies and non-success statuses.
    pub async fn say(&self, keyword: &str) -> Result<ProxyReply, ProxyError> {
        let response = self.client.get(&self.url).query(&[("keyword", keyword)]).send().await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProxyError::HttpStatus { code: status.as_u16(), body });
        }
        Ok(ProxyReply { status: status.as_u16(), content_type, body })
    }
}
