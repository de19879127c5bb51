//! HTTP client trait and the reqwest-backed implementation
//!
//! Workers only see the [`HttpClient`] trait, so tests can script statuses
//! and failures without a network while the binary uses [`ReqwestClient`].

use crate::error::{Error, Result, TransportError};
use async_trait::async_trait;

// ============================================================================
// HTTP Client Trait
// ============================================================================

/// Issues GET requests on behalf of workers
///
/// One instance is shared by every worker through an `Arc`, so
/// implementations must be safe for concurrent use. The connection pool
/// behind [`ReqwestClient`] is.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Client identifier for logs
    fn name(&self) -> &str;

    /// Perform one GET against `url` and return the response status code
    ///
    /// Implementations must consume the whole response body before
    /// returning so the connection can go back to the pool. Any status code
    /// is a successful return; only failures that prevent a status line
    /// from being read are errors.
    async fn get(&self, url: &str) -> std::result::Result<u16, TransportError>;
}

// ============================================================================
// reqwest implementation
// ============================================================================

/// [`HttpClient`] backed by a pooled `reqwest::Client`
///
/// No request timeout is configured: a server that never answers keeps the
/// calling worker suspended for the rest of the run.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with a fresh connection pool
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("http-loadtest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest::Client`
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn get(&self, url: &str) -> std::result::Result<u16, TransportError> {
        let mut response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        // Drain without buffering the whole body.
        loop {
            match response.chunk().await {
                Ok(Some(_)) => continue,
                Ok(None) => break,
                Err(e) => {
                    // The server did answer; keep its status.
                    tracing::debug!(status, error = %e, "Failed to drain response body");
                    break;
                }
            }
        }

        Ok(status)
    }
}
