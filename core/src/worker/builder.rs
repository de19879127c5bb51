//! Builder pattern for Worker construction

use crate::client::HttpClient;
use crate::error::{Error, Result};
use crate::outcome::RequestOutcome;

use super::executor::Worker;

use std::sync::Arc;
use tokio::sync::mpsc;

/// Builder for creating Worker instances
///
/// # Example
/// ```ignore
/// let worker = WorkerBuilder::new(0)
///     .client(client)
///     .target_url("http://localhost:8080/")
///     .quota(25)
///     .outcome_tx(tx)
///     .build()?;
/// ```
pub struct WorkerBuilder {
    id: usize,
    client: Option<Arc<dyn HttpClient>>,
    target_url: Option<Arc<str>>,
    quota: Option<usize>,
    outcome_tx: Option<mpsc::Sender<RequestOutcome>>,
}

impl WorkerBuilder {
    /// Create a new builder with the given worker ID
    pub fn new(id: usize) -> Self {
        Self {
            id,
            client: None,
            target_url: None,
            quota: None,
            outcome_tx: None,
        }
    }

    /// Set the HTTP client
    pub fn client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the target URL
    pub fn target_url(mut self, url: impl Into<Arc<str>>) -> Self {
        self.target_url = Some(url.into());
        self
    }

    /// Set the number of requests this worker issues
    pub fn quota(mut self, quota: usize) -> Self {
        self.quota = Some(quota);
        self
    }

    /// Set the outcome channel sender
    pub fn outcome_tx(mut self, tx: mpsc::Sender<RequestOutcome>) -> Self {
        self.outcome_tx = Some(tx);
        self
    }

    /// Build the Worker
    ///
    /// # Errors
    /// Returns an error if any required field is missing.
    pub fn build(self) -> Result<Worker> {
        let client = self.client.ok_or(Error::missing_config("client"))?;
        let target_url = self
            .target_url
            .ok_or(Error::missing_config("target_url"))?;
        let quota = self.quota.ok_or(Error::missing_config("quota"))?;
        let outcome_tx = self
            .outcome_tx
            .ok_or(Error::missing_config("outcome_tx"))?;

        Ok(Worker::new(self.id, client, target_url, quota, outcome_tx))
    }
}
