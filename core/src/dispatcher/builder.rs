//! Builder pattern for Dispatcher construction

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::channel::ChannelConfig;
use crate::client::HttpClient;
use crate::config::LoadTestConfig;
use crate::error::{Error, Result};
use crate::outcome::RequestOutcome;

use super::executor::Dispatcher;

/// Builder for creating a Dispatcher with proper configuration
///
/// # Example
///
/// ```ignore
/// let config = LoadTestConfig::new("http://localhost:8080/")
///     .with_requests(1000)
///     .with_concurrency(10);
///
/// let (dispatcher, outcome_rx) = DispatcherBuilder::new()
///     .config(config)
///     .client(client)
///     .build()?;
/// let report = dispatcher.run(outcome_rx).await?;
/// ```
pub struct DispatcherBuilder {
    config: LoadTestConfig,
    client: Option<Arc<dyn HttpClient>>,
    channel_config: Option<ChannelConfig>,
}

impl DispatcherBuilder {
    /// Create a new dispatcher builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LoadTestConfig::default(),
            client: None,
            channel_config: None,
        }
    }

    /// Set the full load test configuration
    pub fn config(mut self, config: LoadTestConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the target URL
    pub fn target_url(mut self, url: impl Into<String>) -> Self {
        self.config.target_url = url.into();
        self
    }

    /// Set the total request count
    pub fn total_requests(mut self, total: usize) -> Self {
        self.config.total_requests = total;
        self
    }

    /// Set the concurrency level
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Set the HTTP client shared by all workers
    pub fn client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Override the channel configuration
    ///
    /// Defaults to a buffer sized to the total request count.
    pub fn channel_config(mut self, config: ChannelConfig) -> Self {
        self.channel_config = Some(config);
        self
    }

    /// Build the dispatcher and return it along with the outcome receiver
    ///
    /// # Errors
    ///
    /// Returns an error if the client is not set, if configuration
    /// validation fails, or if the outcome buffer cannot hold every
    /// outcome of the run.
    pub fn build(self) -> Result<(Dispatcher, mpsc::Receiver<RequestOutcome>)> {
        let client = self.client.ok_or_else(|| Error::missing_config("client"))?;

        self.config.validate()?;

        let total = self.config.total_requests;
        let channel_config = self
            .channel_config
            .unwrap_or_else(|| ChannelConfig::for_requests(total));

        if !channel_config.holds(total) {
            return Err(Error::dispatch(format!(
                "outcome buffer of {} cannot hold {} outcomes",
                channel_config.outcome_buffer, total
            )));
        }

        let (outcome_tx, outcome_rx) = mpsc::channel(channel_config.outcome_buffer);

        let dispatcher = Dispatcher::new(self.config, client, outcome_tx);

        Ok((dispatcher, outcome_rx))
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
