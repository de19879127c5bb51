//! Worker execution loop

use crate::client::HttpClient;
use crate::outcome::RequestOutcome;

use super::stats::WorkerStats;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Worker issues its quota of requests: request -> record -> send -> repeat
///
/// Workers are independent tokio tasks spawned by the Dispatcher. They
/// share the HTTP client via Arc and each owns a clone of the outcome
/// sender; the channel closes once every worker has dropped its sender.
pub struct Worker {
    /// Unique worker identifier
    id: usize,

    /// HTTP client (shared across workers via Arc)
    client: Arc<dyn HttpClient>,

    /// Endpoint every request targets
    target_url: Arc<str>,

    /// Number of requests this worker issues
    quota: usize,

    /// Channel sender for outcomes
    outcome_tx: mpsc::Sender<RequestOutcome>,
}

impl Worker {
    /// Create a new worker
    pub fn new(
        id: usize,
        client: Arc<dyn HttpClient>,
        target_url: Arc<str>,
        quota: usize,
        outcome_tx: mpsc::Sender<RequestOutcome>,
    ) -> Self {
        Self {
            id,
            client,
            target_url,
            quota,
            outcome_tx,
        }
    }

    /// Run the worker loop
    ///
    /// Issues exactly `quota` requests unless the outcome channel is closed
    /// underneath it. Request failures never end the loop; they are sent
    /// on as outcomes like any response.
    pub async fn run(self) -> WorkerStats {
        let mut stats = WorkerStats::new(self.quota);
        stats.start();

        tracing::debug!(worker_id = self.id, quota = self.quota, "Worker started");

        for _ in 0..self.quota {
            let outcome = self.execute_one().await;
            stats.record(&outcome);

            if self.outcome_tx.send(outcome).await.is_err() {
                tracing::debug!(
                    worker_id = self.id,
                    "Outcome channel closed, worker stopping"
                );
                break;
            }
        }

        stats.stop();
        tracing::debug!(
            worker_id = self.id,
            responses = stats.responses,
            errors = stats.errors,
            elapsed_ms = ?stats.elapsed().map(|d| d.as_millis()),
            "Worker finished"
        );

        stats
    }

    /// Execute a single request
    async fn execute_one(&self) -> RequestOutcome {
        let start = Instant::now();
        let result = self.client.get(&self.target_url).await;
        let duration = start.elapsed();

        let outcome = match result {
            Ok(status) => RequestOutcome::response(self.id, status),
            Err(e) => {
                tracing::debug!(worker_id = self.id, error = %e, "Request failed");
                RequestOutcome::failed(self.id, e)
            }
        };

        outcome.with_duration(duration)
    }

    /// Get the worker ID
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get the number of requests assigned to this worker
    pub fn quota(&self) -> usize {
        self.quota
    }
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("id", &self.id)
            .field("client", &self.client.name())
            .field("target_url", &self.target_url)
            .field("quota", &self.quota)
            .finish()
    }
}
