//! Dispatcher execution logic

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::aggregator::{Aggregator, Report};
use crate::client::HttpClient;
use crate::config::LoadTestConfig;
use crate::error::{Error, Result};
use crate::outcome::RequestOutcome;
use crate::worker::{WorkerBuilder, WorkerStats};

use super::partition::partition_quotas;

/// Dispatcher owns the worker pool for one load test run
///
/// Responsible for partitioning the work, spawning workers and the
/// completion watcher, and handing outcomes to the aggregator.
pub struct Dispatcher {
    /// Load test configuration
    pub(crate) config: LoadTestConfig,

    /// HTTP client (shared across workers)
    pub(crate) client: Arc<dyn HttpClient>,

    /// Outcome sender (cloned for each worker)
    pub(crate) outcome_tx: mpsc::Sender<RequestOutcome>,
}

impl Dispatcher {
    /// Create a new dispatcher
    ///
    /// Use `DispatcherBuilder` for validated construction.
    pub fn new(
        config: LoadTestConfig,
        client: Arc<dyn HttpClient>,
        outcome_tx: mpsc::Sender<RequestOutcome>,
    ) -> Self {
        Self {
            config,
            client,
            outcome_tx,
        }
    }

    /// Get the load test configuration
    pub fn config(&self) -> &LoadTestConfig {
        &self.config
    }

    /// Spawn one worker per quota plus the completion watcher
    ///
    /// Consumes the dispatcher so its own sender is dropped here; from then
    /// on only workers hold senders and the outcome channel closes exactly
    /// when the last of them exits, whether it finished its quota or
    /// panicked.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> Result<DispatchHandle> {
        let Dispatcher {
            config,
            client,
            outcome_tx,
        } = self;

        let target_url: Arc<str> = Arc::from(config.target_url.as_str());
        let quotas = partition_quotas(config.total_requests, config.concurrency);

        // Build every worker before spawning any, so a build failure leaves
        // nothing running.
        let workers = quotas
            .into_iter()
            .enumerate()
            .map(|(worker_id, quota)| {
                WorkerBuilder::new(worker_id)
                    .client(Arc::clone(&client))
                    .target_url(Arc::clone(&target_url))
                    .quota(quota)
                    .outcome_tx(outcome_tx.clone())
                    .build()
            })
            .collect::<Result<Vec<_>>>()?;

        drop(outcome_tx);

        let handles: Vec<_> = workers
            .into_iter()
            .map(|worker| tokio::spawn(worker.run()))
            .collect();

        Ok(DispatchHandle {
            watcher: tokio::spawn(watch_workers(handles)),
        })
    }

    /// Run the load test to completion
    ///
    /// Spawns the workers, drains `outcome_rx` until the channel closes, and
    /// returns the finished report. `total_time` spans dispatch start to the
    /// last outcome consumed.
    pub async fn run(self, outcome_rx: mpsc::Receiver<RequestOutcome>) -> Result<Report> {
        let expected = self.config.total_requests;

        tracing::info!(
            target_url = %self.config.target_url,
            total_requests = expected,
            concurrency = self.config.concurrency,
            "Starting load test"
        );

        let start = Instant::now();
        let handle = self.spawn()?;

        let aggregator = Aggregator::new().consume(outcome_rx).await;
        let total_time = start.elapsed();

        let stats = handle.join().await?;

        if aggregator.total_requests() != expected {
            tracing::warn!(
                expected,
                consumed = aggregator.total_requests(),
                "Consumed outcome count differs from configured request count"
            );
        }

        let mut combined = WorkerStats::default();
        for worker_stats in &stats {
            combined.merge(worker_stats);
        }

        let report = aggregator.finish(total_time);
        tracing::info!(
            elapsed_secs = total_time.as_secs_f64(),
            total_requests = report.total_requests,
            success_count = report.success_count,
            responses = combined.responses,
            errors = combined.errors,
            workers = stats.len(),
            rps = report.requests_per_second(),
            "Load test completed"
        );

        Ok(report)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("client", &self.client.name())
            .finish()
    }
}

/// Handle to the completion watcher of a spawned run
#[derive(Debug)]
pub struct DispatchHandle {
    watcher: JoinHandle<Vec<WorkerStats>>,
}

impl DispatchHandle {
    /// Wait for every worker to finish
    ///
    /// Returns the stats of each worker that ran to completion, in worker
    /// order. Workers that panicked are logged and left out.
    pub async fn join(self) -> Result<Vec<WorkerStats>> {
        self.watcher
            .await
            .map_err(|e| Error::dispatch(format!("completion watcher failed: {e}")))
    }
}

/// Wait until every worker has reported done exactly once
async fn watch_workers(handles: Vec<JoinHandle<WorkerStats>>) -> Vec<WorkerStats> {
    let mut results = Vec::with_capacity(handles.len());
    let mut worker_failures = 0;

    for (worker_id, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(stats) => {
                tracing::debug!(
                    worker_id,
                    quota = stats.quota,
                    responses = stats.responses,
                    errors = stats.errors,
                    "Worker completed"
                );
                results.push(stats);
            }
            Err(e) => {
                worker_failures += 1;
                tracing::error!(worker_id, error = %e, "Worker task panicked");
            }
        }
    }

    tracing::debug!(
        completed = results.len(),
        failed = worker_failures,
        "All workers finished"
    );

    results
}
