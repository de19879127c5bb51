//! Dispatcher for load test execution
//!
//! The Dispatcher runs one load test end to end:
//! - Partitioning the total request count into per-worker quotas
//! - Spawning one worker task per quota, all sharing one HTTP client
//! - Watching for every worker to finish, panics included
//! - Feeding the outcome channel into the aggregator
//!
//! The outcome channel is buffered to hold every outcome of the run, so
//! workers never wait on a slow aggregator. It closes once the last worker
//! drops its sender, which ends aggregation.
//!
//! There is no per-request timeout and no cancellation: a target that
//! never answers stalls the worker waiting on it, and the run with it.
//!
//! # Example
//!
//! ```ignore
//! use loadtest_core::{run_load_test, LoadTestConfig, ReqwestClient};
//!
//! let config = LoadTestConfig::new("http://localhost:8080/")
//!     .with_requests(1000)
//!     .with_concurrency(10);
//!
//! let report = run_load_test(config, Arc::new(ReqwestClient::new()?)).await?;
//! println!("{} of {} succeeded", report.success_count, report.total_requests);
//! ```

mod builder;
mod executor;
mod partition;

pub use builder::DispatcherBuilder;
pub use executor::{DispatchHandle, Dispatcher};
pub use partition::partition_quotas;

use std::sync::Arc;

use crate::aggregator::Report;
use crate::client::HttpClient;
use crate::config::LoadTestConfig;
use crate::error::Result;

/// Validate `config`, run the load test and return its report
pub async fn run_load_test(config: LoadTestConfig, client: Arc<dyn HttpClient>) -> Result<Report> {
    let (dispatcher, outcome_rx) = DispatcherBuilder::new()
        .config(config)
        .client(client)
        .build()?;

    dispatcher.run(outcome_rx).await
}
