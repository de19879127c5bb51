//! loadtest-core: request dispatch and result aggregation for http-loadtest
//!
//! This crate holds everything between a validated configuration and a
//! finished report:
//!
//! - Configuration and channel sizing
//! - The `HttpClient` seam and its reqwest implementation
//! - Workers, each issuing a fixed quota of GET requests
//! - The dispatcher, which partitions work and watches workers finish
//! - The aggregator, which folds the outcome stream into a `Report`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregator;
pub mod channel;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod outcome;
pub mod worker;

#[cfg(test)]
mod mock;

pub use aggregator::{Aggregator, Report};
pub use channel::ChannelConfig;
pub use client::{HttpClient, ReqwestClient};
pub use config::{ConfigError, LoadTestConfig};
pub use dispatcher::{
    partition_quotas, run_load_test, DispatchHandle, Dispatcher, DispatcherBuilder,
};
pub use error::{Error, ErrorKind, Result, TransportError};
pub use outcome::{OutcomeStatus, RequestOutcome, ERROR_STATUS_KEY, SUCCESS_STATUS};
pub use worker::{Worker, WorkerBuilder, WorkerStats};
