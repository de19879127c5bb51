//! Worker module for issuing load test requests
//!
//! The Worker is the execution unit of a load test: it owns a fixed quota
//! of requests and runs the loop **request -> record -> send -> repeat**
//! until the quota is spent. Each Worker is a tokio task that:
//!
//! 1. Issues one GET against the target URL via an [`HttpClient`]
//! 2. Turns the status code or transport failure into a [`RequestOutcome`]
//! 3. Sends the outcome to the aggregator via channel
//! 4. Repeats until its quota is exhausted
//!
//! A failed request is just another outcome. Nothing a request does can end
//! the loop early; only a closed outcome channel can.
//!
//! [`HttpClient`]: crate::client::HttpClient
//! [`RequestOutcome`]: crate::outcome::RequestOutcome
//!
//! # Example
//!
//! ```ignore
//! use loadtest_core::worker::WorkerBuilder;
//!
//! let worker = WorkerBuilder::new(0)
//!     .client(client)
//!     .target_url("http://localhost:8080/")
//!     .quota(25)
//!     .outcome_tx(tx)
//!     .build()?;
//!
//! let stats = worker.run().await;
//! println!("Issued: {}", stats.total_requests());
//! ```

mod builder;
mod executor;
mod stats;

pub use builder::WorkerBuilder;
pub use executor::Worker;
pub use stats::WorkerStats;
