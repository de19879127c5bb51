//! Outcome aggregation into a load test report
//!
//! The [`Aggregator`] is the single consumer of the outcome channel. It
//! tallies every outcome it receives and, once the channel is closed and
//! drained, freezes the tallies into a [`Report`].
//!
//! Tallying is commutative: workers interleave arbitrarily, so the report
//! must not depend on arrival order, and it doesn't.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::outcome::{RequestOutcome, ERROR_STATUS_KEY, SUCCESS_STATUS};

/// Running tallies over the outcome stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    total_requests: usize,
    success_count: usize,
    status_distribution: BTreeMap<u16, usize>,
}

impl Aggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one outcome
    pub fn record(&mut self, outcome: &RequestOutcome) {
        self.total_requests += 1;

        let Some(status) = outcome.status_code() else {
            *self.status_distribution.entry(ERROR_STATUS_KEY).or_insert(0) += 1;
            return;
        };

        *self.status_distribution.entry(status).or_insert(0) += 1;
        if status == SUCCESS_STATUS {
            self.success_count += 1;
        }
    }

    /// Drain the channel until every sender is dropped
    ///
    /// Returns only once the channel is both closed and empty, so no
    /// buffered outcome is left behind.
    pub async fn consume(mut self, mut outcome_rx: mpsc::Receiver<RequestOutcome>) -> Self {
        while let Some(outcome) = outcome_rx.recv().await {
            self.record(&outcome);
        }
        self
    }

    /// Outcomes counted so far
    pub fn total_requests(&self) -> usize {
        self.total_requests
    }

    /// Freeze the tallies into a report
    pub fn finish(self, total_time: Duration) -> Report {
        Report {
            total_requests: self.total_requests,
            success_count: self.success_count,
            status_distribution: self.status_distribution,
            total_time,
        }
    }
}

impl FromIterator<RequestOutcome> for Aggregator {
    fn from_iter<I: IntoIterator<Item = RequestOutcome>>(iter: I) -> Self {
        let mut aggregator = Aggregator::new();
        for outcome in iter {
            aggregator.record(&outcome);
        }
        aggregator
    }
}

/// Aggregate result of a load test run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Outcomes consumed
    pub total_requests: usize,

    /// Outcomes with status 200
    pub success_count: usize,

    /// Status code -> count; transport failures under [`ERROR_STATUS_KEY`]
    pub status_distribution: BTreeMap<u16, usize>,

    /// Wall-clock time from dispatch start to the last outcome consumed
    pub total_time: Duration,
}

impl Report {
    /// Requests that did not get a 200 (other statuses and errors)
    pub fn failure_count(&self) -> usize {
        self.total_requests - self.success_count
    }

    /// Requests that never received a status code
    pub fn error_count(&self) -> usize {
        self.count_for(ERROR_STATUS_KEY)
    }

    /// Count recorded for a status code
    pub fn count_for(&self, status: u16) -> usize {
        self.status_distribution.get(&status).copied().unwrap_or(0)
    }

    /// Responses that carried a real HTTP status, grouped by code
    pub fn http_statuses(&self) -> impl Iterator<Item = (u16, usize)> + '_ {
        self.status_distribution
            .iter()
            .filter(|(status, _)| **status != ERROR_STATUS_KEY)
            .map(|(status, count)| (*status, *count))
    }

    /// Throughput over the whole run; zero when no time elapsed
    pub fn requests_per_second(&self) -> f64 {
        let secs = self.total_time.as_secs_f64();
        if secs > 0.0 {
            self.total_requests as f64 / secs
        } else {
            0.0
        }
    }
}
