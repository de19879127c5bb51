//! Worker statistics tracking

use crate::outcome::RequestOutcome;
use std::time::{Duration, Instant};

/// Statistics tracked by each worker
#[derive(Debug, Default, Clone)]
pub struct WorkerStats {
    /// Requests this worker was assigned
    pub quota: usize,

    /// Requests that received an HTTP response (any status)
    pub responses: usize,

    /// Requests that failed at the transport level
    pub errors: usize,

    /// Worker start time
    pub started_at: Option<Instant>,

    /// Worker end time
    pub ended_at: Option<Instant>,
}

impl WorkerStats {
    /// Create new empty stats for a worker with the given quota
    pub fn new(quota: usize) -> Self {
        Self {
            quota,
            ..Default::default()
        }
    }

    /// Start tracking (records start time)
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Stop tracking (records end time)
    pub fn stop(&mut self) {
        self.ended_at = Some(Instant::now());
    }

    /// Get total number of requests issued (responses + errors)
    pub fn total_requests(&self) -> usize {
        self.responses + self.errors
    }

    /// Whether every assigned request was issued
    pub fn quota_met(&self) -> bool {
        self.total_requests() == self.quota
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> Option<Duration> {
        self.started_at.map(|start| {
            self.ended_at
                .map(|end| end.duration_since(start))
                .unwrap_or_else(|| start.elapsed())
        })
    }

    /// Count an outcome this worker produced
    pub fn record(&mut self, outcome: &RequestOutcome) {
        if outcome.is_error() {
            self.errors += 1;
        } else {
            self.responses += 1;
        }
    }

    /// Merge stats from another worker
    pub fn merge(&mut self, other: &WorkerStats) {
        self.quota += other.quota;
        self.responses += other.responses;
        self.errors += other.errors;
    }
}
