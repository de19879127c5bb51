//! Per-request outcome records

use crate::error::TransportError;
use std::time::Duration;

/// Status distribution key reserved for requests that never got a status
///
/// Real HTTP status codes start at 100, so 0 can never collide with one.
pub const ERROR_STATUS_KEY: u16 = 0;

/// The status code counted as a success
pub const SUCCESS_STATUS: u16 = 200;

/// What a single request produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// The server answered with this status code (any code, not only 200)
    Response(u16),
    /// The request never produced a status code
    Failed(TransportError),
}

/// Result of one completed request attempt
///
/// Created by a worker and moved through the results channel to the
/// aggregator; never shared or mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    /// Worker that issued the request
    pub worker_id: usize,

    /// Status code or transport failure
    pub status: OutcomeStatus,

    /// Wall-clock time of the round-trip, when measured
    pub duration: Option<Duration>,
}

impl RequestOutcome {
    /// Outcome for a request that received a response
    pub fn response(worker_id: usize, status_code: u16) -> Self {
        Self {
            worker_id,
            status: OutcomeStatus::Response(status_code),
            duration: None,
        }
    }

    /// Outcome for a request that failed before a status was received
    pub fn failed(worker_id: usize, error: TransportError) -> Self {
        Self {
            worker_id,
            status: OutcomeStatus::Failed(error),
            duration: None,
        }
    }

    /// Attach the measured round-trip time
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// The HTTP status code, if the request got one
    pub fn status_code(&self) -> Option<u16> {
        match self.status {
            OutcomeStatus::Response(code) => Some(code),
            OutcomeStatus::Failed(_) => None,
        }
    }

    /// The transport error, if the request failed
    pub fn error(&self) -> Option<&TransportError> {
        match &self.status {
            OutcomeStatus::Failed(err) => Some(err),
            OutcomeStatus::Response(_) => None,
        }
    }

    /// Check if the request failed at the transport level
    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }

    /// Check if the server answered 200
    pub fn is_success(&self) -> bool {
        self.status_code() == Some(SUCCESS_STATUS)
    }

    /// Key this outcome is counted under in a status distribution
    pub fn distribution_key(&self) -> u16 {
        self.status_code().unwrap_or(ERROR_STATUS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_outcome() {
        let outcome = RequestOutcome::response(3, 200);
        assert_eq!(outcome.worker_id, 3);
        assert_eq!(outcome.status_code(), Some(200));
        assert!(outcome.error().is_none());
        assert!(outcome.is_success());
        assert!(!outcome.is_error());
        assert_eq!(outcome.distribution_key(), 200);
    }

    #[test]
    fn test_non_200_is_not_error() {
        let outcome = RequestOutcome::response(0, 500);
        assert!(!outcome.is_success());
        assert!(!outcome.is_error());
        assert_eq!(outcome.distribution_key(), 500);
    }

    #[test]
    fn test_failed_outcome_has_no_status() {
        let outcome = RequestOutcome::failed(1, TransportError::connect("refused"));
        assert_eq!(outcome.status_code(), None);
        assert!(outcome.is_error());
        assert!(!outcome.is_success());
        assert_eq!(outcome.distribution_key(), ERROR_STATUS_KEY);
    }

    #[test]
    fn test_with_duration() {
        let outcome = RequestOutcome::response(0, 204);
        assert!(outcome.duration.is_none());

        let outcome = outcome.with_duration(Duration::from_millis(12));
        assert_eq!(outcome.duration, Some(Duration::from_millis(12)));
    }
}
