//! Scripted [`HttpClient`] used by unit tests

use crate::client::HttpClient;
use crate::error::TransportError;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// One scripted reply
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    Status(u16),
    Refused,
}

/// Replays a script of replies in order, wrapping around at the end
pub(crate) struct MockClient {
    script: Vec<Reply>,
    delay: Option<Duration>,
    panic_on_call: Option<usize>,
    calls: AtomicUsize,
}

impl MockClient {
    pub(crate) fn always(status: u16) -> Self {
        Self::script(vec![Reply::Status(status)])
    }

    pub(crate) fn script(script: Vec<Reply>) -> Self {
        assert!(!script.is_empty(), "mock script must not be empty");
        Self {
            script,
            delay: None,
            panic_on_call: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Panic on the n-th call (0-based), simulating a crashing worker
    pub(crate) fn with_panic_on_call(mut self, n: usize) -> Self {
        self.panic_on_call = Some(n);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClient for MockClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn get(&self, _url: &str) -> Result<u16, TransportError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.panic_on_call == Some(call) {
            panic!("simulated worker crash on call {call}");
        }

        match self.script[call % self.script.len()] {
            Reply::Status(code) => Ok(code),
            Reply::Refused => Err(TransportError::connect("connection refused")),
        }
    }
}
