//! Error types for loadtest-core

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A builder was finalized without a required field
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Dispatch failed before or after the workers ran
    #[error("dispatch error: {0}")]
    Dispatch(String),
}

impl Error {
    /// Create a missing config error for the named builder field
    pub fn missing_config(field: &'static str) -> Self {
        Self::MissingConfig(field)
    }

    /// Create a dispatch error
    pub fn dispatch(message: impl Into<String>) -> Self {
        Self::Dispatch(message.into())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of a request that never produced an HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Connection refused, DNS failure, TLS handshake failure
    Connect,
    /// Timed out (only when a timeout is configured on the client)
    Timeout,
    /// Response body could not be read
    Body,
    /// Redirect policy violated
    Redirect,
    /// Request could not be built, e.g. an unusable URL
    InvalidRequest,
    /// Any other transport failure
    Request,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Connect => "connect",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Body => "body",
            ErrorKind::Redirect => "redirect",
            ErrorKind::InvalidRequest => "invalid request",
            ErrorKind::Request => "request",
        };
        f.write_str(name)
    }
}

/// A request that failed before a status code was received
///
/// Carries the rendered message rather than the source error so outcomes
/// stay `Clone` and can be moved freely through the results channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} error: {message}")]
pub struct TransportError {
    /// Failure classification
    pub kind: ErrorKind,
    /// Human-readable description
    pub message: String,
}

impl TransportError {
    /// Create a new transport error
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Connection-level failure
    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Connect, message)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connect
        } else if err.is_body() || err.is_decode() {
            ErrorKind::Body
        } else if err.is_redirect() {
            ErrorKind::Redirect
        } else if err.is_builder() {
            ErrorKind::InvalidRequest
        } else {
            ErrorKind::Request
        };

        Self::new(kind, err.to_string())
    }
}
