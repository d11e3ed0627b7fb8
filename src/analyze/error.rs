//! Failure taxonomy for one analyze invocation.

use std::time::Duration;
use thiserror::Error;

/// Label shown in bold ahead of every failure description.
pub const FAILURE_LABEL: &str = "Request timed out or failed:";

/// Errors that can occur while running an analyze request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The deadline fired before the exchange finished; the request was dropped.
    #[error("request aborted after {}ms without a complete response", .0.as_millis())]
    Timeout(Duration),

    /// An external cancel (e.g. Ctrl-C) aborted the request.
    #[error("request aborted by user")]
    Cancelled,

    /// Connection, transport or body read failure.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The body was not JSON or lacked a string `result` field.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The HTTP client could not be constructed from configuration.
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),
}

impl RequestError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::Timeout(_) => "timeout",
            RequestError::Cancelled => "cancelled",
            RequestError::Network(_) => "network",
            RequestError::Parse(_) => "parse",
            RequestError::Client(_) => "client",
        }
    }

    /// Markup rendered into the output region for this failure.
    pub fn to_markup(&self) -> String {
        format!("<b>{}</b> {}", FAILURE_LABEL, self)
    }
}

/// Result type for analyze operations.
pub type RequestResult<T> = Result<T, RequestError>;
