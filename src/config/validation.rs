//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the endpoint URL and path shape
//! - Validate value ranges (timeouts > 0, connect within request deadline)
//! - Reject log filters tracing-subscriber cannot parse, or that misspell a level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoint.base_url {0:?} is not a valid http(s) URL")]
    InvalidBaseUrl(String),

    #[error("endpoint.path {0:?} must start with '/'")]
    InvalidPath(String),

    #[error("timeouts.request_ms must be greater than 0")]
    ZeroRequestTimeout,

    #[error("timeouts.connect_ms must be greater than 0")]
    ZeroConnectTimeout,

    #[error("timeouts.connect_ms ({connect_ms}) exceeds timeouts.request_ms ({request_ms})")]
    ConnectExceedsRequest { connect_ms: u64, request_ms: u64 },

    #[error("observability.log_level {0:?} is not a valid filter")]
    InvalidLogLevel(String),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

const LEVEL_NAMES: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// A bare directive must be a level name. tracing would read anything else as
/// a target, so a typo like "debgu" would silence every event.
fn is_valid_log_filter(filter: &str) -> bool {
    if EnvFilter::try_new(filter).is_err() {
        return false;
    }
    filter
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .all(|directive| {
            directive.contains('=')
                || directive.contains('[')
                || LEVEL_NAMES.iter().any(|level| level.eq_ignore_ascii_case(directive))
        })
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.endpoint.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(
            config.endpoint.base_url.clone(),
        )),
    }

    if !config.endpoint.path.starts_with('/') {
        errors.push(ValidationError::InvalidPath(config.endpoint.path.clone()));
    }

    let timeouts = &config.timeouts;
    if timeouts.request_ms == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if timeouts.connect_ms == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    } else if timeouts.request_ms > 0 && timeouts.connect_ms > timeouts.request_ms {
        errors.push(ValidationError::ConnectExceedsRequest {
            connect_ms: timeouts.connect_ms,
            request_ms: timeouts.request_ms,
        });
    }

    let observability = &config.observability;
    if !is_valid_log_filter(&observability.log_level) {
        errors.push(ValidationError::InvalidLogLevel(
            observability.log_level.clone(),
        ));
    }
    if observability.metrics_enabled
        && observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
