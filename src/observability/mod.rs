//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! RequestRunner produces:
//!     → logging.rs (structured log events, request_id on every line)
//!     → metrics.rs (outcome counters, duration histogram)
//!
//! Consumers:
//!     → stderr (human or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so stdout carries only rendered output
//! - Metrics are cheap (atomic increments) and no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
