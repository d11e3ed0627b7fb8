//! Analyze request subsystem.
//!
//! # Data Flow
//! ```text
//! user action
//!     → runner.rs (snapshot form, show loading, clear output, start deadline)
//!     → client.rs (POST JSON {keyword, period} with x-request-id)
//!     → types.rs (decode {"result": <html>})
//!     → runner.rs (render result, or error.rs markup on failure)
//! ```

pub mod client;
pub mod error;
pub mod runner;
pub mod types;

pub use client::{AnalyzeClient, X_REQUEST_ID};
pub use error::{RequestError, RequestResult, FAILURE_LABEL};
pub use runner::{Outcome, RequestRunner};
pub use types::{AnalyzeRequest, AnalyzeResponse, KNOWN_PERIODS};
