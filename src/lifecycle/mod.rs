//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config file → Apply CLI overrides → Validate → Build runner
//!
//! Cancellation (cancel.rs):
//!     cancel_all() → broadcast → every in-flight invocation settles as failed
//!
//! Session (session.rs):
//!     stdin line → invoke (no wait) → on EOF/Ctrl-C drain every invocation
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl-C) → cancel in-flight requests → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: an invalid config never reaches the runner
//! - Overrides are validated together with the file they override

pub mod cancel;
pub mod session;
pub mod signals;
pub mod startup;

pub use cancel::CancelSignal;
