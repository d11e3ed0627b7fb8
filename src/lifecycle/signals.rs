//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT (Ctrl-C)
//! - Translate it into a cancel of every in-flight invocation
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)

use std::sync::Arc;

use crate::analyze::RequestRunner;

/// Resolve once Ctrl-C is received.
pub async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Interrupt received");
}

/// Cancel every in-flight invocation of `runner` on Ctrl-C.
pub fn cancel_on_interrupt(runner: Arc<RequestRunner>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        interrupted().await;
        let cancelled = runner.cancel_all();
        tracing::info!(cancelled, "Cancelled in-flight requests");
    })
}
