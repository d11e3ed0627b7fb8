//! Interactive session: one invocation per input line.
//!
//! # Responsibilities
//! - Read keywords line by line and invoke without waiting
//! - Keep going past lines that are not valid UTF-8
//! - On stop or end of input, wait for every invocation to render

use std::future::Future;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;

use crate::analyze::{Outcome, RequestRunner};
use crate::page::StaticForm;

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub invoked: usize,
    pub stopped: bool,
}

/// Track `handle`, forgetting invocations that already settled.
fn track(pending: &mut Vec<JoinHandle<Outcome>>, handle: JoinHandle<Outcome>) {
    pending.retain(|h| !h.is_finished());
    pending.push(handle);
}

/// Invoke `runner` once per non-blank line of `input`, all with `period`.
///
/// When `stop` resolves, in-flight invocations are cancelled. Either way the
/// session returns only after every invocation has rendered.
pub async fn run_session<R, S>(
    runner: Arc<RequestRunner>,
    input: R,
    period: &str,
    stop: S,
) -> SessionSummary
where
    R: AsyncBufRead + Unpin,
    S: Future<Output = ()>,
{
    let mut lines = input.split(b'\n');
    let mut pending = Vec::new();
    let mut summary = SessionSummary::default();
    tokio::pin!(stop);

    loop {
        tokio::select! {
            line = lines.next_segment() => {
                let bytes = match line {
                    Ok(Some(bytes)) => bytes,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read input, ending session");
                        break;
                    }
                };
                let line = String::from_utf8_lossy(&bytes);
                let keyword = line.trim();
                if keyword.is_empty() {
                    continue;
                }
                track(&mut pending, runner.invoke(&StaticForm::new(keyword, period)));
                summary.invoked += 1;
            }
            _ = &mut stop => {
                let cancelled = runner.cancel_all();
                tracing::info!(cancelled, "Session stopped");
                summary.stopped = true;
                break;
            }
        }
    }

    for handle in pending {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Invocation task failed");
        }
    }
    summary
}
