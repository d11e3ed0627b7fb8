//! Cancellation fan-out for in-flight invocations.

use tokio::sync::broadcast;

/// Broadcasts a cancel to every invocation subscribed at the time it fires.
///
/// Invocations subscribe when they start, so a cancel never reaches an
/// invocation started after it.
pub struct CancelSignal {
    tx: broadcast::Sender<()>,
}

impl CancelSignal {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the signal. Returns how many invocations were listening.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }

    /// Number of invocations currently listening.
    pub fn in_flight(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}
