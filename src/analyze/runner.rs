//! One request/response cycle per user action.
//!
//! # Responsibilities
//! - Snapshot the form and enter the loading state synchronously
//! - Race the exchange against the invocation deadline and external cancels
//! - Render the result or the failure message
//! - Keep an older invocation from overwriting a newer one
//!
//! # Design Decisions
//! - The deadline runs from invocation, not from when the task is polled
//! - Dropping the exchange future on timeout aborts the request
//! - Latest invocation wins: each one takes a generation number, and only the
//!   current generation may touch the page when it settles
//! - The client sits behind arc-swap so a config reload never blocks a request

use arc_swap::ArcSwap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use uuid::Uuid;

use crate::analyze::client::AnalyzeClient;
use crate::analyze::error::{RequestError, RequestResult};
use crate::analyze::types::AnalyzeRequest;
use crate::config::ClientConfig;
use crate::lifecycle::CancelSignal;
use crate::observability::metrics;
use crate::page::{FormInputs, Page};

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The result markup was rendered.
    Success,
    /// The contained error markup was rendered.
    Failed(String),
    /// A newer invocation owns the page; nothing was rendered.
    Superseded,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Everything an invocation captured when it started.
struct Invocation {
    generation: u64,
    request_id: Uuid,
    payload: AnalyzeRequest,
    client: Arc<AnalyzeClient>,
    started: Instant,
    cancel_rx: broadcast::Receiver<()>,
}

pub struct RequestRunner {
    client: ArcSwap<AnalyzeClient>,
    page: Page,
    /// Generation of the newest invocation. Held while touching the page.
    current: Mutex<u64>,
    cancel: CancelSignal,
}

impl RequestRunner {
    pub fn new(client: AnalyzeClient, page: Page) -> Self {
        Self {
            client: ArcSwap::from_pointee(client),
            page,
            current: Mutex::new(0),
            cancel: CancelSignal::new(),
        }
    }

    pub fn from_config(config: &ClientConfig, page: Page) -> RequestResult<Self> {
        Ok(Self::new(AnalyzeClient::from_config(config)?, page))
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Swap in a client built from `config`. In-flight invocations keep theirs.
    pub fn reload(&self, config: &ClientConfig) -> RequestResult<()> {
        let client = AnalyzeClient::from_config(config)?;
        tracing::info!(
            url = %client.url(),
            deadline_ms = client.deadline().as_millis() as u64,
            "Analyze client reloaded"
        );
        self.client.store(Arc::new(client));
        Ok(())
    }

    /// Abort every in-flight invocation. Returns how many were aborted.
    pub fn cancel_all(&self) -> usize {
        self.cancel.trigger()
    }

    /// Fire-and-forget: the page enters the loading state before this
    /// returns, the exchange runs on a spawned task.
    pub fn invoke(self: &Arc<Self>, form: &dyn FormInputs) -> JoinHandle<Outcome> {
        let invocation = self.begin(form);
        let runner = Arc::clone(self);
        tokio::spawn(async move { runner.complete(invocation).await })
    }

    /// Run one full cycle on the current task.
    pub async fn run(&self, form: &dyn FormInputs) -> Outcome {
        let invocation = self.begin(form);
        self.complete(invocation).await
    }

    fn lock_current(&self) -> MutexGuard<'_, u64> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, form: &dyn FormInputs) -> Invocation {
        let payload = AnalyzeRequest::new(form.keyword(), form.period());
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        let cancel_rx = self.cancel.subscribe();
        let client = self.client.load_full();

        let generation = {
            let mut current = self.lock_current();
            *current += 1;
            self.page.begin_loading();
            *current
        };

        tracing::info!(
            request_id = %request_id,
            generation,
            keyword = %payload.keyword,
            period = %payload.period,
            url = %client.url(),
            "Analyze request started"
        );

        Invocation {
            generation,
            request_id,
            payload,
            client,
            started,
            cancel_rx,
        }
    }

    async fn complete(&self, invocation: Invocation) -> Outcome {
        let Invocation {
            generation,
            request_id,
            payload,
            client,
            started,
            mut cancel_rx,
        } = invocation;

        let deadline = started + client.deadline();
        let result = tokio::select! {
            res = time::timeout_at(deadline, client.analyze(&payload, request_id)) => {
                res.unwrap_or_else(|_| Err(RequestError::Timeout(client.deadline())))
            }
            _ = cancel_rx.recv() => Err(RequestError::Cancelled),
        };
        let elapsed = started.elapsed();
        let elapsed_ms = elapsed.as_millis() as u64;

        // Rendering happens under the lock so a newer `begin` cannot slip in
        // between the generation check and the page update. Handles must
        // return promptly; see `page::handles`.
        let current = self.lock_current();
        if *current != generation {
            let latest = *current;
            drop(current);
            tracing::info!(
                request_id = %request_id,
                generation,
                latest,
                elapsed_ms,
                "Analyze request superseded, leaving page untouched"
            );
            metrics::record_superseded();
            return Outcome::Superseded;
        }

        let markup = match &result {
            Ok(response) => response.result.clone(),
            Err(e) => e.to_markup(),
        };
        self.page.settle(&markup);
        drop(current);

        match result {
            Ok(_) => {
                tracing::info!(request_id = %request_id, elapsed_ms, "Analyze request succeeded");
                metrics::record_request("success", elapsed);
                Outcome::Success
            }
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    elapsed_ms,
                    kind = e.kind(),
                    error = %e,
                    "Analyze request failed"
                );
                metrics::record_request(e.kind(), elapsed);
                Outcome::Failed(markup)
            }
        }
    }
}
