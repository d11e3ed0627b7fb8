//! Hot reload of the client configuration file.
//!
//! # Responsibilities
//! - Turn file change events into validated, override-applied configs
//! - Collapse the burst of events a single save produces into one reload
//! - Feed each new config into a running `RequestRunner`
//!
//! # Design Decisions
//! - notify runs its callback on its own thread; the callback only pings a
//!   channel, all loading happens on a Tokio task
//! - A config identical to the last one delivered is not sent again
//! - Invalid files are logged and skipped; the runner keeps its current client

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::analyze::RequestRunner;
use crate::config::schema::ClientConfig;
use crate::lifecycle::startup::{resolve_config, Overrides};

/// Watches one config file and delivers ready-to-use configs.
pub struct ConfigWatcher {
    path: PathBuf,
    overrides: Overrides,
    settle: Duration,
}

impl ConfigWatcher {
    /// Watch `path`, re-applying `overrides` to every reloaded file.
    pub fn new(path: &Path, overrides: Overrides) -> Self {
        Self {
            path: path.to_path_buf(),
            overrides,
            settle: Duration::from_millis(250),
        }
    }

    /// How long to wait after the first event before reading the file.
    pub fn settle_for(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Start watching. Requires a Tokio runtime.
    ///
    /// The returned watcher must be kept alive; dropping it stops delivery.
    pub fn spawn(
        self,
    ) -> Result<(RecommendedWatcher, mpsc::UnboundedReceiver<ClientConfig>), notify::Error> {
        let (changed_tx, mut changed_rx) = mpsc::unbounded_channel::<()>();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    let _ = changed_tx.send(());
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;
        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;
        tracing::info!(path = ?self.path, "Config watcher started");

        let Self {
            path,
            overrides,
            settle,
        } = self;
        tokio::spawn(async move {
            let mut last: Option<ClientConfig> = None;
            while changed_rx.recv().await.is_some() {
                tokio::time::sleep(settle).await;
                while changed_rx.try_recv().is_ok() {}

                let config = match resolve_config(Some(&path), &overrides) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::error!(path = ?path, error = %e, "Config reload rejected, keeping current configuration");
                        continue;
                    }
                };
                if last.as_ref() == Some(&config) {
                    tracing::debug!(path = ?path, "Config file touched without changes");
                    continue;
                }
                last = Some(config.clone());
                if update_tx.send(config).is_err() {
                    break;
                }
            }
        });

        Ok((watcher, update_rx))
    }
}

/// Apply every delivered config to `runner` until the channel closes.
pub fn apply_reloads(
    runner: Arc<RequestRunner>,
    mut updates: mpsc::UnboundedReceiver<ClientConfig>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(config) = updates.recv().await {
            if let Err(e) = runner.reload(&config) {
                tracing::error!(error = %e, "Failed to apply reloaded config");
            }
        }
    })
}
