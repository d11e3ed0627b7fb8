//! Terminal rendering: status line on stderr, markup on stdout.

use arc_swap::ArcSwap;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::page::handles::{LoadingIndicator, OutputRegion, Page};

#[derive(Debug, Default)]
pub struct TerminalIndicator {
    visible: AtomicBool,
}

impl LoadingIndicator for TerminalIndicator {
    fn show(&self) {
        if !self.visible.swap(true, Ordering::SeqCst) {
            let mut err = std::io::stderr().lock();
            let _ = write!(err, "Analyzing... ");
            let _ = err.flush();
        }
    }

    fn hide(&self) {
        if self.visible.swap(false, Ordering::SeqCst) {
            let _ = writeln!(std::io::stderr().lock(), "done");
        }
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

/// Prints each rendered fragment to stdout and remembers the last one.
#[derive(Debug, Default)]
pub struct TerminalOutput {
    last: ArcSwap<String>,
}

impl OutputRegion for TerminalOutput {
    fn set_markup(&self, markup: &str) {
        self.last.store(Arc::new(markup.to_string()));
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{}", markup);
        let _ = out.flush();
    }

    fn clear(&self) {
        self.last.store(Arc::new(String::new()));
    }

    fn markup(&self) -> String {
        self.last.load().as_ref().clone()
    }
}

/// Page backed by the process's stdout and stderr.
#[derive(Debug, Clone, Default)]
pub struct TerminalPage {
    indicator: Arc<TerminalIndicator>,
    output: Arc<TerminalOutput>,
}

impl TerminalPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        Page::new(self.indicator.clone(), self.output.clone())
    }
}
