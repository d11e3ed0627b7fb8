//! In-memory page for embedders and tests.

use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::page::handles::{LoadingIndicator, OutputRegion, Page};

#[derive(Debug, Default)]
pub struct MemoryIndicator {
    visible: AtomicBool,
}

impl LoadingIndicator for MemoryIndicator {
    fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
    }

    fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
pub struct MemoryOutput {
    markup: ArcSwap<String>,
}

impl OutputRegion for MemoryOutput {
    fn set_markup(&self, markup: &str) {
        self.markup.store(Arc::new(markup.to_string()));
    }

    fn clear(&self) {
        self.markup.store(Arc::new(String::new()));
    }

    fn markup(&self) -> String {
        self.markup.load().as_ref().clone()
    }
}

/// A page whose state can be inspected after rendering.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    indicator: Arc<MemoryIndicator>,
    output: Arc<MemoryOutput>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles to give to a runner; they share state with `self`.
    pub fn page(&self) -> Page {
        Page::new(self.indicator.clone(), self.output.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.indicator.is_visible()
    }

    pub fn output(&self) -> String {
        self.output.markup()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_then_settle() {
        let memory = MemoryPage::new();
        let page = memory.page();
        page.output.set_markup("stale");

        page.begin_loading();
        assert!(memory.is_loading());
        assert_eq!(memory.output(), "");

        page.settle("<b>ok</b>");
        assert!(!memory.is_loading());
        assert_eq!(memory.output(), "<b>ok</b>");
    }
}
