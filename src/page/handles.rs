//! Handle traits for the two page regions the runner updates.
//!
//! The runner calls these while holding its render lock, from Tokio worker
//! threads. Implementations must not await or wait on other invocations;
//! a short synchronous write (memory, a terminal line) is the expected cost.

use std::sync::Arc;

/// Visibility-toggled progress indicator.
pub trait LoadingIndicator: Send + Sync {
    fn show(&self);
    fn hide(&self);
    fn is_visible(&self) -> bool;
}

/// Container the result or error markup is rendered into.
///
/// Markup is trusted and rendered as-is, never escaped.
pub trait OutputRegion: Send + Sync {
    fn set_markup(&self, markup: &str);
    fn clear(&self);
    fn markup(&self) -> String;
}

/// The pair of handles a runner owns.
#[derive(Clone)]
pub struct Page {
    pub loading: Arc<dyn LoadingIndicator>,
    pub output: Arc<dyn OutputRegion>,
}

impl Page {
    pub fn new(loading: Arc<dyn LoadingIndicator>, output: Arc<dyn OutputRegion>) -> Self {
        Self { loading, output }
    }

    /// Enter the loading state: indicator visible, output empty.
    pub fn begin_loading(&self) {
        self.loading.show();
        self.output.clear();
    }

    /// Enter the settled state with the given markup.
    pub fn settle(&self, markup: &str) {
        self.loading.hide();
        self.output.set_markup(markup);
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("loading", &self.loading.is_visible())
            .field("output", &self.output.markup())
            .finish()
    }
}
