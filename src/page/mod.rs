//! Page handles the runner reads from and renders into.
//!
//! # Data Flow
//! ```text
//! FormInputs (keyword, period)
//!     → RequestRunner snapshots values at invocation
//!     → LoadingIndicator shown, OutputRegion cleared
//!     → ... exchange ...
//!     → LoadingIndicator hidden, OutputRegion set to result or error markup
//! ```
//!
//! # Design Decisions
//! - Handles are passed in explicitly; nothing is looked up by element ID
//! - Handles take `&self` and use atomics or arc-swap, so they can be shared
//!   across spawned invocations without locks held over awaits

pub mod form;
pub mod handles;
pub mod memory;
pub mod terminal;

pub use form::{FormInputs, StaticForm};
pub use handles::{LoadingIndicator, OutputRegion, Page};
pub use memory::MemoryPage;
pub use terminal::TerminalPage;
