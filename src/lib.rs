//! Client for the trending-topic analysis endpoint.

pub mod analyze;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod page;

pub use analyze::{Outcome, RequestRunner};
pub use config::ClientConfig;
pub use page::{MemoryPage, Page, StaticForm, TerminalPage};
