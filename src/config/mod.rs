//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) + CLI overrides
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → AnalyzeClient built from it
//!
//! On file change (interactive mode):
//!     watcher.rs detects change, waits for the save to settle
//!     → loader.rs loads new config, CLI overrides re-applied
//!     → validation.rs validates
//!     → watcher::apply_reloads → RequestRunner::reload swaps the client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ClientConfig, EndpointConfig, ObservabilityConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
