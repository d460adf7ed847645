//! Configuration loading and types.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_PAGE_LIMIT};
pub use types::{ApiConfig, Config, ControllerConfig, SequencingPolicy};
