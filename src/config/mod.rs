//! Configuration module for Rewatch
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. The file passed with `--config`
//! 3. Built-in defaults (lowest priority)
//!
//! No config file is picked up implicitly.

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, ToolchainConfig, WatchConfig};
