//! Rewatch - re-run your toolchain when sources change
//!
//! Rewatch watches a project for changes to source files and re-runs the
//! toolchain's build (and optionally test) step, reporting each outcome as a
//! colorized banner followed by the relevant captured output.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{ActionRunner, WatchEvent, WatchOptions, WatchUseCase};
pub use config::Config;
pub use domain::entities::{RunResult, SessionState, WatchRegistration};
pub use domain::ports::CommandRunner;
pub use domain::value_objects::{Action, ToolchainSpec};
pub use error::{RewatchError, RewatchResult};
pub use infrastructure::ProcessRunner;
