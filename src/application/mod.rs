//! Application Layer
//!
//! Use cases that orchestrate the flow between domain and infrastructure.
//!
//! ## Use Cases
//!
//! - `ActionRunner` - Runs one action through the toolchain (used by `build` and `test`)
//! - `WatchUseCase` - Watches the project and re-runs actions on change

pub mod run;
pub mod watch;

pub use run::ActionRunner;
pub use watch::{
    InteractiveCommand, LoopState, RunScheduler, WatchEvent, WatchOptions, WatchUseCase,
};
