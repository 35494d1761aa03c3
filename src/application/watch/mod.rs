//! Watch Use Case
//!
//! Re-runs the registered actions whenever a matching source file changes.
//! It orchestrates:
//! - File system monitoring (via `notify`)
//! - Glob filtering of change events (via `globset`)
//! - A worker thread that runs the toolchain off the event loop
//! - The `Idle`/`Running` scheduler that serializes overlapping runs
//! - Optional interactive commands read from stdin
//!
//! ## Architecture
//!
//! Everything the loop reacts to arrives as a `LoopMessage` on one channel:
//! raw paths from the watcher, lines from stdin, and results from the worker.
//! The loop turns those into `WatchEvent`s for the caller to render.
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(options, runner, session);
//! use_case.start(running, |event| { ... })?;
//! ```

mod commands;
mod event;
mod scheduler;
mod use_case;
mod worker;


pub use commands::InteractiveCommand;
pub use event::{LoopMessage, WatchEvent, WatchOptions};
pub use scheduler::{Dispatch, LoopState, RunScheduler};
pub use use_case::WatchUseCase;
pub use worker::ActionWorker;
