//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and the other OS-facing pieces.
//!
//! ## Structure
//!
//! - `process` - `ProcessRunner`, the `CommandRunner` backed by `std::process`
//! - `input` - line reader feeding interactive commands into the watch loop

pub mod input;
pub mod process;

pub use input::spawn_line_reader;
pub use process::ProcessRunner;
