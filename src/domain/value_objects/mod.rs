//! Value Objects
//!
//! Immutable types describing what gets run.

mod action;
mod toolchain;

pub use action::{Action, Stream};
pub use toolchain::ToolchainSpec;
