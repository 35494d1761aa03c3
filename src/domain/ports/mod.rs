//! Domain Ports (Interfaces)
//!
//! The infrastructure layer provides the concrete implementations.

pub mod command_runner;

pub use command_runner::CommandRunner;
