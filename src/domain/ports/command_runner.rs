//! CommandRunner port - abstraction over running the toolchain
//!
//! Lets the watch loop and the one-shot commands run actions without
//! depending on `std::process` directly.

use crate::domain::entities::RunResult;

/// Runs an external command to completion.
///
/// Implementations:
/// - `ProcessRunner` - spawns an OS process resolved via `PATH`
/// - scripted fakes in tests
///
/// `run` never fails: a command that cannot be started is reported as an
/// abnormal `RunResult`, indistinguishable at this layer from a command
/// that ran and failed.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    fn run(&self, program: &str, args: &[String]) -> RunResult;
}

impl<R: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<R> {
    fn run(&self, program: &str, args: &[String]) -> RunResult {
        (**self).run(program, args)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&self, program: &str, args: &[String]) -> RunResult {
        (**self).run(program, args)
    }
}
