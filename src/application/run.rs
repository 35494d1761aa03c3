//! Action runner - turns an `Action` into a toolchain invocation

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{RunResult, SessionState};
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::{Action, ToolchainSpec};

/// Runs actions with the configured toolchain.
///
/// The session's verbose flag is read at the start of every test run, so a
/// toggle made mid-session applies to the next invocation.
#[derive(Clone)]
pub struct ActionRunner {
    runner: Arc<dyn CommandRunner>,
    toolchain: ToolchainSpec,
    session: SessionState,
}

impl ActionRunner {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        toolchain: ToolchainSpec,
        session: SessionState,
    ) -> Self {
        Self {
            runner,
            toolchain,
            session,
        }
    }

    /// Run `action` to completion
    pub fn run(&self, action: Action) -> RunResult {
        let args = self.toolchain.args_for(action, self.session.verbose());
        info!(%action, program = %self.toolchain.program, ?args, "running action");
        let result = self.runner.run(&self.toolchain.program, &args);
        info!(%action, exit_status = result.exit_status, "action finished");
        result
    }
}

impl std::fmt::Debug for ActionRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRunner")
            .field("toolchain", &self.toolchain)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
