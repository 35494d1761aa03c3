//! Process runner - spawns the toolchain and captures its output

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, error, instrument};

use crate::domain::entities::{RunResult, ABNORMAL_EXIT};
use crate::domain::ports::CommandRunner;

/// Runs commands as child processes of this one.
///
/// stdin is closed for the child so a toolchain that prompts cannot steal
/// interactive commands meant for the watch loop.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run children in `dir` instead of the current directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: Some(dir.as_ref().to_path_buf()),
        }
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip(self, args), fields(args = ?args))]
    fn run(&self, program: &str, args: &[String]) -> RunResult {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        debug!("spawning toolchain");
        // `output` drains both pipes concurrently, so a chatty child cannot
        // deadlock on a full stderr buffer.
        match cmd.output() {
            Ok(output) => {
                let status = output.status.code().unwrap_or(ABNORMAL_EXIT);
                debug!(exit_code = status, "toolchain finished");
                RunResult::from_output(status, &output.stdout, &output.stderr)
            }
            Err(e) => {
                error!(err = %e, "failed to start toolchain");
                RunResult::abnormal(format!("failed to run '{program}': {e}"))
            }
        }
    }
}
