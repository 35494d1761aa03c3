//! RunResult entity

use serde::Serialize;

use crate::domain::value_objects::{Action, Stream};

/// Exit status recorded when the process could not start or was killed by a
/// signal.
pub const ABNORMAL_EXIT: i32 = -1;

/// Outcome of one toolchain invocation.
///
/// Created fresh for every run and discarded after it has been reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub exit_status: i32,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl RunResult {
    pub fn new(exit_status: i32, stdout: Vec<String>, stderr: Vec<String>) -> Self {
        Self {
            exit_status,
            stdout,
            stderr,
        }
    }

    /// Build a result from raw captured bytes, split into lines.
    pub fn from_output(exit_status: i32, stdout: &[u8], stderr: &[u8]) -> Self {
        Self::new(exit_status, split_lines(stdout), split_lines(stderr))
    }

    /// Result for a process that never ran (not found, permission denied).
    pub fn abnormal(message: impl Into<String>) -> Self {
        Self::new(ABNORMAL_EXIT, Vec::new(), vec![message.into()])
    }

    pub fn is_success(&self) -> bool {
        self.exit_status == 0
    }

    /// Success check that also fails on any stderr output when
    /// `stderr_is_failure` is set.
    pub fn passed(&self, stderr_is_failure: bool) -> bool {
        self.is_success() && !(stderr_is_failure && !self.stderr.is_empty())
    }

    pub fn stream(&self, stream: Stream) -> &[String] {
        match stream {
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        }
    }

    /// The lines shown when `action` fails
    pub fn failure_lines(&self, action: Action) -> &[String] {
        self.stream(action.failure_stream())
    }
}

fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(|line| line.to_string())
        .collect()
}
