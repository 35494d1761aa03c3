//! Shared helpers for rewatch CLI tests.
//!
//! `TestEnv` owns a temporary project root and runs the `rewatch` binary
//! against it with color and `RUST_LOG` pinned so output is stable.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a rewatch CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Isolated project directory plus an optional config file
pub struct TestEnv {
    pub project_root: TempDir,
    config: Option<PathBuf>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().unwrap(),
            config: None,
        }
    }

    /// Write `rewatch.toml` into the project and pass it with `--config`
    pub fn with_config(mut self, toml: &str) -> Self {
        let path = self.project_root.path().join("rewatch.toml");
        fs::write(&path, toml).unwrap();
        self.config = Some(path);
        self
    }

    pub fn root(&self) -> &Path {
        self.project_root.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// A `rewatch` command rooted at the project
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rewatch"));
        cmd.arg("--root").arg(self.root());
        if let Some(config) = &self.config {
            cmd.arg("--config").arg(config);
        }
        cmd.args(args)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .current_dir(self.root());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command(args).output().unwrap().into()
    }
}

/// Config whose build and test steps are shell snippets
pub fn shell_toolchain(build: &str, test: &str) -> String {
    format!(
        r#"[toolchain]
program = "sh"
build_args = ["-c", '{build}']
test_args = ["-c", '{test}']
verbose_test_args = ["verbose"]
"#
    )
}
