//! Toolchain value object - the executable and the arguments per action

use super::action::Action;

/// How to invoke the external toolchain for each action.
///
/// The default is the Go toolchain: `go install` and `go test [-v]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainSpec {
    pub program: String,
    pub build_args: Vec<String>,
    pub test_args: Vec<String>,
    /// Appended to `test_args` while the session is verbose
    pub verbose_test_args: Vec<String>,
}

impl Default for ToolchainSpec {
    fn default() -> Self {
        Self {
            program: "go".to_string(),
            build_args: vec!["install".to_string()],
            test_args: vec!["test".to_string()],
            verbose_test_args: vec!["-v".to_string()],
        }
    }
}

impl ToolchainSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn with_build_args(mut self, args: Vec<String>) -> Self {
        self.build_args = args;
        self
    }

    pub fn with_test_args(mut self, args: Vec<String>) -> Self {
        self.test_args = args;
        self
    }

    pub fn with_verbose_test_args(mut self, args: Vec<String>) -> Self {
        self.verbose_test_args = args;
        self
    }

    /// Arguments for one invocation of `action`
    pub fn args_for(&self, action: Action, verbose: bool) -> Vec<String> {
        match action {
            Action::Build => self.build_args.clone(),
            Action::Test => {
                let mut args = self.test_args.clone();
                if verbose {
                    args.extend(self.verbose_test_args.iter().cloned());
                }
                args
            }
        }
    }
}
