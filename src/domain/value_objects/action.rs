//! Action value object - a named step of the toolchain
//!
//! - `Build`: the install/compile step, failures read from stderr
//! - `Test`: the test step, failures read from stdout

use serde::{Deserialize, Serialize};

/// A toolchain step the watch loop can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Build,
    Test,
}

/// Which captured stream carries the interesting output of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Action {
    /// Label used in banners ("Build", "Test")
    pub fn label(&self) -> &'static str {
        match self {
            Action::Build => "Build",
            Action::Test => "Test",
        }
    }

    /// Stream shown when the action fails.
    ///
    /// Compilers report diagnostics on stderr, test runners report failing
    /// cases on stdout.
    pub fn failure_stream(&self) -> Stream {
        match self {
            Action::Build => Stream::Stderr,
            Action::Test => Stream::Stdout,
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Action::Test)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Build => write!(f, "build"),
            Action::Test => write!(f, "test"),
        }
    }
}
