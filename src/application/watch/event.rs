//! Watch event types and options

use std::path::PathBuf;

use crate::domain::entities::{RunResult, WatchRegistration};
use crate::domain::value_objects::{Action, ToolchainSpec};

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory watched recursively; also the toolchain's working directory
    pub root: PathBuf,
    /// Glob and the actions it triggers
    pub registration: WatchRegistration,
    /// How each action is invoked
    pub toolchain: ToolchainSpec,
    /// Read commands from stdin
    pub interactive: bool,
}

impl WatchOptions {
    /// Create new watch options with minimal required fields
    pub fn new(root: PathBuf, registration: WatchRegistration) -> Self {
        Self {
            root,
            registration,
            toolchain: ToolchainSpec::default(),
            interactive: false,
        }
    }

    /// Set the toolchain
    pub fn with_toolchain(mut self, toolchain: ToolchainSpec) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Enable the interactive command reader
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

/// Input to the watch loop
#[derive(Debug)]
pub enum LoopMessage {
    /// The watcher saw a create/modify/remove on this path
    PathChanged(PathBuf),
    /// The watcher reported an error
    WatchError(String),
    /// One line of interactive input
    Command(String),
    /// The worker finished one action of the current run
    ActionFinished { action: Action, result: RunResult },
    /// The worker finished every action of the current run
    RunFinished,
}

/// Watch event types for text and NDJSON output
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        root: String,
        pattern: String,
        actions: Vec<Action>,
        interactive: bool,
    },
    /// A file matching the pattern changed
    FileChanged { path: String },
    /// A run of the registered actions was dispatched
    RunStarted { actions: Vec<Action> },
    /// A change arrived mid-run; one more run will follow
    RunQueued,
    /// One action finished
    ActionComplete {
        action: Action,
        result: RunResult,
        verbose: bool,
    },
    /// The `verbose` command flipped the session flag
    VerboseChanged { verbose: bool },
    /// An interactive command was not recognized
    UnknownCommand { input: String },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included.
    ///
    /// A field the event already carries is never overwritten.
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.entry("command")
                .or_insert_with(|| serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
