//! Interactive commands accepted on stdin while watching

use tracing::debug;

use crate::domain::entities::SessionState;

use super::event::WatchEvent;

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveCommand {
    /// Toggle verbose output
    Verbose,
    /// Anything else, trimmed
    Unknown(String),
}

impl InteractiveCommand {
    /// Parse a line of input. Blank lines are not commands.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "" => None,
            "verbose" => Some(Self::Verbose),
            other => Some(Self::Unknown(other.to_string())),
        }
    }

    /// Apply the command to the session and describe the outcome
    pub fn apply(&self, session: &SessionState) -> WatchEvent {
        match self {
            Self::Verbose => WatchEvent::VerboseChanged {
                verbose: session.toggle_verbose(),
            },
            Self::Unknown(input) => {
                debug!(%input, "unknown command");
                WatchEvent::UnknownCommand {
                    input: input.clone(),
                }
            }
        }
    }
}
