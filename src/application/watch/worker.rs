//! Action worker - runs the toolchain off the watch loop's thread

use std::sync::mpsc::{channel, Sender};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::application::run::ActionRunner;
use crate::domain::value_objects::Action;
use crate::error::{RewatchError, RewatchResult};

use super::event::LoopMessage;

/// A background thread that executes one run at a time.
///
/// Each submitted run executes its actions in order. Every result goes back
/// as `LoopMessage::ActionFinished`, followed by one `LoopMessage::RunFinished`.
pub struct ActionWorker {
    requests: Sender<Vec<Action>>,
    handle: JoinHandle<()>,
}

impl ActionWorker {
    pub fn spawn(runner: ActionRunner, results: Sender<LoopMessage>) -> Self {
        let (requests, rx) = channel::<Vec<Action>>();
        let handle = thread::spawn(move || {
            for actions in rx {
                for action in actions {
                    let result = runner.run(action);
                    if results
                        .send(LoopMessage::ActionFinished { action, result })
                        .is_err()
                    {
                        return;
                    }
                }
                if results.send(LoopMessage::RunFinished).is_err() {
                    return;
                }
            }
            debug!("action worker stopped");
        });
        Self { requests, handle }
    }

    /// Queue a run of `actions`
    pub fn submit(&self, actions: Vec<Action>) -> RewatchResult<()> {
        self.requests
            .send(actions)
            .map_err(|_| RewatchError::WorkerUnavailable)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
