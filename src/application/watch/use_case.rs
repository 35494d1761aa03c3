//! Watch Use Case implementation

use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info};

use crate::application::run::ActionRunner;
use crate::domain::entities::SessionState;
use crate::domain::ports::CommandRunner;
use crate::error::{RewatchError, RewatchResult};
use crate::infrastructure::spawn_line_reader;

use super::commands::InteractiveCommand;
use super::event::{LoopMessage, WatchEvent, WatchOptions};
use super::scheduler::{Dispatch, RunScheduler};
use super::worker::ActionWorker;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch Use Case
///
/// Orchestrates continuous file watching with re-runs of the toolchain.
/// This is the main entry point for the `rewatch watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
    runner: Arc<dyn CommandRunner>,
    session: SessionState,
}

impl WatchUseCase {
    pub fn new(
        options: WatchOptions,
        runner: Arc<dyn CommandRunner>,
        session: SessionState,
    ) -> Self {
        Self {
            options,
            runner,
            session,
        }
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false.
    /// Use the callback to receive events; it is always called on the
    /// calling thread.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> RewatchResult<()>
    where
        F: FnMut(WatchEvent),
    {
        let root = self
            .options
            .root
            .canonicalize()
            .map_err(|_| RewatchError::DirectoryNotFound {
                path: self.options.root.clone(),
            })?;

        let (tx, rx) = channel();

        let watcher_tx = tx.clone();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    if is_content_change(&event.kind) {
                        for path in event.paths {
                            let _ = watcher_tx.send(LoopMessage::PathChanged(path));
                        }
                    }
                }
                Err(e) => {
                    let _ = watcher_tx.send(LoopMessage::WatchError(e.to_string()));
                }
            },
            Config::default(),
        )?;
        watcher.watch(&root, RecursiveMode::Recursive)?;

        if self.options.interactive {
            let command_tx = tx.clone();
            spawn_line_reader(BufReader::new(std::io::stdin()), move |line| {
                command_tx.send(LoopMessage::Command(line)).is_ok()
            });
        }

        // `watcher` must outlive the loop; dropping it stops notifications.
        let result = self.run_loop(&root, tx, rx, running, on_event);
        drop(watcher);
        result
    }

    /// Event loop over already-wired channels.
    ///
    /// `tx` is handed to the worker for its results; anything else feeding
    /// `rx` (watcher, stdin) holds its own clone.
    pub(crate) fn run_loop<F>(
        &self,
        root: &Path,
        tx: Sender<LoopMessage>,
        rx: Receiver<LoopMessage>,
        running: Arc<AtomicBool>,
        mut on_event: F,
    ) -> RewatchResult<()>
    where
        F: FnMut(WatchEvent),
    {
        let registration = &self.options.registration;
        let action_runner = ActionRunner::new(
            self.runner.clone(),
            self.options.toolchain.clone(),
            self.session.clone(),
        );
        let worker = ActionWorker::spawn(action_runner, tx);
        let mut scheduler = RunScheduler::new();

        on_event(WatchEvent::WatchStarted {
            root: root.display().to_string(),
            pattern: registration.pattern().to_string(),
            actions: registration.actions().to_vec(),
            interactive: self.options.interactive,
        });
        info!(root = %root.display(), pattern = registration.pattern(), "watching");

        while running.load(Ordering::SeqCst) {
            let message = match rx.recv_timeout(POLL_INTERVAL) {
                Ok(message) => message,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            };

            match message {
                LoopMessage::PathChanged(path) => {
                    let Some(relative) = relative_to(root, &path) else {
                        on_event(WatchEvent::Error {
                            message: format!("change outside watched root: {}", path.display()),
                        });
                        continue;
                    };
                    if !registration.matches(&relative) {
                        debug!(path = %relative.display(), "ignoring change");
                        continue;
                    }

                    on_event(WatchEvent::FileChanged {
                        path: relative.display().to_string(),
                    });
                    let dispatch = scheduler.trigger();
                    self.dispatch(dispatch, &worker, &mut on_event)?;
                }
                LoopMessage::Command(line) => {
                    if let Some(command) = InteractiveCommand::parse(&line) {
                        on_event(command.apply(&self.session));
                    }
                }
                LoopMessage::ActionFinished { action, result } => {
                    on_event(WatchEvent::ActionComplete {
                        action,
                        result,
                        verbose: self.session.verbose(),
                    });
                }
                LoopMessage::RunFinished => {
                    let dispatch = scheduler.finish();
                    self.dispatch(dispatch, &worker, &mut on_event)?;
                }
                LoopMessage::WatchError(message) => {
                    on_event(WatchEvent::Error { message });
                }
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn dispatch<F>(
        &self,
        dispatch: Dispatch,
        worker: &ActionWorker,
        on_event: &mut F,
    ) -> RewatchResult<()>
    where
        F: FnMut(WatchEvent),
    {
        match dispatch {
            Dispatch::Start => {
                let actions = self.options.registration.actions().to_vec();
                on_event(WatchEvent::RunStarted {
                    actions: actions.clone(),
                });
                worker.submit(actions)
            }
            Dispatch::Queued => {
                on_event(WatchEvent::RunQueued);
                Ok(())
            }
            Dispatch::Skip => Ok(()),
        }
    }
}

/// Reads of source files (the toolchain compiling them) must not retrigger
/// a run.
fn is_content_change(kind: &EventKind) -> bool {
    kind.is_create() || kind.is_modify() || kind.is_remove()
}

fn relative_to(root: &Path, path: &Path) -> Option<PathBuf> {
    if let Ok(rel) = path.strip_prefix(root) {
        return Some(rel.to_path_buf());
    }
    // Removed files cannot be canonicalized; fall back to the parent.
    let canonical = match path.canonicalize() {
        Ok(canonical) => canonical,
        Err(_) => {
            let parent = path.parent()?.canonicalize().ok()?;
            parent.join(path.file_name()?)
        }
    };
    canonical.strip_prefix(root).ok().map(Path::to_path_buf)
}
