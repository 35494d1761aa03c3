//! Session state - flags that live for one process

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-lifetime session flags.
///
/// Cloning shares the same underlying flag. The interactive command path is
/// the only writer; the action worker and the reporter read it.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    verbose: Arc<AtomicBool>,
}

impl SessionState {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose: Arc::new(AtomicBool::new(verbose)),
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose.load(Ordering::SeqCst)
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::SeqCst);
    }

    /// Flip the verbose flag and return the new value
    pub fn toggle_verbose(&self) -> bool {
        !self.verbose.fetch_xor(true, Ordering::SeqCst)
    }
}
