//! Run scheduler - the `Idle`/`Running` state machine of the watch loop

/// Whether a run is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

/// What the loop should do after feeding the scheduler an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Hand a fresh run to the worker
    Start,
    /// A run is in flight; a follow-up run has been queued
    Queued,
    /// Nothing to do
    Skip,
}

/// Serializes runs so at most one is in flight.
///
/// Triggers that arrive while running collapse into a single queued run,
/// started as soon as the current one finishes.
#[derive(Debug, Default)]
pub struct RunScheduler {
    state: LoopState,
    pending: bool,
}

impl RunScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// A qualifying change arrived
    pub fn trigger(&mut self) -> Dispatch {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::Running;
                Dispatch::Start
            }
            LoopState::Running if self.pending => Dispatch::Skip,
            LoopState::Running => {
                self.pending = true;
                Dispatch::Queued
            }
        }
    }

    /// The in-flight run finished
    pub fn finish(&mut self) -> Dispatch {
        match self.state {
            LoopState::Idle => Dispatch::Skip,
            LoopState::Running if self.pending => {
                self.pending = false;
                Dispatch::Start
            }
            LoopState::Running => {
                self.state = LoopState::Idle;
                Dispatch::Skip
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let scheduler = RunScheduler::new();
        assert_eq!(scheduler.state(), LoopState::Idle);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn trigger_while_idle_starts_a_run() {
        let mut scheduler = RunScheduler::new();
        assert_eq!(scheduler.trigger(), Dispatch::Start);
        assert_eq!(scheduler.state(), LoopState::Running);
    }

    #[test]
    fn trigger_while_running_dispatches_nothing() {
        let mut scheduler = RunScheduler::new();
        scheduler.trigger();

        assert_eq!(scheduler.trigger(), Dispatch::Queued);
        assert_eq!(scheduler.trigger(), Dispatch::Skip);
        assert_eq!(scheduler.trigger(), Dispatch::Skip);
        assert!(scheduler.has_pending());
        assert_eq!(scheduler.state(), LoopState::Running);
    }

    #[test]
    fn finish_with_pending_starts_exactly_one_run() {
        let mut scheduler = RunScheduler::new();
        scheduler.trigger();
        scheduler.trigger();
        scheduler.trigger();

        assert_eq!(scheduler.finish(), Dispatch::Start);
        assert_eq!(scheduler.state(), LoopState::Running);
        assert!(!scheduler.has_pending());

        assert_eq!(scheduler.finish(), Dispatch::Skip);
        assert_eq!(scheduler.state(), LoopState::Idle);
    }

    #[test]
    fn finish_without_pending_returns_to_idle() {
        let mut scheduler = RunScheduler::new();
        scheduler.trigger();
        assert_eq!(scheduler.finish(), Dispatch::Skip);
        assert_eq!(scheduler.state(), LoopState::Idle);
    }

    #[test]
    fn stray_finish_while_idle_is_ignored() {
        let mut scheduler = RunScheduler::new();
        assert_eq!(scheduler.finish(), Dispatch::Skip);
        assert_eq!(scheduler.state(), LoopState::Idle);
    }
}
