use crate::ReactorState;

/// Indicates how a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The clock reached the requested duration.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,

    /// Stopped by an external [`StopSignal`](super::StopSignal).
    Cancelled,
}

/// The result of a driven run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Number of steps taken during this run.
    pub steps: u64,

    /// Reactor state after the last step.
    pub state: ReactorState,
}
