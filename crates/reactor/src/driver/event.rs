use crate::StepReport;

/// Event emitted by the driver after each reactor step.
///
/// Steps are numbered from 1, and `report.clock` increases strictly from one
/// event to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number within this run.
    pub step: u64,

    /// Report of the step, forwarded unchanged.
    pub report: StepReport,
}
