/// Control actions an observer may request from the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run after the current step and return the solution so far.
    StopEarly,
}
