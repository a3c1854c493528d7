use uom::si::f64::Time;

/// How long a driven run lasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Run until the reactor clock reaches this value.
    Until(Time),

    /// Run until stopped by an observer or a [`StopSignal`](super::StopSignal).
    Unbounded,
}

impl Horizon {
    /// Returns `true` once `clock` has reached the end of the horizon.
    #[must_use]
    pub fn is_reached(&self, clock: Time) -> bool {
        match *self {
            Horizon::Until(duration) => clock >= duration,
            Horizon::Unbounded => false,
        }
    }
}
