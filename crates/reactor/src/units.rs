use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::{
    si::{
        ISQ, Quantity, SI,
        amount_of_substance::mole,
        f64::{AmountOfSubstance, Time},
        time::second,
    },
    typenum::{N1, P1, Z0},
};

/// Molar flow rate, mol/s in SI.
pub type MolarRate = Quantity<ISQ<Z0, Z0, N1, Z0, Z0, P1, Z0>, SI<f64>, f64>;

/// Creates a [`MolarRate`] from a value in mol/s.
#[must_use]
pub fn mole_per_second(value: f64) -> MolarRate {
    AmountOfSubstance::new::<mole>(value) / Time::new::<second>(1.0)
}

/// A strictly positive time step used to advance the reactor clock.
///
/// Deserializes from a plain [`Time`] value in seconds and rejects zero,
/// negative, and non-finite steps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Time", into = "Time")]
pub struct StepSize(Time);

/// Error returned when constructing an invalid [`StepSize`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepSizeError {
    #[error("step size must be positive and finite, got {0} s")]
    NotPositive(f64),
}

impl StepSize {
    /// Constructs a `StepSize` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns [`StepSizeError::NotPositive`] if the time is not a positive, finite value.
    pub fn new(time: Time) -> Result<Self, StepSizeError> {
        let seconds = time.get::<second>();
        if seconds > 0.0 && seconds.is_finite() {
            Ok(Self(time))
        } else {
            Err(StepSizeError::NotPositive(seconds))
        }
    }

    /// Wraps a time value the caller knows to be positive and finite.
    pub(crate) fn new_unchecked(time: Time) -> Self {
        Self(time)
    }

    /// Consumes the `StepSize` and returns the underlying [`Time`] value.
    #[must_use]
    pub fn into_inner(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for StepSize {
    type Error = StepSizeError;

    fn try_from(time: Time) -> Result<Self, Self::Error> {
        Self::new(time)
    }
}

impl From<StepSize> for Time {
    fn from(step: StepSize) -> Self {
        step.0
    }
}

impl Deref for StepSize {
    type Target = Time;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for StepSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.0.get::<second>())
    }
}
