use serde::{Deserialize, Serialize};
use uom::{
    ConstZero,
    si::f64::{Mass, Time},
};

use crate::{Phase, ReactorError, units::MolarRate};

/// Mutable state of a cycling reactor.
///
/// Created once per run in [`Phase::Adsorption`] with an empty bed, and
/// mutated only by [`Reactor::advance`](crate::Reactor::advance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactorState {
    pub phase: Phase,

    /// Elapsed simulation time.
    pub clock: Time,

    /// Adsorbate held by the bed since the current adsorption phase began.
    pub adsorbed_mass: Mass,

    /// Molar feed rate of the limiting species.
    pub feed_rate: MolarRate,

    /// Number of completed adsorption/desorption cycles.
    pub completed_cycles: u64,

    /// Adsorbate taken up over all cycles.
    pub total_adsorbed: Mass,

    /// Adsorbate released over all cycles.
    pub total_desorbed: Mass,

    /// Product formed over all cycles.
    pub total_product: Mass,
}

impl ReactorState {
    /// State at the start of a run.
    #[must_use]
    pub fn initial(feed_rate: MolarRate) -> Self {
        Self {
            phase: Phase::Adsorption,
            clock: Time::ZERO,
            adsorbed_mass: Mass::ZERO,
            feed_rate,
            completed_cycles: 0,
            total_adsorbed: Mass::ZERO,
            total_desorbed: Mass::ZERO,
            total_product: Mass::ZERO,
        }
    }

    /// Checks the invariants a step relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ReactorError::InvalidState`] if the clock, the adsorbed mass,
    /// or the feed rate is negative or not finite.
    pub fn check(&self) -> Result<(), ReactorError> {
        if !is_non_negative(self.clock.value) {
            return Err(ReactorError::InvalidState {
                reason: "clock must be finite and non-negative",
            });
        }
        if !is_non_negative(self.adsorbed_mass.value) {
            return Err(ReactorError::InvalidState {
                reason: "adsorbed mass must be finite and non-negative",
            });
        }
        if !is_non_negative(self.feed_rate.value) {
            return Err(ReactorError::InvalidState {
                reason: "feed rate must be finite and non-negative",
            });
        }
        Ok(())
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
