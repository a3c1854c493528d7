use std::fmt;

use serde::{Deserialize, Serialize};
use uom::{ConstZero, si::f64::Mass};

use crate::ReactorError;

/// Operating phase of a cycling adsorption reactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Phase {
    /// The bed takes up the adsorbate from the reacting feed.
    Adsorption = 0,
    /// The bed is regenerated and releases the adsorbate.
    Desorption = 1,
}

impl Phase {
    /// Returns the other phase of the two-phase cycle.
    #[must_use]
    pub fn switched(self) -> Self {
        match self {
            Phase::Adsorption => Phase::Desorption,
            Phase::Desorption => Phase::Adsorption,
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = ReactorError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Phase::Adsorption),
            1 => Ok(Phase::Desorption),
            _ => Err(ReactorError::InvalidState {
                reason: "unknown phase code",
            }),
        }
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase as u8
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Adsorption => f.write_str("adsorption"),
            Phase::Desorption => f.write_str("desorption"),
        }
    }
}

/// Input to the [`PhaseSwitch`] policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSwitchInput {
    pub phase: Phase,
    pub adsorbed_mass: Mass,
    pub capacity: Mass,
}

/// Threshold policy deciding when the reactor changes phase.
///
/// The policy has hysteresis across the whole loading range:
/// - If in `Adsorption` and `adsorbed_mass >= capacity`, returns `Desorption`.
/// - If in `Desorption` and `adsorbed_mass <= 0`, returns `Adsorption`.
/// - Otherwise, the current [`Phase`] is returned unchanged.
///
/// # Example
///
/// ```
/// use uom::si::{f64::Mass, mass::kilogram};
/// use zeolite_reactor::{Phase, PhaseSwitch, PhaseSwitchInput};
///
/// let input = PhaseSwitchInput {
///     phase: Phase::Adsorption,
///     adsorbed_mass: Mass::new::<kilogram>(6.5),
///     capacity: Mass::new::<kilogram>(6.4),
/// };
/// assert_eq!(PhaseSwitch::next(input), Phase::Desorption);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSwitch;

impl PhaseSwitch {
    /// Returns the phase the reactor should be in after a step.
    #[must_use]
    pub fn next(input: PhaseSwitchInput) -> Phase {
        let PhaseSwitchInput {
            phase,
            adsorbed_mass,
            capacity,
        } = input;

        match phase {
            Phase::Adsorption => {
                if adsorbed_mass >= capacity {
                    Phase::Desorption
                } else {
                    Phase::Adsorption
                }
            }
            Phase::Desorption => {
                if adsorbed_mass <= Mass::ZERO {
                    Phase::Adsorption
                } else {
                    Phase::Desorption
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::mass::kilogram;

    /// Capacity (kg) for all tests.
    const CAPACITY: f64 = 6.4;

    fn test_input(phase: Phase, adsorbed_kg: f64) -> PhaseSwitchInput {
        PhaseSwitchInput {
            phase,
            adsorbed_mass: Mass::new::<kilogram>(adsorbed_kg),
            capacity: Mass::new::<kilogram>(CAPACITY),
        }
    }

    #[test]
    fn switches_to_desorption_at_or_above_capacity() {
        let output = PhaseSwitch::next(test_input(Phase::Adsorption, CAPACITY));
        assert_eq!(output, Phase::Desorption);

        let output = PhaseSwitch::next(test_input(Phase::Adsorption, CAPACITY + 0.1));
        assert_eq!(output, Phase::Desorption);
    }

    #[test]
    fn keeps_adsorbing_below_capacity() {
        let output = PhaseSwitch::next(test_input(Phase::Adsorption, CAPACITY - 0.1));
        assert_eq!(output, Phase::Adsorption);

        let output = PhaseSwitch::next(test_input(Phase::Adsorption, 0.0));
        assert_eq!(output, Phase::Adsorption);
    }

    #[test]
    fn keeps_desorbing_while_loaded() {
        let output = PhaseSwitch::next(test_input(Phase::Desorption, 0.1));
        assert_eq!(output, Phase::Desorption);

        let output = PhaseSwitch::next(test_input(Phase::Desorption, CAPACITY + 1.0));
        assert_eq!(output, Phase::Desorption);
    }

    #[test]
    fn switches_to_adsorption_when_empty() {
        let output = PhaseSwitch::next(test_input(Phase::Desorption, 0.0));
        assert_eq!(output, Phase::Adsorption);
    }

    #[test]
    fn phase_codes_round_trip_and_reject_unknown() {
        assert_eq!(Phase::try_from(u8::from(Phase::Desorption)).unwrap(), Phase::Desorption);
        assert!(matches!(
            Phase::try_from(7),
            Err(ReactorError::InvalidState { .. })
        ));
    }

    #[test]
    fn switched_alternates() {
        assert_eq!(Phase::Adsorption.switched(), Phase::Desorption);
        assert_eq!(Phase::Adsorption.switched().switched(), Phase::Adsorption);
    }
}
