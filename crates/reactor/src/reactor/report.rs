use serde::{Deserialize, Serialize};
use uom::si::f64::{Mass, Time};

use crate::{MassDelta, Phase};

/// Outcome of one reactor step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Phase the step was executed in.
    pub phase: Phase,

    /// Clock after the step.
    pub clock: Time,

    /// Adsorbed mass after the step.
    pub adsorbed_mass: Mass,

    /// Mass exchanged during the step.
    pub delta: MassDelta,

    /// Equilibrium loading at the step's operating condition, in mol/kg.
    pub equilibrium_loading: f64,

    /// Whether the step ended by switching phase.
    pub switched: bool,
}

impl StepReport {
    /// Phase the reactor is in after this step.
    #[must_use]
    pub fn next_phase(&self) -> Phase {
        if self.switched {
            self.phase.switched()
        } else {
            self.phase
        }
    }
}
