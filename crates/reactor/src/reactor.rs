//! Two-phase adsorption/desorption state machine.
//!
//! A [`Reactor`] starts in [`Phase::Adsorption`] with an empty bed. Each call
//! to [`Reactor::advance`] runs one explicit Euler step of the current phase,
//! moves the clock forward by the step size, and then asks [`PhaseSwitch`]
//! whether the phase's exit condition has been reached:
//!
//! - Adsorption ends once the adsorbed mass reaches the capacity threshold.
//! - Desorption ends once the bed is empty.
//!
//! The cycle repeats until the caller stops stepping.

mod report;
mod run_for;
mod state;

pub use report::StepReport;
pub use run_for::RunFor;
pub use state::ReactorState;

use uom::{
    ConstZero,
    si::{
        f64::{Mass, Time},
        mass::kilogram,
        time::second,
    },
};
use zeolite_core::Model;

use crate::{
    ConfigError, MassBalance, MassBalanceInput, MassDelta, OperatingCondition, Phase,
    PhaseSwitch, PhaseSwitchInput, ReactorConfig, ReactorError,
    units::{MolarRate, StepSize},
};

/// A reactor cycling between adsorption and desorption.
#[derive(Debug, Clone)]
pub struct Reactor {
    mass_balance: MassBalance,
    adsorption: PhaseCondition,
    desorption: PhaseCondition,
    step_size: StepSize,
    capacity: Mass,
    regeneration_rate: MolarRate,
    state: ReactorState,
}

/// Operating condition of one phase with its precomputed equilibrium loading.
#[derive(Debug, Clone, Copy)]
struct PhaseCondition {
    condition: OperatingCondition,
    equilibrium_loading: f64,
}

impl Reactor {
    /// Creates a reactor at the start of a run.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid.
    pub fn new(config: ReactorConfig) -> Result<Self, ConfigError> {
        let state = ReactorState::initial(config.feed_rate);
        Self::resume(config, state)
    }

    /// Creates a reactor that continues from a saved state.
    ///
    /// The state itself is checked on every [`advance`](Self::advance).
    /// Without a configured regeneration rate, desorption runs at the
    /// adsorbate formation rate of the configured feed, fixed here so later
    /// feed changes cannot stall regeneration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid, or if the
    /// resolved regeneration rate is zero.
    pub fn resume(config: ReactorConfig, state: ReactorState) -> Result<Self, ConfigError> {
        config.validate()?;

        let mass_balance = MassBalance {
            stoichiometry: config.stoichiometry,
            constants: config.constants,
        };

        let capacity = config.capacity.threshold(
            &config.isotherm,
            &config.adsorption,
            &config.constants,
            mass_balance.adsorbate_molar_mass(),
        )?;

        let regeneration_rate = config
            .regeneration_rate
            .unwrap_or_else(|| mass_balance.adsorbate_rate(config.feed_rate));
        if regeneration_rate.value <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "regeneration_rate",
                reason: "resolves to zero; set it or use a positive feed rate",
            });
        }

        let phase_condition = |condition: OperatingCondition| -> Result<_, ConfigError> {
            Ok(PhaseCondition {
                condition,
                equilibrium_loading: condition
                    .equilibrium_loading(&config.isotherm, &config.constants)?,
            })
        };

        Ok(Self {
            mass_balance,
            adsorption: phase_condition(config.adsorption)?,
            desorption: phase_condition(config.desorption)?,
            step_size: config.step_size,
            capacity,
            regeneration_rate,
            state,
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ReactorState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Adsorbed mass at which adsorption ends.
    #[must_use]
    pub fn capacity(&self) -> Mass {
        self.capacity
    }

    /// Fixed time step.
    #[must_use]
    pub fn step_size(&self) -> StepSize {
        self.step_size
    }

    /// Operating condition of `phase`.
    #[must_use]
    pub fn condition(&self, phase: Phase) -> &OperatingCondition {
        &self.phase_condition(phase).condition
    }

    /// Changes the feed rate used by subsequent steps.
    ///
    /// # Errors
    ///
    /// Returns [`ReactorError::InvalidState`] for a negative or non-finite rate.
    pub fn set_feed_rate(&mut self, feed_rate: MolarRate) -> Result<(), ReactorError> {
        if !(feed_rate.value.is_finite() && feed_rate.value >= 0.0) {
            return Err(ReactorError::InvalidState {
                reason: "feed rate must be finite and non-negative",
            });
        }
        self.state.feed_rate = feed_rate;
        Ok(())
    }

    /// Advances the reactor by one step.
    ///
    /// Runs the mass balance of the current phase, moves the clock forward,
    /// and switches phase if the exit condition is met. The state is only
    /// modified when the whole step succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ReactorError::InvalidState`] if the state violates its
    /// invariants; the state is left unchanged.
    pub fn advance(&mut self) -> Result<StepReport, ReactorError> {
        self.state.check()?;

        let phase = self.state.phase;
        let dt = self.step_size.into_inner();

        let delta = match phase {
            Phase::Adsorption => self.adsorption_delta(dt),
            Phase::Desorption => self.desorption_delta(dt),
        };

        let mut next = self.state;
        next.clock += dt;
        next.adsorbed_mass += delta.adsorbed;
        if next.adsorbed_mass < Mass::ZERO {
            next.adsorbed_mass = Mass::ZERO;
        }
        if delta.adsorbed > Mass::ZERO {
            next.total_adsorbed += delta.adsorbed;
        } else {
            next.total_desorbed -= delta.adsorbed;
        }
        next.total_product += delta.product;

        next.phase = PhaseSwitch::next(PhaseSwitchInput {
            phase,
            adsorbed_mass: next.adsorbed_mass,
            capacity: self.capacity,
        });
        let switched = next.phase != phase;
        if switched {
            self.on_switch(&mut next);
        }

        let report = StepReport {
            phase,
            clock: next.clock,
            adsorbed_mass: next.adsorbed_mass,
            delta,
            equilibrium_loading: self.phase_condition(phase).equilibrium_loading,
            switched,
        };

        self.state = next;
        Ok(report)
    }

    /// Steps the reactor until its clock reaches `duration`.
    ///
    /// The returned iterator is lazy and borrows the reactor mutably; it
    /// yields nothing when the clock is already at or past `duration`, and
    /// may overshoot `duration` by less than one step.
    pub fn run_for(&mut self, duration: Time) -> RunFor<'_> {
        RunFor::new(self, duration)
    }

    fn phase_condition(&self, phase: Phase) -> &PhaseCondition {
        match phase {
            Phase::Adsorption => &self.adsorption,
            Phase::Desorption => &self.desorption,
        }
    }

    fn adsorption_delta(&self, dt: Time) -> MassDelta {
        let input = MassBalanceInput {
            feed_rate: self.state.feed_rate,
            dt,
        };
        match self.mass_balance.call(&input) {
            Ok(delta) => delta,
            Err(never) => match never {},
        }
    }

    /// Linear regeneration toward an empty bed.
    fn desorption_delta(&self, dt: Time) -> MassDelta {
        let capacity = self.regeneration_rate * dt * self.mass_balance.adsorbate_molar_mass();

        let released = if capacity < self.state.adsorbed_mass {
            capacity
        } else {
            self.state.adsorbed_mass
        };

        MassDelta {
            adsorbed: -released,
            product: Mass::ZERO,
        }
    }

    fn on_switch(&self, next: &mut ReactorState) {
        log::debug!(
            "{} -> {} at t = {} s with {} kg adsorbed",
            next.phase.switched(),
            next.phase,
            next.clock.get::<second>(),
            next.adsorbed_mass.get::<kilogram>(),
        );

        if next.phase == Phase::Adsorption {
            next.adsorbed_mass = Mass::ZERO;
            next.completed_cycles += 1;
        }
    }
}
