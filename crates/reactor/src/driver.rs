//! Run loop for a cycling reactor.
//!
//! The driver steps a [`Reactor`] until its [`Horizon`] is reached, an
//! observer asks it to stop, or a [`StopSignal`] is raised. Every
//! [`StepReport`](crate::StepReport) is forwarded to the observer unchanged,
//! so the observer is the reporting sink (console, log, plot buffer).
//!
//! # Example
//!
//! ```
//! use uom::si::{f64::Time, time::second};
//! use zeolite_reactor::{
//!     Reactor, ReactorConfig,
//!     driver::{self, Event, Horizon, StopSignal},
//! };
//!
//! let mut reactor = Reactor::new(ReactorConfig::methanation())?;
//! let mut switches = Vec::new();
//!
//! let solution = driver::run(
//!     &mut reactor,
//!     Horizon::Until(Time::new::<second>(10.0)),
//!     &StopSignal::new(),
//!     |event: &Event| {
//!         if event.report.switched {
//!             switches.push(event.report.clock);
//!         }
//!         None
//!     },
//! )?;
//!
//! assert_eq!(solution.status, driver::Status::Complete);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod error;
mod event;
mod horizon;
mod solution;
mod stop;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use horizon::Horizon;
pub use solution::{Solution, Status};
pub use stop::StopSignal;

use uom::si::time::second;
use zeolite_core::Observer;

use crate::Reactor;

/// Runs `reactor` until `horizon` is reached or the run is stopped.
///
/// # Algorithm
///
/// At the top of each iteration:
/// - If `stop` has been raised, the run ends as [`Status::Cancelled`].
/// - If the reactor clock has reached `horizon`, the run ends as
///   [`Status::Complete`].
///
/// Otherwise the reactor advances one step and an [`Event`] is emitted to the
/// observer, which may return [`Action::StopEarly`] to end the run.
///
/// An [`Horizon::Unbounded`] run only ends through the observer or `stop`.
///
/// # Errors
///
/// Returns [`Error::Reactor`] if a step fails. The reactor keeps the state it
/// had before the failing step.
pub fn run<Obs>(
    reactor: &mut Reactor,
    horizon: Horizon,
    stop: &StopSignal,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    log::info!(
        "starting {} run at t = {} s ({:?})",
        reactor.phase(),
        reactor.state().clock.get::<second>(),
        horizon,
    );

    let mut steps = 0;

    let status = loop {
        if stop.is_stopped() {
            log::warn!("run cancelled after {steps} steps");
            break Status::Cancelled;
        }
        if horizon.is_reached(reactor.state().clock) {
            break Status::Complete;
        }

        let report = reactor.advance().map_err(|source| Error::Reactor {
            step: steps + 1,
            source,
        })?;
        steps += 1;

        log::trace!(
            "step {steps}: {} t = {} s",
            report.phase,
            report.clock.get::<second>(),
        );

        let event = Event {
            step: steps,
            report,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }
    };

    let state = *reactor.state();
    log::info!(
        "run finished ({status:?}) after {steps} steps at t = {} s, {} cycles completed",
        state.clock.get::<second>(),
        state.completed_cycles,
    );

    Ok(Solution {
        status,
        steps,
        state,
    })
}

/// Runs `reactor` without observation.
///
/// This is a convenience wrapper around [`run`] that discards events.
///
/// # Errors
///
/// Returns [`Error::Reactor`] if a step fails.
pub fn run_unobserved(
    reactor: &mut Reactor,
    horizon: Horizon,
    stop: &StopSignal,
) -> Result<Solution, Error> {
    run(reactor, horizon, stop, ())
}
