use std::iter::FusedIterator;

use uom::si::f64::Time;

use crate::{Reactor, ReactorError, StepReport};

/// Steps produced by [`Reactor::run_for`].
///
/// Yields one report per step while the clock is below the target duration,
/// and ends after the first error.
#[derive(Debug)]
pub struct RunFor<'a> {
    reactor: &'a mut Reactor,
    duration: Time,
    done: bool,
}

impl<'a> RunFor<'a> {
    pub(super) fn new(reactor: &'a mut Reactor, duration: Time) -> Self {
        Self {
            reactor,
            duration,
            done: false,
        }
    }
}

impl Iterator for RunFor<'_> {
    type Item = Result<StepReport, ReactorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.reactor.state().clock >= self.duration {
            self.done = true;
            return None;
        }

        let result = self.reactor.advance();
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

impl FusedIterator for RunFor<'_> {}
