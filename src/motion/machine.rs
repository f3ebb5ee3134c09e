//! Pairing of independent toolhead and probe collaborators.

use crate::config::units::{FeedRate, Millimeters};
use crate::probe::Probe;

use super::toolhead::{Axis, Toolhead, ToolheadPosition};

/// A toolhead and a probe that are separate objects on the host.
///
/// The sampler needs one value implementing both traits; this forwards each
/// trait to its half.
#[derive(Debug, Clone, Default)]
pub struct Machine<T, P> {
    /// Motion half.
    pub toolhead: T,
    /// Probe half.
    pub probe: P,
}

impl<T, P> Machine<T, P> {
    /// Pair a toolhead with a probe.
    pub fn new(toolhead: T, probe: P) -> Self {
        Self { toolhead, probe }
    }

    /// Split back into the two halves.
    pub fn into_parts(self) -> (T, P) {
        (self.toolhead, self.probe)
    }
}

impl<T: Toolhead, P> Toolhead for Machine<T, P> {
    type Error = T::Error;

    fn move_to(&mut self, x: Millimeters, y: Millimeters, speed: FeedRate) -> Result<(), Self::Error> {
        self.toolhead.move_to(x, y, speed)
    }

    fn move_relative(&mut self, axis: Axis, delta: Millimeters, speed: FeedRate) -> Result<(), Self::Error> {
        self.toolhead.move_relative(axis, delta, speed)
    }

    fn wait_moves(&mut self) -> Result<(), Self::Error> {
        self.toolhead.wait_moves()
    }

    fn position(&mut self) -> Result<ToolheadPosition, Self::Error> {
        self.toolhead.position()
    }
}

impl<T, P: Probe> Probe for Machine<T, P> {
    type Error = P::Error;

    fn probe(&mut self) -> Result<(), Self::Error> {
        self.probe.probe()
    }
}
