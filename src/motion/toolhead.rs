//! Toolhead interface consumed by the sampler.

use core::fmt;

use crate::config::units::{FeedRate, Millimeters};

/// Cartesian axis addressed by a relative move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// G-code letter for this axis.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

/// Commanded toolhead position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToolheadPosition {
    /// X coordinate.
    pub x: Millimeters,
    /// Y coordinate.
    pub y: Millimeters,
    /// Z coordinate; after a probe cycle this is the trigger height.
    pub z: Millimeters,
}

impl ToolheadPosition {
    /// Create a position from raw millimeter values.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Millimeters(x),
            y: Millimeters(y),
            z: Millimeters(z),
        }
    }
}

/// Motion subsystem of the printer.
///
/// Moves may be queued; nothing is guaranteed to have physically happened
/// until [`wait_moves`](Toolhead::wait_moves) returns.
pub trait Toolhead {
    /// Failure reported by the motion subsystem.
    type Error: fmt::Display;

    /// Absolute XY move at the given feed rate; Z is unchanged.
    fn move_to(&mut self, x: Millimeters, y: Millimeters, speed: FeedRate) -> Result<(), Self::Error>;

    /// Relative move along one axis.
    fn move_relative(&mut self, axis: Axis, delta: Millimeters, speed: FeedRate) -> Result<(), Self::Error>;

    /// Block until every queued move has completed.
    fn wait_moves(&mut self) -> Result<(), Self::Error>;

    /// Current commanded position.
    fn position(&mut self) -> Result<ToolheadPosition, Self::Error>;
}

impl<T: Toolhead + ?Sized> Toolhead for &mut T {
    type Error = T::Error;

    fn move_to(&mut self, x: Millimeters, y: Millimeters, speed: FeedRate) -> Result<(), Self::Error> {
        (**self).move_to(x, y, speed)
    }

    fn move_relative(&mut self, axis: Axis, delta: Millimeters, speed: FeedRate) -> Result<(), Self::Error> {
        (**self).move_relative(axis, delta, speed)
    }

    fn wait_moves(&mut self) -> Result<(), Self::Error> {
        (**self).wait_moves()
    }

    fn position(&mut self) -> Result<ToolheadPosition, Self::Error> {
        (**self).position()
    }
}
