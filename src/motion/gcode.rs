//! G-code backed toolhead and probe.
//!
//! Hosts that expose a G-code script interpreter (Klipper-style firmware)
//! can plug in a [`ScriptRunner`] and get both [`Toolhead`] and [`Probe`]
//! for free.

use core::fmt;

use crate::config::units::{FeedRate, Millimeters};
use crate::console::format_truncated;
use crate::probe::Probe;

use super::toolhead::{Axis, Toolhead, ToolheadPosition};

/// Capacity of one generated G-code line.
pub const LINE_CAPACITY: usize = 64;

/// One generated G-code line.
pub type GcodeLine = heapless::String<LINE_CAPACITY>;

/// Host-side G-code interpreter.
pub trait ScriptRunner {
    /// Failure reported by the host.
    type Error: fmt::Display;

    /// Execute one G-code script line.
    fn run_script(&mut self, script: &str) -> Result<(), Self::Error>;

    /// Block until every queued move has completed.
    fn wait_moves(&mut self) -> Result<(), Self::Error>;

    /// Current commanded position.
    fn position(&mut self) -> Result<ToolheadPosition, Self::Error>;
}

/// Relative-positioning mode.
pub const RELATIVE_MODE: &str = "G91";
/// Absolute-positioning mode.
pub const ABSOLUTE_MODE: &str = "G90";
/// Single probe cycle command.
pub const PROBE_COMMAND: &str = "PROBE";

/// `G1 X<x> Y<y> F<f>` absolute XY move.
pub fn linear_move_xy(x: Millimeters, y: Millimeters, speed: FeedRate) -> GcodeLine {
    format_truncated(format_args!("G1 X{:.3} Y{:.3} F{:.1}", x.0, y.0, speed.0))
}

/// `G1 <axis><d> F<f>` single-axis move.
pub fn linear_move_axis(axis: Axis, distance: Millimeters, speed: FeedRate) -> GcodeLine {
    format_truncated(format_args!("G1 {}{:.3} F{:.1}", axis.letter(), distance.0, speed.0))
}

/// Toolhead and probe driven through G-code scripts.
#[derive(Debug)]
pub struct GcodeToolhead<R: ScriptRunner> {
    runner: R,
}

impl<R: ScriptRunner> GcodeToolhead<R> {
    /// Wrap a script runner.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Borrow the underlying runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Unwrap the underlying runner.
    pub fn into_inner(self) -> R {
        self.runner
    }
}

impl<R: ScriptRunner> Toolhead for GcodeToolhead<R> {
    type Error = R::Error;

    fn move_to(&mut self, x: Millimeters, y: Millimeters, speed: FeedRate) -> Result<(), Self::Error> {
        self.runner.run_script(linear_move_xy(x, y, speed).as_str())
    }

    fn move_relative(&mut self, axis: Axis, delta: Millimeters, speed: FeedRate) -> Result<(), Self::Error> {
        self.runner.run_script(RELATIVE_MODE)?;
        let moved = self.runner.run_script(linear_move_axis(axis, delta, speed).as_str());
        // Leave the host in absolute mode even when the move was refused.
        let restored = self.runner.run_script(ABSOLUTE_MODE);
        moved.and(restored)
    }

    fn wait_moves(&mut self) -> Result<(), Self::Error> {
        self.runner.wait_moves()
    }

    fn position(&mut self) -> Result<ToolheadPosition, Self::Error> {
        self.runner.position()
    }
}

impl<R: ScriptRunner> Probe for GcodeToolhead<R> {
    type Error = R::Error;

    fn probe(&mut self) -> Result<(), Self::Error> {
        self.runner.run_script(PROBE_COMMAND)
    }
}
