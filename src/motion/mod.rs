//! Motion module for bed-tramming.
//!
//! Defines the toolhead interface, a G-code backed implementation, and the
//! adapter that pairs a toolhead with a separate probe.

pub mod gcode;
mod machine;
mod toolhead;

pub use gcode::{GcodeToolhead, ScriptRunner};
pub use machine::Machine;
pub use toolhead::{Axis, Toolhead, ToolheadPosition};
