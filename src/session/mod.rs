//! Session module for bed-tramming.
//!
//! Holds the center reference and exposes the operator operations and
//! their command names.

mod command;
mod state;

pub use command::Command;
pub use state::{Outcome, Reference, SweepReport, TrammingSession};
