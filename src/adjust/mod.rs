//! Adjustment module for bed-tramming.
//!
//! Converts a height difference into a screw-turn recommendation.

mod calculator;

pub use calculator::{evaluate, Adjustment, TurnDirection, TOLERANCE};
