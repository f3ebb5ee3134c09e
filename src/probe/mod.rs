//! Probe module for bed-tramming.
//!
//! Provides the probe interface, median filtering, and the repeated-probe
//! sampler.

mod device;
mod sampler;
mod samples;

pub use device::Probe;
pub use sampler::{Sampler, SAFETY_LIFT, SAMPLE_RETRACT, Z_FEED_RATE};
pub use samples::{median, SampleSet, MAX_SAMPLES};
