//! Repeated probing at a single target.
//!
//! The sampler brackets every touch with Z clearance moves and waits for the
//! toolhead after each command, so exactly one physical action is in flight
//! at a time.

use core::fmt;

use crate::config::units::{FeedRate, Millimeters};
use crate::config::{TargetPosition, TrammingConfig};
use crate::console::{respond, Console};
use crate::error::{ConfigError, Error, HardwareError, Result};
use crate::motion::{Axis, Toolhead};

use super::device::Probe;
use super::samples::{SampleSet, MAX_SAMPLES};

/// Relative Z lift before traveling to a target.
pub const SAFETY_LIFT: Millimeters = Millimeters(5.0);

/// Relative Z retract between consecutive samples.
pub const SAMPLE_RETRACT: Millimeters = Millimeters(3.0);

/// Feed rate for all Z clearance moves.
pub const Z_FEED_RATE: FeedRate = FeedRate(600.0);

/// Takes repeated probe samples at a target and reduces them to a median.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    samples: u8,
    lift_height: Millimeters,
    travel_speed: FeedRate,
}

impl Sampler {
    /// Create a sampler.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSampleCount` if `samples` is outside `1..=MAX_SAMPLES`.
    pub fn new(samples: u8, lift_height: Millimeters, travel_speed: FeedRate) -> Result<Self> {
        if samples == 0 || usize::from(samples) > MAX_SAMPLES {
            return Err(Error::Config(ConfigError::InvalidSampleCount(samples)));
        }
        Ok(Self {
            samples,
            lift_height,
            travel_speed,
        })
    }

    /// Create a sampler from a validated configuration.
    pub fn from_config(config: &TrammingConfig) -> Result<Self> {
        Self::new(config.samples, config.lift_height, config.probe_speed)
    }

    /// Number of touches per target.
    #[inline]
    pub fn samples(&self) -> u8 {
        self.samples
    }

    /// Probe `target` and return the median trigger height.
    ///
    /// Sequence: wait, safety lift, travel, `samples` touches with a retract
    /// between each, median, parking lift.
    ///
    /// # Errors
    ///
    /// Any toolhead or probe failure aborts the sequence and is returned as
    /// `HardwareError::ProbeFailed`. Nothing is retried.
    pub fn sample<H, C>(&self, machine: &mut H, console: &mut C, target: &TargetPosition) -> Result<Millimeters>
    where
        H: Toolhead + Probe,
        C: Console,
    {
        self.run(machine, console, target).map_err(|e| {
            warn!("probe at {} failed", target.label.as_str());
            Error::Hardware(e)
        })
    }

    fn run<H, C>(
        &self,
        machine: &mut H,
        console: &mut C,
        target: &TargetPosition,
    ) -> core::result::Result<Millimeters, HardwareError>
    where
        H: Toolhead + Probe,
        C: Console,
    {
        let name = target.label.as_str();

        Toolhead::wait_moves(machine).map_err(wrap)?;

        lift(machine, SAFETY_LIFT)?;

        respond(console, format_args!("Moving to {} (X{:.1} Y{:.1})", name, target.x.0, target.y.0));
        machine
            .move_to(target.x, target.y, self.travel_speed)
            .map_err(wrap)?;
        Toolhead::wait_moves(machine).map_err(wrap)?;

        respond(console, format_args!("Probing {} ({} samples)...", name, self.samples));

        let mut set = SampleSet::new();
        for i in 0..self.samples {
            Probe::probe(machine).map_err(wrap)?;
            Toolhead::wait_moves(machine).map_err(wrap)?;

            let z = machine.position().map_err(wrap)?.z;
            set.push(z).map_err(|_| wrap("sample buffer full"))?;
            respond(console, format_args!("Sample {}: Z={:.4}", i + 1, z.0));
            debug!("{} sample {}: {}", name, i + 1, z.0);

            if i + 1 < self.samples {
                lift(machine, SAMPLE_RETRACT)?;
            }
        }

        let median = set.median().ok_or_else(|| wrap("no samples collected"))?;
        respond(console, format_args!("Median result: Z={:.4}", median.0));
        info!("{} median: {}", name, median.0);

        lift(machine, self.lift_height)?;

        Ok(median)
    }
}

/// Relative Z move followed by a wait.
fn lift<T: Toolhead>(toolhead: &mut T, distance: Millimeters) -> core::result::Result<(), HardwareError> {
    toolhead
        .move_relative(Axis::Z, distance, Z_FEED_RATE)
        .map_err(wrap)?;
    toolhead.wait_moves().map_err(wrap)
}

fn wrap<E: fmt::Display>(e: E) -> HardwareError {
    HardwareError::probe_failed(&e)
}
