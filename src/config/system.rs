//! Tramming configuration - root configuration structure.

use serde::Deserialize;

use super::targets::{Target, TargetPosition, TargetTable};
use super::units::{FeedRate, Millimeters};

/// Root configuration structure from TOML.
///
/// Every field has a default, so an empty document yields a usable config.
/// Misspelled keys are rejected rather than silently defaulted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrammingConfig {
    /// Thread pitch of the leveling screws (height change per full turn).
    #[serde(default = "default_screw_pitch")]
    pub screw_pitch: Millimeters,

    /// Probe touches taken per target.
    #[serde(default = "default_samples")]
    pub samples: u8,

    /// Relative Z lift after the last sample at a target.
    #[serde(default = "default_lift_height")]
    pub lift_height: Millimeters,

    /// XY travel feed rate between targets.
    #[serde(default = "default_probe_speed")]
    pub probe_speed: FeedRate,

    /// Named target coordinates.
    #[serde(default)]
    pub targets: TargetTable,
}

fn default_screw_pitch() -> Millimeters {
    Millimeters(0.8)
}

fn default_samples() -> u8 {
    6
}

fn default_lift_height() -> Millimeters {
    Millimeters(20.0)
}

fn default_probe_speed() -> FeedRate {
    FeedRate(6000.0)
}

impl TrammingConfig {
    /// Start building a configuration from defaults.
    pub fn builder() -> super::TrammingConfigBuilder {
        super::TrammingConfigBuilder::new()
    }

    /// Get the position for a target.
    #[inline]
    pub fn target(&self, target: Target) -> &TargetPosition {
        self.targets.get(target)
    }
}

impl Default for TrammingConfig {
    fn default() -> Self {
        Self {
            screw_pitch: default_screw_pitch(),
            samples: default_samples(),
            lift_height: default_lift_height(),
            probe_speed: default_probe_speed(),
            targets: TargetTable::default(),
        }
    }
}
