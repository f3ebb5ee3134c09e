//! Builder pattern for TrammingConfig.

use crate::error::{ConfigError, Error, Result};

use super::targets::{Target, TargetPosition, TargetTable};
use super::units::{FeedRate, Millimeters};
use super::validation::validate_config;
use super::TrammingConfig;

/// Builder for creating validated [`TrammingConfig`] instances in code.
///
/// Starts from the same defaults as an empty TOML document.
#[derive(Debug, Clone)]
pub struct TrammingConfigBuilder {
    config: TrammingConfig,
    label_error: Option<Target>,
}

impl Default for TrammingConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrammingConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: TrammingConfig::default(),
            label_error: None,
        }
    }

    /// Set the leveling screw thread pitch.
    pub fn screw_pitch(mut self, pitch: Millimeters) -> Self {
        self.config.screw_pitch = pitch;
        self
    }

    /// Set the number of probe touches per target.
    pub fn samples(mut self, samples: u8) -> Self {
        self.config.samples = samples;
        self
    }

    /// Set the parking lift after each target.
    pub fn lift_height(mut self, height: Millimeters) -> Self {
        self.config.lift_height = height;
        self
    }

    /// Set the XY travel feed rate.
    pub fn probe_speed(mut self, speed: FeedRate) -> Self {
        self.config.probe_speed = speed;
        self
    }

    /// Override a target's coordinates, keeping its current label.
    pub fn target_xy(mut self, target: Target, x: Millimeters, y: Millimeters) -> Self {
        let label = self.config.targets.get(target).label.clone();
        self.config.targets.set(target, TargetPosition { x, y, label });
        self
    }

    /// Override a target's coordinates and label.
    pub fn target(mut self, target: Target, x: Millimeters, y: Millimeters, label: &str) -> Self {
        match TargetPosition::new(x, y, label) {
            Some(position) => self.config.targets.set(target, position),
            None => self.label_error = Some(target),
        }
        self
    }

    /// Replace the whole target table.
    pub fn targets(mut self, targets: TargetTable) -> Self {
        self.config.targets = targets;
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a label was too long or validation fails.
    pub fn build(self) -> Result<TrammingConfig> {
        if let Some(target) = self.label_error {
            return Err(Error::Config(ConfigError::LabelTooLong(target)));
        }

        validate_config(&self.config)?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = TrammingConfigBuilder::new().build().unwrap();
        assert_eq!(config, TrammingConfig::default());
        assert_eq!(config.samples, 6);
        assert_eq!(config.screw_pitch.value(), 0.8);
        assert_eq!(config.lift_height.value(), 20.0);
        assert_eq!(config.probe_speed.value(), 6000.0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = TrammingConfig::builder()
            .screw_pitch(Millimeters(0.7))
            .samples(3)
            .target_xy(Target::Center, Millimeters(150.0), Millimeters(150.0))
            .target(Target::FrontLeft, Millimeters(30.0), Millimeters(30.0), "FL corner")
            .build()
            .unwrap();

        assert_eq!(config.samples, 3);
        assert_eq!(config.target(Target::Center).x.value(), 150.0);
        assert_eq!(config.target(Target::Center).label.as_str(), "Center");
        assert_eq!(config.target(Target::FrontLeft).label.as_str(), "FL corner");
    }

    #[test]
    fn test_builder_rejects_long_label() {
        let result = TrammingConfig::builder()
            .target(
                Target::BackRight,
                Millimeters(1.0),
                Millimeters(1.0),
                "this label is far too long to fit in the buffer",
            )
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::LabelTooLong(Target::BackRight)))
        ));
    }

    #[test]
    fn test_builder_validates() {
        let result = TrammingConfig::builder().samples(0).build();
        assert!(result.is_err());
    }
}
