//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::probe::MAX_SAMPLES;

use super::TrammingConfig;

/// Validate a tramming configuration.
///
/// Checks:
/// - Sample count is in `1..=MAX_SAMPLES`
/// - Screw pitch, lift height and travel speed are positive
/// - Every target coordinate is finite
pub fn validate_config(config: &TrammingConfig) -> Result<()> {
    if config.samples == 0 || usize::from(config.samples) > MAX_SAMPLES {
        return Err(Error::Config(ConfigError::InvalidSampleCount(config.samples)));
    }

    if !is_positive(config.screw_pitch.0) {
        return Err(Error::Config(ConfigError::InvalidScrewPitch(config.screw_pitch.0)));
    }

    if !is_positive(config.lift_height.0) {
        return Err(Error::Config(ConfigError::InvalidLiftHeight(config.lift_height.0)));
    }

    if !is_positive(config.probe_speed.0) {
        return Err(Error::Config(ConfigError::InvalidProbeSpeed(config.probe_speed.0)));
    }

    for (target, position) in config.targets.iter() {
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(Error::Config(ConfigError::InvalidTarget {
                target,
                x: position.x.0,
                y: position.y.0,
            }));
        }
    }

    Ok(())
}

/// Finite and strictly greater than zero (NaN fails both).
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{FeedRate, Millimeters};
    use crate::config::{Target, TargetPosition};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TrammingConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_samples_rejected() {
        let config = TrammingConfig {
            samples: 0,
            ..TrammingConfig::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidSampleCount(0)))
        ));
    }

    #[test]
    fn test_too_many_samples_rejected() {
        let config = TrammingConfig {
            samples: MAX_SAMPLES as u8 + 1,
            ..TrammingConfig::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidSampleCount(_)))
        ));
    }

    #[test]
    fn test_nonpositive_pitch_rejected() {
        for pitch in [0.0, -0.8, f64::NAN] {
            let config = TrammingConfig {
                screw_pitch: Millimeters(pitch),
                ..TrammingConfig::default()
            };
            assert!(matches!(
                validate_config(&config),
                Err(Error::Config(ConfigError::InvalidScrewPitch(_)))
            ));
        }
    }

    #[test]
    fn test_nonpositive_speed_rejected() {
        let config = TrammingConfig {
            probe_speed: FeedRate(0.0),
            ..TrammingConfig::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidProbeSpeed(_)))
        ));
    }

    #[test]
    fn test_non_finite_target_rejected() {
        let mut config = TrammingConfig::default();
        config.targets.set(
            Target::BackLeft,
            TargetPosition::new(Millimeters(f64::INFINITY), Millimeters(400.0), "Back Left").unwrap(),
        );
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidTarget {
                target: Target::BackLeft,
                ..
            }))
        ));
    }
}
