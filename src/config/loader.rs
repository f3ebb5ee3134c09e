//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::console::format_truncated;
use crate::error::{ConfigError, Error, Result};

use super::TrammingConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use bed_tramming::load_config;
///
/// let config = load_config("bed_tramming.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrammingConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::Config(ConfigError::IoError(format_truncated(format_args!("{}", e))))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<TrammingConfig> {
    let config: TrammingConfig = toml::from_str(content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format_truncated(format_args!("{}", e.message()))))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}
