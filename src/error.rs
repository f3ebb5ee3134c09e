//! Error types for bed-tramming library.
//!
//! Separates workflow mistakes (probing a screw before the center reference
//! exists) from hardware failures raised by the toolhead or probe, so callers
//! can tell "fix your workflow" from "fix your hardware" without string
//! inspection.

use core::fmt;

use crate::config::Target;
use crate::console::format_truncated;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all bed-tramming operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Operation invoked in the wrong session state
    Precondition(PreconditionError),
    /// Toolhead or probe failure during a sampling sequence
    Hardware(HardwareError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Sample count outside `1..=MAX_SAMPLES`
    InvalidSampleCount(u8),
    /// Screw thread pitch must be > 0
    InvalidScrewPitch(f64),
    /// Post-probe lift height must be > 0
    InvalidLiftHeight(f64),
    /// Travel feed rate must be > 0
    InvalidProbeSpeed(f64),
    /// Target coordinate is not a finite number
    InvalidTarget {
        /// Offending target
        target: Target,
        /// Configured X coordinate
        x: f64,
        /// Configured Y coordinate
        y: f64,
    },
    /// Target label does not fit the label buffer
    LabelTooLong(Target),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Session state errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    /// A screw operation ran before the center reference was recorded
    ReferenceNotSet,
}

/// Hardware errors surfaced by the sampler.
#[derive(Debug, Clone, PartialEq)]
pub enum HardwareError {
    /// A toolhead or probe call failed; carries `"Probe failed: <cause>"`
    ProbeFailed(heapless::String<128>),
}

impl Error {
    /// Whether this error means the operator ran commands out of order.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition(_))
    }

    /// Whether this error came from the toolhead or probe.
    pub fn is_hardware(&self) -> bool {
        matches!(self, Error::Hardware(_))
    }
}

impl HardwareError {
    /// Wrap a collaborator failure with the sampler's context prefix.
    pub fn probe_failed(cause: &dyn fmt::Display) -> Self {
        // Overlong causes are truncated at the buffer boundary.
        HardwareError::ProbeFailed(format_truncated(format_args!("Probe failed: {}", cause)))
    }

    /// Human-readable failure text.
    pub fn message(&self) -> &str {
        match self {
            HardwareError::ProbeFailed(msg) => msg.as_str(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Precondition(e) => write!(f, "{}", e),
            Error::Hardware(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSampleCount(v) => {
                write!(
                    f,
                    "Invalid sample count: {}. Must be 1-{}",
                    v,
                    crate::probe::MAX_SAMPLES
                )
            }
            ConfigError::InvalidScrewPitch(v) => write!(f, "Invalid screw pitch: {}. Must be > 0", v),
            ConfigError::InvalidLiftHeight(v) => write!(f, "Invalid lift height: {}. Must be > 0", v),
            ConfigError::InvalidProbeSpeed(v) => write!(f, "Invalid probe speed: {}. Must be > 0", v),
            ConfigError::InvalidTarget { target, x, y } => {
                write!(f, "Invalid coordinates for '{}': X{} Y{}", target.key(), x, y)
            }
            ConfigError::LabelTooLong(target) => {
                write!(f, "Label for '{}' exceeds 32 characters", target.key())
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreconditionError::ReferenceNotSet => {
                write!(f, "Center reference not set. Run PROBE_CENTER first.")
            }
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PreconditionError> for Error {
    fn from(e: PreconditionError) -> Self {
        Error::Precondition(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PreconditionError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}
