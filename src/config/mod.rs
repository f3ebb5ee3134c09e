//! Configuration module for bed-tramming.
//!
//! Provides the tramming parameters and target table, loaded from TOML
//! files (with `std` feature) or built in code.

mod builder;
mod system;
mod targets;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use builder::TrammingConfigBuilder;
pub use system::TrammingConfig;
pub use targets::{Target, TargetPosition, TargetTable};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{FeedRate, Millimeters};
