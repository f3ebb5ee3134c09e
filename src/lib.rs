//! # bed-tramming
//!
//! Center-reference bed tramming for 3D printers.
//!
//! ## Features
//!
//! - **Center reference**: Probe the bed center once, compare every screw to it
//! - **Median filtering**: Repeated touches per point reduce probe misfires
//! - **Turn recommendations**: Height deltas converted to screw turns via thread pitch
//! - **Safe motion**: Z clearance before travel, between touches, and after each point
//! - **no_std compatible**: Core library works without standard library
//! - **Configuration-driven**: Pitch, samples, speeds and targets from TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bed_tramming::{Command, Machine, TrammingSession};
//!
//! // Load configuration from TOML
//! let config = bed_tramming::load_config("bed_tramming.toml")?;
//!
//! // Pair host toolhead and probe, hand over the console
//! let machine = Machine::new(toolhead, probe);
//! let mut session = TrammingSession::new(config, machine, console)?;
//!
//! session.run(Command::ProbeCenter)?;
//! session.run(Command::ProbeAllScrews)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(any(feature = "std", feature = "alloc"))]
extern crate alloc;

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod adjust;
pub mod config;
pub mod console;
pub mod error;
pub mod motion;
pub mod probe;
pub mod session;

// Re-exports for ergonomic API
pub use adjust::{evaluate, Adjustment, TurnDirection};
pub use config::{validate_config, Target, TargetPosition, TrammingConfig};
pub use console::Console;
pub use error::{Error, Result};
pub use motion::{Axis, GcodeToolhead, Machine, Toolhead, ToolheadPosition};
pub use probe::{Probe, Sampler};
pub use session::{Command, Outcome, Reference, TrammingSession};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{FeedRate, Millimeters};
