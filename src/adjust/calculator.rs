//! Screw adjustment calculation and reporting.

use heapless::String;

use crate::config::units::Millimeters;
use crate::console::{format_truncated, respond, Console};

/// Height differences below this are reported as level.
pub const TOLERANCE: Millimeters = Millimeters(0.01);

/// Steps per millimeter of the reported height resolution (`{:.4}`).
const RESOLUTION_STEPS: f64 = 1.0e4;

/// Which way to turn a leveling screw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TurnDirection {
    /// Within tolerance; leave the screw alone.
    None,
    /// Counter-clockwise: the bed is low here, raise it.
    Loosen,
    /// Clockwise: the bed is high here, lower it.
    Tighten,
}

impl TurnDirection {
    /// Classify a height delta (`measured - reference`).
    ///
    /// A positive delta means the probe triggered higher in Z than at the
    /// center, which on this motion system means the bed sits lower there.
    ///
    /// The delta is rounded to the reported resolution first, so a
    /// difference shown as `0.0100mm` is never classified as level.
    pub fn from_delta(delta: Millimeters) -> Self {
        let delta = quantize(delta);
        if libm::fabs(delta) < TOLERANCE.0 {
            TurnDirection::None
        } else if delta > 0.0 {
            TurnDirection::Loosen
        } else {
            TurnDirection::Tighten
        }
    }

    /// Rotation sense as shown to the operator.
    pub const fn rotation(self) -> Option<&'static str> {
        match self {
            TurnDirection::None => None,
            TurnDirection::Loosen => Some("CCW"),
            TurnDirection::Tighten => Some("CW"),
        }
    }
}

/// Round to the nearest 0.1 µm step.
fn quantize(delta: Millimeters) -> f64 {
    libm::round(delta.0 * RESOLUTION_STEPS) / RESOLUTION_STEPS
}

/// Result of comparing one screw location against the center reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    /// Target label.
    pub label: String<32>,
    /// Median height measured at the screw.
    pub measured: Millimeters,
    /// Center reference height.
    pub reference: Millimeters,
    /// `measured - reference`.
    pub delta: Millimeters,
    /// Recommended turn direction.
    pub direction: TurnDirection,
    /// Magnitude in full screw turns, `|delta| / pitch`.
    pub turns: f64,
}

/// Compare a measured height to the reference.
///
/// `pitch` is the screw thread pitch and must be positive; configuration
/// validation guarantees this for session-driven calls.
pub fn evaluate(label: &str, measured: Millimeters, reference: Millimeters, pitch: Millimeters) -> Adjustment {
    let delta = measured - reference;
    let turns = delta.abs().0 / pitch.0;

    Adjustment {
        label: format_truncated(format_args!("{}", label)),
        measured,
        reference,
        delta,
        direction: TurnDirection::from_delta(delta),
        turns,
    }
}

impl Adjustment {
    /// Whether the screw is within tolerance.
    #[inline]
    pub fn is_level(&self) -> bool {
        self.direction == TurnDirection::None
    }

    /// Write the measurement line and the recommendation line to `console`.
    pub fn report<C: Console>(&self, console: &mut C) {
        let name = self.label.as_str();
        respond(
            console,
            format_args!(
                "{} Z={:.4} (Center: {:.4}, diff: {:.4}mm)",
                name, self.measured.0, self.reference.0, self.delta.0
            ),
        );

        match self.direction {
            TurnDirection::None => {
                respond(console, format_args!("{}: Perfect! No adjustment needed", name));
            }
            TurnDirection::Loosen => {
                respond(
                    console,
                    format_args!(
                        "{}: LOOSEN (CCW) {:.2} turns ({:.3}mm low - raise bed)",
                        name, self.turns, self.delta.0
                    ),
                );
            }
            TurnDirection::Tighten => {
                respond(
                    console,
                    format_args!(
                        "{}: TIGHTEN (CW) {:.2} turns ({:.3}mm high - lower bed)",
                        name,
                        self.turns,
                        self.delta.abs().0
                    ),
                );
            }
        }
    }
}
