//! Named probe targets and their bed coordinates.

use heapless::String;
use serde::Deserialize;

use super::units::Millimeters;

/// One of the seven named probe locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Target {
    /// Bed center, the height reference.
    Center,
    /// Front-left leveling screw.
    FrontLeft,
    /// Front-right leveling screw.
    FrontRight,
    /// Left-middle leveling screw.
    LeftMiddle,
    /// Right-middle leveling screw.
    RightMiddle,
    /// Back-left leveling screw.
    BackLeft,
    /// Back-right leveling screw.
    BackRight,
}

impl Target {
    /// All targets, center first.
    pub const ALL: [Target; 7] = [
        Target::Center,
        Target::FrontLeft,
        Target::FrontRight,
        Target::LeftMiddle,
        Target::RightMiddle,
        Target::BackLeft,
        Target::BackRight,
    ];

    /// Screw targets in the order a full sweep visits them.
    pub const SCREWS: [Target; 6] = [
        Target::FrontLeft,
        Target::FrontRight,
        Target::LeftMiddle,
        Target::RightMiddle,
        Target::BackLeft,
        Target::BackRight,
    ];

    /// Configuration key (`[targets.<key>]`).
    pub const fn key(self) -> &'static str {
        match self {
            Target::Center => "center",
            Target::FrontLeft => "front_left",
            Target::FrontRight => "front_right",
            Target::LeftMiddle => "left_middle",
            Target::RightMiddle => "right_middle",
            Target::BackLeft => "back_left",
            Target::BackRight => "back_right",
        }
    }

    /// Look up a target by configuration key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }

    /// Whether this target is a leveling screw (everything but center).
    #[inline]
    pub const fn is_screw(self) -> bool {
        !matches!(self, Target::Center)
    }

    /// Default label shown in operator messages.
    pub const fn default_label(self) -> &'static str {
        match self {
            Target::Center => "Center",
            Target::FrontLeft => "Front Left",
            Target::FrontRight => "Front Right",
            Target::LeftMiddle => "Left Middle",
            Target::RightMiddle => "Right Middle",
            Target::BackLeft => "Back Left",
            Target::BackRight => "Back Right",
        }
    }

    /// Default nozzle coordinates (Elegoo Neptune 4 Max bed).
    pub const fn default_xy(self) -> (f64, f64) {
        match self {
            Target::Center => (230.0, 210.0),
            Target::FrontLeft => (45.0, 10.0),
            Target::FrontRight => (419.0, 10.0),
            Target::LeftMiddle => (45.0, 210.0),
            Target::RightMiddle => (419.0, 210.0),
            Target::BackLeft => (45.0, 400.0),
            Target::BackRight => (419.0, 400.0),
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// A physical location to probe, in nozzle coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPosition {
    /// X coordinate.
    pub x: Millimeters,
    /// Y coordinate.
    pub y: Millimeters,
    /// Label used in operator messages (max 32 chars).
    pub label: String<32>,
}

impl TargetPosition {
    /// Create a target position.
    ///
    /// Returns `None` if the label exceeds 32 characters.
    pub fn new(x: Millimeters, y: Millimeters, label: &str) -> Option<Self> {
        Some(Self {
            x,
            y,
            label: String::try_from(label).ok()?,
        })
    }

    /// Default position for a target.
    pub fn default_for(target: Target) -> Self {
        let (x, y) = target.default_xy();
        let mut label = String::new();
        // Default labels are all well under 32 bytes.
        let _ = label.push_str(target.default_label());
        Self {
            x: Millimeters(x),
            y: Millimeters(y),
            label,
        }
    }
}

/// Coordinates for all seven targets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawTargetTable")]
pub struct TargetTable {
    positions: [TargetPosition; 7],
}

impl TargetTable {
    /// Get the position for a target.
    #[inline]
    pub fn get(&self, target: Target) -> &TargetPosition {
        &self.positions[target.index()]
    }

    /// Replace the position for a target.
    pub fn set(&mut self, target: Target, position: TargetPosition) {
        self.positions[target.index()] = position;
    }

    /// Iterate over all targets and their positions, center first.
    pub fn iter(&self) -> impl Iterator<Item = (Target, &TargetPosition)> {
        Target::ALL.iter().copied().zip(self.positions.iter())
    }
}

impl Default for TargetTable {
    fn default() -> Self {
        Self {
            positions: Target::ALL.map(TargetPosition::default_for),
        }
    }
}

/// Per-target override as written in TOML; a missing `name` keeps the default label.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTarget {
    x: Millimeters,
    y: Millimeters,
    #[serde(default)]
    name: Option<String<32>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTargetTable {
    center: Option<RawTarget>,
    front_left: Option<RawTarget>,
    front_right: Option<RawTarget>,
    left_middle: Option<RawTarget>,
    right_middle: Option<RawTarget>,
    back_left: Option<RawTarget>,
    back_right: Option<RawTarget>,
}

impl From<RawTargetTable> for TargetTable {
    fn from(raw: RawTargetTable) -> Self {
        let overrides = [
            raw.center,
            raw.front_left,
            raw.front_right,
            raw.left_middle,
            raw.right_middle,
            raw.back_left,
            raw.back_right,
        ];

        let mut table = TargetTable::default();
        for (target, entry) in Target::ALL.iter().copied().zip(overrides) {
            if let Some(entry) = entry {
                let label = entry
                    .name
                    .unwrap_or_else(|| table.get(target).label.clone());
                table.set(
                    target,
                    TargetPosition {
                        x: entry.x,
                        y: entry.y,
                        label,
                    },
                );
            }
        }
        table
    }
}
