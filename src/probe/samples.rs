//! Sample collection and median reduction.

use crate::config::units::Millimeters;

/// Maximum number of probe touches per target.
pub const MAX_SAMPLES: usize = 32;

/// Heights collected at one target during one sampling operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    heights: heapless::Vec<f64, MAX_SAMPLES>,
}

impl SampleSet {
    /// Create an empty sample set.
    pub const fn new() -> Self {
        Self {
            heights: heapless::Vec::new(),
        }
    }

    /// Append one height.
    ///
    /// Returns the height back if the set is already full.
    pub fn push(&mut self, height: Millimeters) -> Result<(), Millimeters> {
        self.heights.push(height.0).map_err(Millimeters)
    }

    /// Number of collected heights.
    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Whether no heights have been collected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Median of the collected heights, or `None` if empty.
    ///
    /// Sorts ascending; an odd count yields the middle value, an even count
    /// the mean of the two middle values.
    pub fn median(&self) -> Option<Millimeters> {
        median(&self.heights).map(Millimeters)
    }
}

impl FromIterator<f64> for SampleSet {
    /// Collects at most [`MAX_SAMPLES`] heights; extras are dropped.
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            heights: iter.into_iter().take(MAX_SAMPLES).collect(),
        }
    }
}

/// Median of at most [`MAX_SAMPLES`] values.
///
/// Returns `None` for an empty slice. Values beyond `MAX_SAMPLES` are ignored.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted: heapless::Vec<f64, MAX_SAMPLES> = values.iter().copied().take(MAX_SAMPLES).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_unstable_by(f64::total_cmp);

    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
