use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// How [`entry_index_for_x`] resolves an x value that falls between entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rounding {
    /// Closest entry at or above the value (last entry if none).
    Up,
    /// Closest entry at or below the value (first entry if none).
    Down,
    /// Closest entry in either direction; ties go to the lower index.
    Closest,
}

/// Index of the entry matching `x` in an x-sorted slice.
#[must_use]
pub fn entry_index_for_x(points: &[DataPoint], x: f64, rounding: Rounding) -> Option<usize> {
    if points.is_empty() || x.is_nan() {
        return None;
    }

    let last = points.len() - 1;
    let first_not_below = points.partition_point(|point| point.x < x);
    let index = match rounding {
        Rounding::Up => first_not_below.min(last),
        Rounding::Down => {
            let first_above = points.partition_point(|point| point.x <= x);
            first_above.saturating_sub(1)
        }
        Rounding::Closest => {
            let lower = first_not_below.saturating_sub(1);
            let upper = first_not_below.min(last);
            [lower, upper]
                .into_iter()
                .min_by_key(|&index| (OrderedFloat((points[index].x - x).abs()), index))
                .unwrap_or(lower)
        }
    };
    Some(index)
}

/// Index window of the entries a renderer has to draw.
///
/// `min` is the entry at or just before the lowest visible x, `max` the entry
/// at or just after the highest visible x, so lines leaving the viewport are
/// still drawn up to the edge. `range` is `max - min` scaled by the animation
/// phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibleIndexBounds {
    pub min: usize,
    pub max: usize,
    pub range: usize,
}

impl VisibleIndexBounds {
    #[must_use]
    pub fn resolve(points: &[DataPoint], low_x: f64, high_x: f64, phase_x: f64) -> Self {
        let phase_x = if phase_x.is_finite() {
            phase_x.clamp(0.0, 1.0)
        } else {
            1.0
        };

        let min = entry_index_for_x(points, low_x, Rounding::Down).unwrap_or(0);
        let max = entry_index_for_x(points, high_x, Rounding::Up).unwrap_or(0);
        let range = (max.saturating_sub(min) as f64 * phase_x) as usize;

        Self { min, max, range }
    }

    /// Number of entries the window spans.
    #[must_use]
    pub fn entry_count(self) -> usize {
        self.range + 1
    }

    /// The covered entries, or `None` when the window lies outside `points`.
    #[must_use]
    pub fn slice(self, points: &[DataPoint]) -> Option<&[DataPoint]> {
        if self.min >= points.len() {
            return None;
        }
        let end = self.min.saturating_add(self.range).min(points.len() - 1);
        Some(&points[self.min..=end])
    }
}
