use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Padding and overrides applied when an axis range is derived from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRangeOptions {
    #[serde(default)]
    pub custom_min: Option<f64>,
    #[serde(default)]
    pub custom_max: Option<f64>,
    /// Absolute space subtracted below the data minimum.
    #[serde(default)]
    pub space_min: f64,
    /// Absolute space added above the data maximum.
    #[serde(default)]
    pub space_max: f64,
    /// Space below the data as a percentage of the data range.
    #[serde(default)]
    pub space_bottom_percent: f64,
    /// Space above the data as a percentage of the data range.
    #[serde(default)]
    pub space_top_percent: f64,
}

impl Default for AxisRangeOptions {
    fn default() -> Self {
        Self {
            custom_min: None,
            custom_max: None,
            space_min: 0.0,
            space_max: 0.0,
            space_bottom_percent: 0.0,
            space_top_percent: 0.0,
        }
    }
}

impl AxisRangeOptions {
    /// Value-axis defaults: 10% headroom above and below the data.
    #[must_use]
    pub fn value_axis() -> Self {
        Self {
            space_bottom_percent: 10.0,
            space_top_percent: 10.0,
            ..Self::default()
        }
    }
}

/// Final minimum/maximum of one axis after padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub minimum: f64,
    pub maximum: f64,
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
        }
    }
}

impl AxisRange {
    /// Derives the axis range from data extents.
    ///
    /// A custom bound replaces the data-derived base on its side and is never
    /// padded. A flat base is widened by one unit on each side, then the
    /// percentage padding is measured from the base range and applied to the
    /// sides without a custom bound.
    #[must_use]
    pub fn calculate(data_min: f64, data_max: f64, options: AxisRangeOptions) -> Self {
        let (data_min, data_max) = ordered(finite_or_zero(data_min), finite_or_zero(data_max));
        let custom_min = options.custom_min.filter(|value| value.is_finite());
        let custom_max = options.custom_max.filter(|value| value.is_finite());

        let mut min = custom_min.unwrap_or(data_min - non_negative(options.space_min));
        let mut max = custom_max.unwrap_or(data_max + non_negative(options.space_max));
        if max - min == 0.0 {
            max += 1.0;
            min -= 1.0;
        }

        let range = (max - min).abs();
        let minimum = custom_min
            .unwrap_or_else(|| min - range / 100.0 * non_negative(options.space_bottom_percent));
        let maximum = custom_max
            .unwrap_or_else(|| max + range / 100.0 * non_negative(options.space_top_percent));
        let (minimum, maximum) = ordered(minimum, maximum);

        Self { minimum, maximum }
    }

    #[must_use]
    pub fn range(self) -> f64 {
        (self.maximum - self.minimum).abs()
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.minimum && value <= self.maximum
    }
}

/// Min/max of both coordinates across a data set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataExtents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataExtents {
    pub fn from_points(points: &[DataPoint]) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::InvalidData(
                "extents cannot be computed from empty data".to_owned(),
            ));
        }

        let mut extents = Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for point in points {
            if !point.is_finite() {
                return Err(ChartError::InvalidData(
                    "data values must be finite".to_owned(),
                ));
            }
            extents.x_min = extents.x_min.min(point.x);
            extents.x_max = extents.x_max.max(point.x);
            extents.y_min = extents.y_min.min(point.y);
            extents.y_max = extents.y_max.max(point.y);
        }
        Ok(extents)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
