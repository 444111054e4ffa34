use serde::{Deserialize, Serialize};

use crate::core::{ChartOrientation, ViewportLimits};
use crate::error::{ChartError, ChartResult};

use super::AxisConfig;

/// Space between the chart surface edges and the content rect, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOffsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartOffsets {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub(super) fn sanitized(self) -> Self {
        Self {
            left: non_negative(self.left),
            top: non_negative(self.top),
            right: non_negative(self.right),
            bottom: non_negative(self.bottom),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub chart_width: f64,
    pub chart_height: f64,
    #[serde(default)]
    pub offsets: ChartOffsets,
    #[serde(default)]
    pub orientation: ChartOrientation,
    #[serde(default)]
    pub viewport_limits: ViewportLimits,
    #[serde(default)]
    pub x_axis: AxisConfig,
    #[serde(default = "AxisConfig::value_axis")]
    pub y_axis: AxisConfig,
}

impl ChartEngineConfig {
    /// Creates a config for a chart surface with no offsets and default axes.
    #[must_use]
    pub fn new(chart_width: f64, chart_height: f64) -> Self {
        Self {
            chart_width,
            chart_height,
            offsets: ChartOffsets::default(),
            orientation: ChartOrientation::default(),
            viewport_limits: ViewportLimits::default(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::value_axis(),
        }
    }

    #[must_use]
    pub fn with_offsets(mut self, offsets: ChartOffsets) -> Self {
        self.offsets = offsets;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: ChartOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_viewport_limits(mut self, limits: ViewportLimits) -> Self {
        self.viewport_limits = limits;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisConfig) -> Self {
        self.x_axis = axis;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisConfig) -> Self {
        self.y_axis = axis;
        self
    }

    /// Rejects unusable chart dimensions and clamps everything else.
    pub fn validate(self) -> ChartResult<Self> {
        if !self.chart_width.is_finite()
            || !self.chart_height.is_finite()
            || self.chart_width < 0.0
            || self.chart_height < 0.0
        {
            return Err(ChartError::InvalidDimensions {
                width: self.chart_width,
                height: self.chart_height,
            });
        }

        Ok(Self {
            offsets: self.offsets.sanitized(),
            viewport_limits: self.viewport_limits.sanitized(),
            x_axis: self.x_axis.sanitized(),
            y_axis: self.y_axis.sanitized(),
            ..self
        })
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
