use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// One chart entry in data-value space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal(x: Decimal, y: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: decimal_to_f64(x, "x")?,
            y: decimal_to_f64(y, "y")?,
        })
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A 2D coordinate. Holds either data values or pixels depending on which
/// side of a transform it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<DataPoint> for Point {
    fn from(value: DataPoint) -> Self {
        Self::new(value.x, value.y)
    }
}

/// Axis-aligned rectangle in pixel space.
///
/// Edges are stored as absolute coordinates with a top-left origin, so
/// `bottom >= top` for any well-formed rect.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ContentRect {
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
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width clamped to zero for inverted or non-finite rects.
    #[must_use]
    pub fn width(self) -> f64 {
        non_negative_extent(self.right - self.left)
    }

    /// Height clamped to zero for inverted or non-finite rects.
    #[must_use]
    pub fn height(self) -> f64 {
        non_negative_extent(self.bottom - self.top)
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

fn non_negative_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}
