//! Value ↔ pixel mapping.
//!
//! Every mapping goes through the same three transforms, always in this
//! order:
//!
//! 1. `value_scale`: data values to an unclamped pixel line,
//! 2. the committed zoom/pan transform owned by [`ViewportModel`],
//! 3. `offset`: translation to the content rect origin (and axis mirroring).
//!
//! Pixel to value mapping applies the inverses in reverse order.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::affine::AffineTransform;
use crate::core::primitives::safe_scale;
use crate::core::types::{ContentRect, DataPoint, Point};
use crate::core::viewport::ViewportModel;
use crate::core::windowing::VisibleIndexBounds;

/// Direction in which data-x advances on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartOrientation {
    /// Data-x runs left to right, data-y bottom to top.
    #[default]
    Vertical,
    /// Data-x runs bottom to top, data-y left to right (horizontal bars).
    Horizontal,
}

/// Data extents used to build the value scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ValueBounds {
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateTransformer {
    value_scale: AffineTransform,
    offset: AffineTransform,
    orientation: ChartOrientation,
    inverted: bool,
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        Self::new(ChartOrientation::Vertical)
    }
}

impl CoordinateTransformer {
    #[must_use]
    pub fn new(orientation: ChartOrientation) -> Self {
        Self {
            value_scale: AffineTransform::IDENTITY,
            offset: AffineTransform::IDENTITY,
            orientation,
            inverted: false,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> ChartOrientation {
        self.orientation
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Recomputes the value scale for the given data extents and content
    /// rect, then the offset for the given inversion flag.
    ///
    /// A zero or non-finite data range maps with a unit scale instead of
    /// dividing by zero; single-point and flat series hit this path.
    pub fn rebuild_value_scale(
        &mut self,
        bounds: ValueBounds,
        content_rect: ContentRect,
        invert_value_axis: bool,
    ) {
        let x_min = finite_or_zero(bounds.x_min);
        let y_min = finite_or_zero(bounds.y_min);
        let x_range = bounds.x_max - bounds.x_min;
        let y_range = bounds.y_max - bounds.y_min;

        self.value_scale = match self.orientation {
            ChartOrientation::Vertical => {
                let scale_x = safe_scale(content_rect.width(), x_range);
                let scale_y = safe_scale(content_rect.height(), y_range);
                AffineTransform::translation(-x_min, -y_min).post_scale(scale_x, -scale_y)
            }
            ChartOrientation::Horizontal => {
                let scale_x = safe_scale(content_rect.width(), y_range);
                let scale_y = safe_scale(content_rect.height(), x_range);
                axis_swap()
                    .post_translate(-y_min, -x_min)
                    .post_scale(scale_x, -scale_y)
            }
        };
        self.rebuild_offset(content_rect, invert_value_axis);
    }

    /// Recomputes the screen offset. With `invert_value_axis` the value axis
    /// grows away from the top edge (vertical) or the right edge (horizontal).
    pub fn rebuild_offset(&mut self, content_rect: ContentRect, invert_value_axis: bool) {
        self.inverted = invert_value_axis;
        self.offset = match (self.orientation, invert_value_axis) {
            (_, false) => AffineTransform::translation(content_rect.left, content_rect.bottom),
            (ChartOrientation::Vertical, true) => {
                AffineTransform::translation(content_rect.left, -content_rect.top)
                    .post_scale(1.0, -1.0)
            }
            (ChartOrientation::Horizontal, true) => {
                AffineTransform::translation(-content_rect.right, content_rect.bottom)
                    .post_scale(-1.0, 1.0)
            }
        };
    }

    #[must_use]
    pub fn value_matrix(&self) -> AffineTransform {
        self.value_scale
    }

    #[must_use]
    pub fn offset_matrix(&self) -> AffineTransform {
        self.offset
    }

    /// Full value → pixel chain for the viewport's committed zoom/pan.
    #[must_use]
    pub fn value_to_pixel_matrix(&self, viewport: &ViewportModel) -> AffineTransform {
        self.value_scale
            .then(viewport.zoom_pan())
            .then(self.offset)
    }

    /// Full pixel → value chain, or `None` when any stage is singular.
    #[must_use]
    pub fn pixel_to_value_matrix(&self, viewport: &ViewportModel) -> Option<AffineTransform> {
        let offset_inverse = self.offset.invert()?;
        let zoom_pan_inverse = viewport.zoom_pan().invert()?;
        let value_inverse = self.value_scale.invert()?;
        Some(offset_inverse.then(zoom_pan_inverse).then(value_inverse))
    }

    /// Maps a screen pixel into the content space the zoom/pan transform
    /// operates in. Gesture pivots go through here before reaching
    /// [`ViewportModel::zoom_by`].
    #[must_use]
    pub fn screen_to_content(&self, pixel: Point) -> Point {
        self.offset
            .invert()
            .map_or(pixel, |inverse| inverse.map_point(pixel))
    }

    /// Maps a screen-space drag delta into content space. Inverted axes flip
    /// the sign of the affected component.
    #[must_use]
    pub fn screen_delta_to_content(&self, dx: f64, dy: f64) -> Point {
        let origin = self.screen_to_content(Point::new(0.0, 0.0));
        let moved = self.screen_to_content(Point::new(dx, dy));
        Point::new(moved.x - origin.x, moved.y - origin.y)
    }

    /// Maps data values to pixels in place. Order and length are preserved.
    pub fn values_to_pixels(&self, points: &mut [Point], viewport: &ViewportModel) {
        self.value_to_pixel_matrix(viewport).map_points(points);
    }

    /// Maps pixels to data values in place. A singular stage leaves the
    /// buffer untouched.
    pub fn pixels_to_values(&self, points: &mut [Point], viewport: &ViewportModel) {
        if let Some(inverse) = self.pixel_to_value_matrix(viewport) {
            inverse.map_points(points);
        }
    }

    #[must_use]
    pub fn value_to_pixel(&self, x: f64, y: f64, viewport: &ViewportModel) -> Point {
        self.value_to_pixel_matrix(viewport)
            .map_point(Point::new(x, y))
    }

    #[must_use]
    pub fn pixel_to_value(&self, x: f64, y: f64, viewport: &ViewportModel) -> Point {
        let pixel = Point::new(x, y);
        self.pixel_to_value_matrix(viewport)
            .map_or(pixel, |inverse| inverse.map_point(pixel))
    }

    /// Data-x values found at the two edges of `content_rect` along the
    /// data-x direction, returned as `(min, max)`.
    #[must_use]
    pub fn compute_visible_value_bounds(
        &self,
        content_rect: ContentRect,
        viewport: &ViewportModel,
    ) -> (f64, f64) {
        let mut edges = match self.orientation {
            ChartOrientation::Vertical => [
                Point::new(content_rect.left, content_rect.bottom),
                Point::new(content_rect.right, content_rect.bottom),
            ],
            ChartOrientation::Horizontal => [
                Point::new(content_rect.left, content_rect.bottom),
                Point::new(content_rect.left, content_rect.top),
            ],
        };
        self.pixels_to_values(&mut edges, viewport);

        let (first, second) = (edges[0].x, edges[1].x);
        if first <= second {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Lowest data-x visible in the viewport, never below `axis_min`.
    #[must_use]
    pub fn lowest_visible_x(&self, viewport: &ViewportModel, axis_min: f64) -> f64 {
        let (low, _) = self.compute_visible_value_bounds(viewport.content_rect(), viewport);
        low.max(axis_min)
    }

    /// Highest data-x visible in the viewport, never above `axis_max`.
    #[must_use]
    pub fn highest_visible_x(&self, viewport: &ViewportModel, axis_max: f64) -> f64 {
        let (_, high) = self.compute_visible_value_bounds(viewport.content_rect(), viewport);
        high.min(axis_max)
    }

    /// Projects every point to pixels.
    #[must_use]
    pub fn project_points(&self, points: &[DataPoint], viewport: &ViewportModel) -> Vec<Point> {
        let matrix = self.value_to_pixel_matrix(viewport);

        // Each point is independent, so large series can be split across threads
        // without changing the output order.
        #[cfg(feature = "parallel-projection")]
        {
            points
                .par_iter()
                .map(|point| matrix.map_point(Point::from(*point)))
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            points
                .iter()
                .map(|point| matrix.map_point(Point::from(*point)))
                .collect()
        }
    }

    /// Projects the entries selected by `bounds`, scaling y by `phase_y`.
    #[must_use]
    pub fn project_visible(
        &self,
        points: &[DataPoint],
        bounds: VisibleIndexBounds,
        phase_y: f64,
        viewport: &ViewportModel,
    ) -> Vec<Point> {
        let phase_y = if phase_y.is_finite() { phase_y } else { 1.0 };
        let Some(window) = bounds.slice(points) else {
            return Vec::new();
        };

        let matrix = self.value_to_pixel_matrix(viewport);
        window
            .iter()
            .map(|point| matrix.map_point(Point::new(point.x, point.y * phase_y)))
            .collect()
    }

    /// Maps a rect given in data values (e.g. a bar body) to pixels.
    #[must_use]
    pub fn value_rect_to_pixels(&self, rect: ContentRect, viewport: &ViewportModel) -> ContentRect {
        self.value_to_pixel_matrix(viewport).map_rect(rect)
    }
}

/// Swaps x and y so horizontal charts can reuse the vertical value scale.
fn axis_swap() -> AffineTransform {
    AffineTransform::from_coefficients([0.0, 1.0, 0.0, 1.0, 0.0, 0.0])
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
