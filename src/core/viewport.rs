use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::affine::AffineTransform;
use crate::core::types::{ContentRect, Point};

/// Scale factor applied by [`ViewportModel::zoom_in`].
pub const ZOOM_IN_STEP: f64 = 1.4;
/// Scale factor applied by [`ViewportModel::zoom_out`].
pub const ZOOM_OUT_STEP: f64 = 0.7;

/// Pixel tolerance used by the `is_in_bounds_*` hit tests.
const BOUNDS_TOLERANCE_PX: f64 = 1.0;

/// Zoom and drag limits consumed by [`ViewportModel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportLimits {
    pub min_scale_x: f64,
    pub min_scale_y: f64,
    pub max_scale_x: f64,
    pub max_scale_y: f64,
    pub drag_offset_x: f64,
    pub drag_offset_y: f64,
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            min_scale_x: 1.0,
            min_scale_y: 1.0,
            max_scale_x: f64::MAX,
            max_scale_y: f64::MAX,
            drag_offset_x: 0.0,
            drag_offset_y: 0.0,
        }
    }
}

impl ViewportLimits {
    /// Returns limits with every field pulled into its legal range.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let min_scale_x = sanitize_min_scale(self.min_scale_x);
        let min_scale_y = sanitize_min_scale(self.min_scale_y);
        Self {
            min_scale_x,
            min_scale_y,
            max_scale_x: sanitize_max_scale(self.max_scale_x, min_scale_x),
            max_scale_y: sanitize_max_scale(self.max_scale_y, min_scale_y),
            drag_offset_x: sanitize_drag_offset(self.drag_offset_x),
            drag_offset_y: sanitize_drag_offset(self.drag_offset_y),
        }
    }
}

/// Visible content area plus the user's committed zoom/pan transform.
///
/// The zoom/pan transform works in content space: before any zoom the content
/// spans `x` in `[0, width]` and `y` in `[-height, 0]`, with the origin at the
/// bottom-left corner of the content rect. Pivots and pan deltas passed to
/// this type are in that space. Use
/// [`crate::core::CoordinateTransformer::screen_to_content`] to convert
/// screen pixels.
///
/// Gesture code never edits the transform directly: it asks for a candidate
/// with [`zoom_by`](Self::zoom_by) or [`pan_by`](Self::pan_by) and hands it to
/// [`commit`](Self::commit), which clamps it to the configured limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportModel {
    content_rect: ContentRect,
    chart_width: f64,
    chart_height: f64,
    zoom_pan: AffineTransform,
    limits: ViewportLimits,
}

impl Default for ViewportModel {
    fn default() -> Self {
        Self {
            content_rect: ContentRect::default(),
            chart_width: 0.0,
            chart_height: 0.0,
            zoom_pan: AffineTransform::IDENTITY,
            limits: ViewportLimits::default(),
        }
    }
}

impl ViewportModel {
    #[must_use]
    pub fn new(content_rect: ContentRect) -> Self {
        Self {
            content_rect,
            chart_width: content_rect.right.max(0.0),
            chart_height: content_rect.bottom.max(0.0),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ViewportLimits) -> Self {
        self.limits = limits.sanitized();
        self.zoom_pan = self.clamp(self.zoom_pan);
        self
    }

    #[must_use]
    pub fn content_rect(&self) -> ContentRect {
        self.content_rect
    }

    #[must_use]
    pub fn zoom_pan(&self) -> AffineTransform {
        self.zoom_pan
    }

    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.chart_width
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.zoom_pan.scale_x()
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.zoom_pan.scale_y()
    }

    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.zoom_pan.translate_x()
    }

    #[must_use]
    pub fn translate_y(&self) -> f64 {
        self.zoom_pan.translate_y()
    }

    /// Replaces the content rectangle. The zoom/pan transform is left alone.
    pub fn set_content_rect(&mut self, rect: ContentRect) {
        self.content_rect = rect;
    }

    /// Stores the full chart surface size and re-derives the content rect
    /// with the offsets currently applied to it.
    pub fn set_chart_dimensions(&mut self, width: f64, height: f64) {
        let offset_left = self.offset_left();
        let offset_top = self.offset_top();
        let offset_right = self.offset_right();
        let offset_bottom = self.offset_bottom();

        self.chart_width = non_negative(width);
        self.chart_height = non_negative(height);
        self.restrain_view_port(offset_left, offset_top, offset_right, offset_bottom);
    }

    /// Shrinks the content rect to the chart surface minus the given offsets.
    pub fn restrain_view_port(
        &mut self,
        offset_left: f64,
        offset_top: f64,
        offset_right: f64,
        offset_bottom: f64,
    ) {
        self.content_rect = ContentRect::new(
            non_negative(offset_left),
            non_negative(offset_top),
            self.chart_width - non_negative(offset_right),
            self.chart_height - non_negative(offset_bottom),
        );
    }

    #[must_use]
    pub fn offset_left(&self) -> f64 {
        self.content_rect.left
    }

    #[must_use]
    pub fn offset_top(&self) -> f64 {
        self.content_rect.top
    }

    #[must_use]
    pub fn offset_right(&self) -> f64 {
        non_negative(self.chart_width - self.content_rect.right)
    }

    #[must_use]
    pub fn offset_bottom(&self) -> f64 {
        non_negative(self.chart_height - self.content_rect.bottom)
    }

    /// Sets the minimum zoom on both axes. Values below 1.0 are raised to 1.0
    /// and the current transform is re-clamped, which may zoom in.
    pub fn set_minimum_scale(&mut self, min_scale_x: f64, min_scale_y: f64) {
        self.limits.min_scale_x = sanitize_min_scale(min_scale_x);
        self.limits.min_scale_y = sanitize_min_scale(min_scale_y);
        self.limits = self.limits.sanitized();
        self.commit(self.zoom_pan);
    }

    /// Sets the maximum zoom on both axes. Non-finite or non-positive values
    /// remove the limit.
    pub fn set_maximum_scale(&mut self, max_scale_x: f64, max_scale_y: f64) {
        self.limits.max_scale_x = max_scale_x;
        self.limits.max_scale_y = max_scale_y;
        self.limits = self.limits.sanitized();
        self.commit(self.zoom_pan);
    }

    pub fn set_zoom_limits_x(&mut self, min_scale: f64, max_scale: f64) {
        self.limits.min_scale_x = min_scale;
        self.limits.max_scale_x = max_scale;
        self.limits = self.limits.sanitized();
        self.commit(self.zoom_pan);
    }

    pub fn set_zoom_limits_y(&mut self, min_scale: f64, max_scale: f64) {
        self.limits.min_scale_y = min_scale;
        self.limits.max_scale_y = max_scale;
        self.limits = self.limits.sanitized();
        self.commit(self.zoom_pan);
    }

    pub fn set_drag_offset_x(&mut self, offset_px: f64) {
        self.limits.drag_offset_x = sanitize_drag_offset(offset_px);
    }

    pub fn set_drag_offset_y(&mut self, offset_px: f64) {
        self.limits.drag_offset_y = sanitize_drag_offset(offset_px);
    }

    #[must_use]
    pub fn has_no_drag_offset(&self) -> bool {
        self.limits.drag_offset_x <= 0.0 && self.limits.drag_offset_y <= 0.0
    }

    /// Candidate transform scaled by `(scale_x, scale_y)` around the pivot.
    #[must_use]
    pub fn zoom_by(
        &self,
        scale_x: f64,
        scale_y: f64,
        pivot_x: f64,
        pivot_y: f64,
    ) -> AffineTransform {
        let scale_x = sanitize_zoom_factor(scale_x);
        let scale_y = sanitize_zoom_factor(scale_y);
        self.zoom_pan
            .post_scale_around(scale_x, scale_y, pivot_x, pivot_y)
    }

    #[must_use]
    pub fn zoom_in(&self, pivot_x: f64, pivot_y: f64) -> AffineTransform {
        self.zoom_by(ZOOM_IN_STEP, ZOOM_IN_STEP, pivot_x, pivot_y)
    }

    #[must_use]
    pub fn zoom_out(&self, pivot_x: f64, pivot_y: f64) -> AffineTransform {
        self.zoom_by(ZOOM_OUT_STEP, ZOOM_OUT_STEP, pivot_x, pivot_y)
    }

    /// Candidate transform whose absolute scale equals `(scale_x, scale_y)`.
    #[must_use]
    pub fn zoom_to(
        &self,
        scale_x: f64,
        scale_y: f64,
        pivot_x: f64,
        pivot_y: f64,
    ) -> AffineTransform {
        let factor_x = sanitize_zoom_factor(scale_x / self.zoom_pan.scale_x());
        let factor_y = sanitize_zoom_factor(scale_y / self.zoom_pan.scale_y());
        self.zoom_by(factor_x, factor_y, pivot_x, pivot_y)
    }

    /// Candidate transform translated by `(dx, dy)` pixels.
    #[must_use]
    pub fn pan_by(&self, dx: f64, dy: f64) -> AffineTransform {
        let dx = if dx.is_finite() { dx } else { 0.0 };
        let dy = if dy.is_finite() { dy } else { 0.0 };
        self.zoom_pan.post_translate(dx, dy)
    }

    /// Center of the content rect in content space.
    #[must_use]
    pub fn content_center(&self) -> Point {
        Point::new(
            self.content_rect.width() / 2.0,
            -self.content_rect.height() / 2.0,
        )
    }

    /// Candidate transform that moves the given content-space point to the
    /// center of the content rect.
    #[must_use]
    pub fn center_view_port(&self, x: f64, y: f64) -> AffineTransform {
        let center = self.content_center();
        self.pan_by(center.x - x, center.y - y)
    }

    /// Clamps the candidate to the current limits without storing it.
    #[must_use]
    pub fn clamp(&self, candidate: AffineTransform) -> AffineTransform {
        let limits = self.limits;
        let scale_x = clamp_scale(candidate.scale_x(), limits.min_scale_x, limits.max_scale_x);
        let scale_y = clamp_scale(candidate.scale_y(), limits.min_scale_y, limits.max_scale_y);

        let width = self.content_rect.width();
        let height = self.content_rect.height();

        let max_trans_x = -width * (scale_x - 1.0);
        let translate_x = finite_or_zero(candidate.translate_x())
            .max(max_trans_x - limits.drag_offset_x)
            .min(limits.drag_offset_x);

        let max_trans_y = height * (scale_y - 1.0);
        let translate_y = finite_or_zero(candidate.translate_y())
            .min(max_trans_y + limits.drag_offset_y)
            .max(-limits.drag_offset_y);

        AffineTransform::from_coefficients([
            scale_x,
            finite_or_zero(candidate.skew_x()),
            translate_x,
            finite_or_zero(candidate.skew_y()),
            scale_y,
            translate_y,
        ])
    }

    /// Clamps and stores the candidate, returning the committed transform.
    ///
    /// Committing an already committed transform is a no-op.
    pub fn commit(&mut self, candidate: AffineTransform) -> AffineTransform {
        let committed = self.clamp(candidate);
        trace!(
            scale_x = committed.scale_x(),
            scale_y = committed.scale_y(),
            translate_x = committed.translate_x(),
            translate_y = committed.translate_y(),
            "commit viewport transform"
        );
        self.zoom_pan = committed;
        committed
    }

    /// Returns to the unzoomed, unpanned state (as far as the minimum scale
    /// allows).
    pub fn reset(&mut self) -> AffineTransform {
        self.commit(AffineTransform::IDENTITY)
    }

    #[must_use]
    pub fn is_fully_zoomed_out(&self) -> bool {
        self.is_fully_zoomed_out_x() && self.is_fully_zoomed_out_y()
    }

    #[must_use]
    pub fn is_fully_zoomed_out_x(&self) -> bool {
        self.zoom_pan.scale_x() <= self.limits.min_scale_x && self.limits.min_scale_x <= 1.0
    }

    #[must_use]
    pub fn is_fully_zoomed_out_y(&self) -> bool {
        self.zoom_pan.scale_y() <= self.limits.min_scale_y && self.limits.min_scale_y <= 1.0
    }

    #[must_use]
    pub fn can_zoom_out_more_x(&self) -> bool {
        self.zoom_pan.scale_x() > self.limits.min_scale_x
    }

    #[must_use]
    pub fn can_zoom_in_more_x(&self) -> bool {
        self.zoom_pan.scale_x() < self.limits.max_scale_x
    }

    #[must_use]
    pub fn can_zoom_out_more_y(&self) -> bool {
        self.zoom_pan.scale_y() > self.limits.min_scale_y
    }

    #[must_use]
    pub fn can_zoom_in_more_y(&self) -> bool {
        self.zoom_pan.scale_y() < self.limits.max_scale_y
    }

    #[must_use]
    pub fn is_in_bounds_left(&self, x: f64) -> bool {
        self.content_rect.left <= x + BOUNDS_TOLERANCE_PX
    }

    #[must_use]
    pub fn is_in_bounds_right(&self, x: f64) -> bool {
        // Truncated to hundredths so values sitting on the edge still pass.
        let x = (x * 100.0).trunc() / 100.0;
        self.content_rect.right >= x - BOUNDS_TOLERANCE_PX
    }

    #[must_use]
    pub fn is_in_bounds_top(&self, y: f64) -> bool {
        self.content_rect.top <= y
    }

    #[must_use]
    pub fn is_in_bounds_bottom(&self, y: f64) -> bool {
        let y = (y * 100.0).trunc() / 100.0;
        self.content_rect.bottom >= y
    }

    #[must_use]
    pub fn is_in_bounds_x(&self, x: f64) -> bool {
        self.is_in_bounds_left(x) && self.is_in_bounds_right(x)
    }

    #[must_use]
    pub fn is_in_bounds_y(&self, y: f64) -> bool {
        self.is_in_bounds_top(y) && self.is_in_bounds_bottom(y)
    }

    #[must_use]
    pub fn is_in_bounds(&self, point: Point) -> bool {
        self.is_in_bounds_x(point.x) && self.is_in_bounds_y(point.y)
    }
}

fn clamp_scale(scale: f64, min_scale: f64, max_scale: f64) -> f64 {
    if scale.is_nan() {
        return min_scale;
    }
    scale.max(min_scale).min(max_scale)
}

fn sanitize_min_scale(value: f64) -> f64 {
    if value.is_finite() { value.max(1.0) } else { 1.0 }
}

fn sanitize_max_scale(value: f64, min_scale: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.max(min_scale)
    } else {
        f64::MAX
    }
}

fn sanitize_drag_offset(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn sanitize_zoom_factor(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        1.0
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
