use crate::core::{AffineTransform, Point, ViewportLimits};

use super::ChartEngine;

impl ChartEngine {
    /// Clamps and stores a candidate produced by the viewport's `zoom_by`,
    /// `pan_by` or friends.
    ///
    /// Zoom and pan leave the value scale untouched, so no layout pass runs;
    /// callers re-query pixel positions afterwards.
    pub fn commit(&mut self, candidate: AffineTransform) -> AffineTransform {
        self.viewport.commit(candidate)
    }

    /// Zooms around a screen pixel, e.g. the midpoint of a pinch.
    pub fn zoom_by(
        &mut self,
        scale_x: f64,
        scale_y: f64,
        pivot_x: f64,
        pivot_y: f64,
    ) -> AffineTransform {
        let pivot = self
            .transformer
            .screen_to_content(Point::new(pivot_x, pivot_y));
        let candidate = self.viewport.zoom_by(scale_x, scale_y, pivot.x, pivot.y);
        self.commit(candidate)
    }

    /// Pans by a screen-space drag delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> AffineTransform {
        let delta = self.transformer.screen_delta_to_content(dx, dy);
        let candidate = self.viewport.pan_by(delta.x, delta.y);
        self.commit(candidate)
    }

    /// Zooms in one step around the content center.
    pub fn zoom_in(&mut self) -> AffineTransform {
        let center = self.viewport.content_center();
        let candidate = self.viewport.zoom_in(center.x, center.y);
        self.commit(candidate)
    }

    /// Zooms out one step around the content center.
    pub fn zoom_out(&mut self) -> AffineTransform {
        let center = self.viewport.content_center();
        let candidate = self.viewport.zoom_out(center.x, center.y);
        self.commit(candidate)
    }

    /// Moves the viewport so the data value `(x, y)` sits at the content center.
    pub fn center_view_on(&mut self, x: f64, y: f64) -> AffineTransform {
        let target = self
            .transformer
            .screen_to_content(self.map_value_to_pixel(x, y));
        let candidate = self.viewport.center_view_port(target.x, target.y);
        self.commit(candidate)
    }

    /// Drops all zoom and pan.
    pub fn fit_screen(&mut self) -> AffineTransform {
        self.viewport.reset()
    }

    pub fn set_viewport_limits(&mut self, limits: ViewportLimits) {
        let limits = limits.sanitized();
        self.config.viewport_limits = limits;
        self.viewport
            .set_zoom_limits_x(limits.min_scale_x, limits.max_scale_x);
        self.viewport
            .set_zoom_limits_y(limits.min_scale_y, limits.max_scale_y);
        self.viewport.set_drag_offset_x(limits.drag_offset_x);
        self.viewport.set_drag_offset_y(limits.drag_offset_y);
        self.viewport.commit(self.viewport.zoom_pan());
    }

    #[must_use]
    pub fn is_fully_zoomed_out(&self) -> bool {
        self.viewport.is_fully_zoomed_out()
    }
}
