use crate::core::{ChartOrientation, Point, VisibleIndexBounds};

use super::ChartEngine;

impl ChartEngine {
    #[must_use]
    pub fn map_value_to_pixel(&self, x: f64, y: f64) -> Point {
        self.transformer.value_to_pixel(x, y, &self.viewport)
    }

    #[must_use]
    pub fn map_pixel_to_value(&self, x: f64, y: f64) -> Point {
        self.transformer.pixel_to_value(x, y, &self.viewport)
    }

    /// Data-x window currently on screen, clamped to the x axis range.
    #[must_use]
    pub fn visible_x_range(&self) -> (f64, f64) {
        (
            self.transformer
                .lowest_visible_x(&self.viewport, self.x_range.minimum),
            self.transformer
                .highest_visible_x(&self.viewport, self.x_range.maximum),
        )
    }

    /// Index window renderers iterate for the current viewport.
    #[must_use]
    pub fn visible_index_bounds(&self, phase_x: f64) -> VisibleIndexBounds {
        let (low, high) = self.visible_x_range();
        VisibleIndexBounds::resolve(&self.points, low, high, phase_x)
    }

    /// Pixels of the entries inside the visible window, with y scaled by the
    /// animation phase.
    #[must_use]
    pub fn project_visible_points(&self, phase_x: f64, phase_y: f64) -> Vec<Point> {
        let bounds = self.visible_index_bounds(phase_x);
        self.transformer
            .project_visible(&self.points, bounds, phase_y, &self.viewport)
    }

    #[must_use]
    pub fn project_all_points(&self) -> Vec<Point> {
        self.transformer
            .project_points(&self.points, &self.viewport)
    }

    /// Pixel coordinate of every x tick along the data-x direction.
    #[must_use]
    pub fn x_tick_pixels(&self) -> Vec<f64> {
        let y = self.y_range.minimum;
        self.x_ticks
            .values
            .iter()
            .map(|value| {
                let pixel = self.map_value_to_pixel(*value, y);
                match self.config.orientation {
                    ChartOrientation::Vertical => pixel.x,
                    ChartOrientation::Horizontal => pixel.y,
                }
            })
            .collect()
    }

    /// Pixel coordinate of every y tick along the data-y direction.
    #[must_use]
    pub fn y_tick_pixels(&self) -> Vec<f64> {
        let x = self.x_range.minimum;
        self.y_ticks
            .values
            .iter()
            .map(|value| {
                let pixel = self.map_value_to_pixel(x, *value);
                match self.config.orientation {
                    ChartOrientation::Vertical => pixel.y,
                    ChartOrientation::Horizontal => pixel.x,
                }
            })
            .collect()
    }
}
