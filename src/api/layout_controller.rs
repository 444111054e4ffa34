use tracing::{debug, warn};

use crate::core::{AxisRange, ChartOrientation, DataExtents, ValueBounds};
use crate::error::{ChartError, ChartResult};

use super::{
    AxisConfig, AxisTicks, ChartEngine, ChartOffsets, compute_ticks, label_count_for_span,
};

const MIN_AUTO_LABELS: usize = 2;

impl ChartEngine {
    /// Resizes the chart surface, keeping offsets and the zoom/pan transform.
    pub fn set_chart_dimensions(&mut self, width: f64, height: f64) -> ChartResult<()> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidDimensions { width, height });
        }

        self.config.chart_width = width;
        self.config.chart_height = height;
        self.viewport.set_chart_dimensions(width, height);
        let offsets = self.config.offsets;
        self.viewport
            .restrain_view_port(offsets.left, offsets.top, offsets.right, offsets.bottom);
        self.viewport.commit(self.viewport.zoom_pan());
        self.rebuild_layout();
        Ok(())
    }

    /// Replaces the offsets around the content rect (axis labels, legend).
    pub fn set_offsets(&mut self, offsets: ChartOffsets) {
        let offsets = offsets.sanitized();
        self.config.offsets = offsets;
        self.viewport
            .restrain_view_port(offsets.left, offsets.top, offsets.right, offsets.bottom);
        self.viewport.commit(self.viewport.zoom_pan());
        self.rebuild_layout();
    }

    pub fn set_x_axis(&mut self, axis: AxisConfig) {
        self.config.x_axis = axis.sanitized();
        self.rebuild_layout();
    }

    pub fn set_y_axis(&mut self, axis: AxisConfig) {
        self.config.y_axis = axis.sanitized();
        self.rebuild_layout();
    }

    /// Recomputes axis ranges, the value scale and both tick sets.
    ///
    /// Runs once per layout pass: after data, size, offset or axis config
    /// changes. Zoom and pan never require it.
    pub fn rebuild_layout(&mut self) {
        // An empty series lays out like a single point at the origin.
        let extents = DataExtents::from_points(&self.points).unwrap_or(DataExtents {
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        });

        self.x_range =
            AxisRange::calculate(extents.x_min, extents.x_max, self.config.x_axis.range);
        self.y_range =
            AxisRange::calculate(extents.y_min, extents.y_max, self.config.y_axis.range);

        let content_rect = self.viewport.content_rect();
        if content_rect.is_empty() {
            warn!(
                width = content_rect.width(),
                height = content_rect.height(),
                "content rect is empty, pixel mapping degenerates to unit scale"
            );
        }

        self.transformer.rebuild_value_scale(
            ValueBounds::new(
                self.x_range.minimum,
                self.x_range.maximum,
                self.y_range.minimum,
                self.y_range.maximum,
            ),
            content_rect,
            self.config.y_axis.inverted,
        );

        let (x_span_px, y_span_px) = match self.config.orientation {
            ChartOrientation::Vertical => (content_rect.width(), content_rect.height()),
            ChartOrientation::Horizontal => (content_rect.height(), content_rect.width()),
        };
        self.x_ticks = compute_axis_ticks(self.config.x_axis, self.x_range, x_span_px);
        self.y_ticks = compute_axis_ticks(self.config.y_axis, self.y_range, y_span_px);

        debug!(
            x_min = self.x_range.minimum,
            x_max = self.x_range.maximum,
            y_min = self.y_range.minimum,
            y_max = self.y_range.maximum,
            x_tick_count = self.x_ticks.len(),
            y_tick_count = self.y_ticks.len(),
            "layout rebuilt"
        );
    }
}

fn compute_axis_ticks(axis: AxisConfig, range: AxisRange, axis_span_px: f64) -> AxisTicks {
    let label_count = match axis.label_spacing_px {
        Some(_) if axis.label_count == 0 => 0,
        Some(spacing_px) => label_count_for_span(
            axis_span_px,
            spacing_px,
            MIN_AUTO_LABELS.min(axis.label_count),
            axis.label_count,
        ),
        None => axis.label_count,
    };
    compute_ticks(axis.tick_request(range.minimum, range.maximum, label_count))
}
