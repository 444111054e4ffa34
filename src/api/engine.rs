use tracing::debug;

use crate::core::{
    AxisRange, ChartOrientation, ContentRect, CoordinateTransformer, DataPoint, ViewportModel,
};
use crate::error::ChartResult;

use super::{AxisTicks, ChartEngineConfig};

/// Orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the data, the viewport and the value/pixel transformer
/// and keeps axis ranges and ticks in sync with them. Renderers read projected
/// pixels from it; gesture handlers feed zoom/pan candidates into it.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    pub(super) config: ChartEngineConfig,
    pub(super) viewport: ViewportModel,
    pub(super) transformer: CoordinateTransformer,
    pub(super) points: Vec<DataPoint>,
    pub(super) x_range: AxisRange,
    pub(super) y_range: AxisRange,
    pub(super) x_ticks: AxisTicks,
    pub(super) y_ticks: AxisTicks,
}

impl ChartEngine {
    /// Creates an engine with an empty data set.
    pub fn new(config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;

        let mut viewport = ViewportModel::default().with_limits(config.viewport_limits);
        viewport.set_chart_dimensions(config.chart_width, config.chart_height);
        viewport.restrain_view_port(
            config.offsets.left,
            config.offsets.top,
            config.offsets.right,
            config.offsets.bottom,
        );

        let mut engine = Self {
            config,
            viewport,
            transformer: CoordinateTransformer::new(config.orientation),
            points: Vec::new(),
            x_range: AxisRange::default(),
            y_range: AxisRange::default(),
            x_ticks: AxisTicks::default(),
            y_ticks: AxisTicks::default(),
        };
        engine.rebuild_layout();
        debug!(
            chart_width = config.chart_width,
            chart_height = config.chart_height,
            orientation = ?config.orientation,
            "chart engine initialized"
        );
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn orientation(&self) -> ChartOrientation {
        self.config.orientation
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportModel {
        &self.viewport
    }

    #[must_use]
    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }

    #[must_use]
    pub fn content_rect(&self) -> ContentRect {
        self.viewport.content_rect()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    #[must_use]
    pub fn x_ticks(&self) -> &AxisTicks {
        &self.x_ticks
    }

    #[must_use]
    pub fn y_ticks(&self) -> &AxisTicks {
        &self.y_ticks
    }
}
