use tracing::{debug, trace, warn};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

use super::ChartEngine;

impl ChartEngine {
    /// Replaces the data series and runs a layout pass.
    ///
    /// Non-finite samples are dropped and the rest sorted by x, since culling
    /// relies on binary search over x.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        let original_count = points.len();
        let points = canonicalize_points(points);
        if points.len() != original_count {
            warn!(
                dropped = original_count - points.len(),
                "dropping non-finite data points"
            );
        }
        debug!(
            original_count,
            canonical_count = points.len(),
            "set data points"
        );
        self.points = points;
        self.rebuild_layout();
    }

    /// Appends one sample. Samples must not go back in x.
    pub fn append_point(&mut self, point: DataPoint) -> ChartResult<()> {
        if !point.is_finite() {
            return Err(ChartError::InvalidData(
                "data point must be finite".to_owned(),
            ));
        }
        if let Some(last) = self.points.last() {
            if point.x < last.x {
                return Err(ChartError::InvalidData(
                    "data point x must not precede the last sample".to_owned(),
                ));
            }
        }

        self.points.push(point);
        trace!(count = self.points.len(), "append data point");
        self.rebuild_layout();
        Ok(())
    }

    pub fn clear_data(&mut self) {
        self.points.clear();
        debug!("cleared data points");
        self.rebuild_layout();
    }
}

fn canonicalize_points(points: Vec<DataPoint>) -> Vec<DataPoint> {
    let mut points: Vec<DataPoint> = points.into_iter().filter(|p| p.is_finite()).collect();
    points.sort_by(|left, right| left.x.total_cmp(&right.x));
    points
}
