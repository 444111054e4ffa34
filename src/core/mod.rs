pub mod affine;
pub mod axis_range;
pub mod primitives;
pub mod transformer;
pub mod types;
pub mod viewport;
pub mod windowing;

pub use affine::AffineTransform;
pub use axis_range::{AxisRange, AxisRangeOptions, DataExtents};
pub use primitives::{next_up, normalize_signed_zero};
pub use transformer::{ChartOrientation, CoordinateTransformer, ValueBounds};
pub use types::{ContentRect, DataPoint, Point};
pub use viewport::{ViewportLimits, ViewportModel};
pub use windowing::{Rounding, VisibleIndexBounds, entry_index_for_x};
