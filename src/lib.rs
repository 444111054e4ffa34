//! chart-transform: value/pixel mapping core for 2D charts.
//!
//! The crate owns the math that sits between a chart's data and its canvas:
//! the zoom/pan viewport with its clamping rules, the affine value ↔ pixel
//! chain, axis range padding, "nice" tick planning and culling of off-screen
//! entries. Drawing is left to the embedding renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
