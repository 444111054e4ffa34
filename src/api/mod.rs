mod axis_config;
mod axis_ticks;
mod data_controller;
mod engine;
mod engine_config;
mod json_contract;
mod layout_controller;
mod series_projection;
mod viewport_controller;

pub use axis_config::{AxisConfig, MAX_LABEL_COUNT};
pub use axis_ticks::{
    AxisTicks, TickRequest, TickValues, compute_ticks, decimals_for_interval, format_tick_label,
    label_count_for_span, round_up_to_nice,
};
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ChartOffsets};
pub use json_contract::{ENGINE_CONFIG_JSON_SCHEMA_V1, EngineConfigJsonContractV1};
