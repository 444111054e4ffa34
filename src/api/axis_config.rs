use serde::{Deserialize, Serialize};

use crate::core::AxisRangeOptions;

use super::TickRequest;

/// Upper bound accepted by [`AxisConfig::with_label_count`].
pub const MAX_LABEL_COUNT: usize = 25;

/// Per-axis configuration: label planning plus range padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default = "default_label_count")]
    pub label_count: usize,
    /// Derive `label_count` from the axis pixel span when set.
    #[serde(default)]
    pub label_spacing_px: Option<f64>,
    #[serde(default)]
    pub granularity: f64,
    #[serde(default)]
    pub granularity_enabled: bool,
    #[serde(default)]
    pub force_label_count: bool,
    #[serde(default)]
    pub centering_enabled: bool,
    #[serde(default)]
    pub show_only_min_max: bool,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub range: AxisRangeOptions,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            label_count: default_label_count(),
            label_spacing_px: None,
            granularity: 1.0,
            granularity_enabled: false,
            force_label_count: false,
            centering_enabled: false,
            show_only_min_max: false,
            inverted: false,
            range: AxisRangeOptions::default(),
        }
    }
}

impl AxisConfig {
    /// Defaults for a value (y) axis: percentage headroom above and below.
    #[must_use]
    pub fn value_axis() -> Self {
        Self {
            range: AxisRangeOptions::value_axis(),
            ..Self::default()
        }
    }

    /// Sets the desired label count, clamped to `0..=MAX_LABEL_COUNT`.
    #[must_use]
    pub fn with_label_count(mut self, label_count: usize, force: bool) -> Self {
        self.label_count = label_count.min(MAX_LABEL_COUNT);
        self.force_label_count = force;
        self
    }

    #[must_use]
    pub fn with_label_spacing_px(mut self, spacing_px: Option<f64>) -> Self {
        self.label_spacing_px = spacing_px.filter(|value| value.is_finite() && *value > 0.0);
        self
    }

    /// Sets a minimum tick interval. Non-finite or negative values disable it.
    #[must_use]
    pub fn with_granularity(mut self, granularity: f64) -> Self {
        let enabled = granularity.is_finite() && granularity > 0.0;
        self.granularity = if enabled { granularity } else { 0.0 };
        self.granularity_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_centering(mut self, centering_enabled: bool) -> Self {
        self.centering_enabled = centering_enabled;
        self
    }

    #[must_use]
    pub fn with_show_only_min_max(mut self, show_only_min_max: bool) -> Self {
        self.show_only_min_max = show_only_min_max;
        self
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_custom_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.range.custom_min = min;
        self.range.custom_max = max;
        self
    }

    #[must_use]
    pub fn with_range_options(mut self, range: AxisRangeOptions) -> Self {
        self.range = range;
        self
    }

    /// Silently pulls every field into its legal range.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.label_count = self.label_count.min(MAX_LABEL_COUNT);
        self.label_spacing_px = self
            .label_spacing_px
            .filter(|value| value.is_finite() && *value > 0.0);
        if !self.granularity.is_finite() || self.granularity < 0.0 {
            self.granularity = 0.0;
            self.granularity_enabled = false;
        }
        self
    }

    /// Tick request for `[min, max]` using this axis' label settings.
    #[must_use]
    pub fn tick_request(&self, min: f64, max: f64, label_count: usize) -> TickRequest {
        let request = TickRequest::new(min, max, label_count)
            .with_force_count(self.force_label_count)
            .with_centering(self.centering_enabled)
            .with_show_only_min_max(self.show_only_min_max);
        if self.granularity_enabled {
            request.with_granularity(self.granularity)
        } else {
            request
        }
    }
}

fn default_label_count() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::{AxisConfig, MAX_LABEL_COUNT};

    #[test]
    fn label_count_is_capped() {
        let config = AxisConfig::default().with_label_count(400, false);
        assert_eq!(config.label_count, MAX_LABEL_COUNT);
    }

    #[test]
    fn granularity_request_is_only_enabled_on_demand() {
        let config = AxisConfig::default();
        assert!(!config.tick_request(0.0, 10.0, 5).granularity_enabled);

        let config = config.with_granularity(2.0);
        let request = config.tick_request(0.0, 10.0, 5);
        assert!(request.granularity_enabled);
        assert_eq!(request.granularity, 2.0);
    }
}
