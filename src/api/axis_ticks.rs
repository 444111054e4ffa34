use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{next_up, normalize_signed_zero};

pub type TickValues = SmallVec<[f64; 16]>;

/// Significant digits a "nice" interval may start with.
const NICE_DIGITS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
/// Relative slack when comparing a significant digit against a nice digit.
const DIGIT_TOLERANCE: f64 = 1e-9;

/// Inputs of one tick computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRequest {
    pub min: f64,
    pub max: f64,
    pub desired_count: usize,
    pub granularity: f64,
    pub granularity_enabled: bool,
    pub force_count: bool,
    pub centering_enabled: bool,
    pub show_only_min_max: bool,
}

impl TickRequest {
    #[must_use]
    pub fn new(min: f64, max: f64, desired_count: usize) -> Self {
        Self {
            min,
            max,
            desired_count,
            granularity: 0.0,
            granularity_enabled: false,
            force_count: false,
            centering_enabled: false,
            show_only_min_max: false,
        }
    }

    /// Enables the granularity floor. Non-finite or negative values disable it.
    #[must_use]
    pub fn with_granularity(mut self, granularity: f64) -> Self {
        let enabled = granularity.is_finite() && granularity > 0.0;
        self.granularity = if enabled { granularity } else { 0.0 };
        self.granularity_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_force_count(mut self, force_count: bool) -> Self {
        self.force_count = force_count;
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
}

/// Tick positions for one axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisTicks {
    /// Ascending tick values.
    pub values: TickValues,
    /// Label anchor positions: `values` shifted by half an interval when
    /// centering is enabled, otherwise identical to `values`.
    pub centered_values: TickValues,
    /// Spacing between consecutive values (0 when fewer than two).
    pub interval: f64,
    /// Fraction digits needed to tell neighbouring labels apart.
    pub decimals: usize,
}

impl AxisTicks {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Formats every value with the computed precision.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|value| format_tick_label(*value, self.decimals))
            .collect()
    }
}

/// Computes tick values for `[request.min, request.max]`.
///
/// Never loops unboundedly: empty counts, inverted ranges and non-finite
/// inputs produce an empty result and a flat range produces a single tick.
#[must_use]
pub fn compute_ticks(request: TickRequest) -> AxisTicks {
    let TickRequest { min, max, .. } = request;
    if request.desired_count == 0 || !min.is_finite() || !max.is_finite() || max < min {
        return AxisTicks::default();
    }

    if request.show_only_min_max {
        let values: TickValues = [min, max].into_iter().map(normalize_signed_zero).collect();
        return AxisTicks {
            centered_values: values.clone(),
            values,
            interval: max - min,
            decimals: decimals_for_interval(max - min),
        };
    }

    if request.force_count {
        return forced_ticks(request);
    }

    nice_ticks(request)
}

fn forced_ticks(request: TickRequest) -> AxisTicks {
    let TickRequest { min, max, .. } = request;
    let count = request.desired_count;
    let interval = if count > 1 {
        (max - min) / (count - 1) as f64
    } else {
        0.0
    };

    let values: TickValues = (0..count)
        .map(|index| normalize_signed_zero(min + index as f64 * interval))
        .collect();
    finish(values, interval, request.centering_enabled)
}

fn nice_ticks(request: TickRequest) -> AxisTicks {
    let TickRequest { min, max, .. } = request;
    let raw_interval = if max == min {
        1.0
    } else {
        (max - min) / request.desired_count as f64
    };

    let mut interval = round_up_to_nice(raw_interval);
    if request.granularity_enabled && interval < request.granularity {
        interval = request.granularity;
    }

    // Granularity may leave a 6..9 leading digit; jump to the next power of ten.
    let magnitude = magnitude_of(interval);
    let significant_digit = (interval / magnitude + DIGIT_TOLERANCE).floor();
    if significant_digit > 5.0 {
        let bumped = (10.0 * magnitude).floor();
        if bumped != 0.0 {
            interval = bumped;
        }
    }

    if !interval.is_finite() || interval <= 0.0 {
        return AxisTicks::default();
    }

    let mut first = (min / interval).ceil() * interval;
    if request.centering_enabled {
        first -= interval;
    }
    // Without the nudge the top tick sporadically falls just above `last`.
    let last = next_up((max / interval).floor() * interval);

    let mut values = TickValues::new();
    let mut index = 0usize;
    loop {
        let value = first + index as f64 * interval;
        if value > last {
            break;
        }
        // Steps below the float spacing of `first` round onto the same value.
        let value = normalize_signed_zero(value);
        if values.last().is_none_or(|previous| value > *previous) {
            values.push(value);
        }
        index += 1;
    }

    finish(values, interval, request.centering_enabled)
}

fn finish(values: TickValues, interval: f64, centering_enabled: bool) -> AxisTicks {
    let centered_values = if centering_enabled {
        let offset = interval / 2.0;
        values
            .iter()
            .map(|value| normalize_signed_zero(value + offset))
            .collect()
    } else {
        values.clone()
    };

    AxisTicks {
        values,
        centered_values,
        interval,
        decimals: decimals_for_interval(interval),
    }
}

/// Rounds `raw` up to `{1, 2, 5, 10} × 10^n`.
#[must_use]
pub fn round_up_to_nice(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }

    let magnitude = magnitude_of(raw);
    let digit = raw / magnitude;
    let nice_digit = NICE_DIGITS
        .into_iter()
        .find(|candidate| digit <= candidate * (1.0 + DIGIT_TOLERANCE))
        .unwrap_or(10.0);
    nice_digit * magnitude
}

/// Fraction digits for labels spaced `interval` apart.
#[must_use]
pub fn decimals_for_interval(interval: f64) -> usize {
    if !interval.is_finite() || interval <= 0.0 || interval >= 1.0 {
        return 0;
    }
    (-interval.log10() - DIGIT_TOLERANCE).ceil() as usize
}

/// Fixed-point label for a tick value. Never prints a negative zero.
#[must_use]
pub fn format_tick_label(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, normalize_signed_zero(value));
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_owned(),
        _ => text,
    }
}

/// Label count that keeps roughly `target_spacing_px` between labels.
#[must_use]
pub fn label_count_for_span(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_labels: usize,
    max_labels: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_labels;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_labels;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_labels, max_labels.max(min_labels))
}

fn magnitude_of(value: f64) -> f64 {
    10f64.powi(value.log10().floor() as i32)
}
