use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Smallest representable `f64` strictly greater than `value`.
///
/// NaN and `+inf` are returned unchanged; `-0.0` and `0.0` both step to the
/// smallest positive subnormal.
#[must_use]
pub fn next_up(value: f64) -> f64 {
    if value.is_nan() || value == f64::INFINITY {
        return value;
    }
    if value == 0.0 {
        return f64::from_bits(1);
    }

    let bits = value.to_bits();
    if value > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Rounds `-0.0` to `0.0` and leaves every other value untouched.
#[must_use]
pub fn normalize_signed_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Returns `numerator / denominator`, or `1.0` when the quotient would not be
/// a finite non-zero number.
#[must_use]
pub fn safe_scale(numerator: f64, denominator: f64) -> f64 {
    let scale = numerator / denominator;
    if scale.is_finite() && scale != 0.0 {
        scale
    } else {
        1.0
    }
}
