//! Gamma/alpha ratio scoring through a fixed logistic mapping
//!
//! The constants are fixed design choices, not quantities calibrated per
//! input; they are exposed by name so they can be revisited without touching
//! the pipeline structure.

use crate::types::BandPowerSet;

/// Steepness of the logistic curve (k)
pub const SIGMOID_STEEPNESS: f64 = 15.0;

/// Ratio at which the score crosses 50.0 (R0)
pub const RATIO_MIDPOINT: f64 = 0.8;

/// Floor applied to relative alpha power so the ratio never divides by zero
/// when the Alpha band is empty
pub const ALPHA_FLOOR: f64 = 0.001;

/// Gamma over alpha relative power, with [`ALPHA_FLOOR`] applied to the
/// denominator.
pub fn gamma_alpha_ratio(relative: &BandPowerSet) -> f64 {
    relative.gamma / relative.alpha.max(ALPHA_FLOOR)
}

/// Map a gamma/alpha ratio to a risk score in [0, 100], rounded to 2 decimals.
///
/// `score = 100 / (1 + exp(-k * (ratio - R0)))`. The logistic form already
/// bounds the range, so no clamping is applied. Monotonically non-decreasing
/// in the ratio; exactly 50.00 at `ratio == RATIO_MIDPOINT`.
pub fn risk_score(ratio: f64) -> f64 {
    let probability = 1.0 / (1.0 + (-SIGMOID_STEEPNESS * (ratio - RATIO_MIDPOINT)).exp());
    round2(probability * 100.0)
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
