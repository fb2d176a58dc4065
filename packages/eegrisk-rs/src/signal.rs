//! Time-domain signal utilities

/// Upper bound on the number of waveform points handed to a display consumer
pub const CHART_POINTS: usize = 200;

/// Subtract the arithmetic mean from every sample (DC-offset removal).
///
/// Pure and total over any non-empty input; an empty slice yields an empty
/// output.
pub fn remove_dc_offset(samples: &[f64]) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    samples.iter().map(|&s| s - mean).collect()
}

/// Strided decimation for display: every `step`-th sample starting at index 0,
/// with `step = max(1, n / CHART_POINTS)`.
///
/// No anti-aliasing filter is applied; the output is an exact sub-sequence of
/// the input.
pub fn decimate_strided(samples: &[f64]) -> Vec<f64> {
    let step = (samples.len() / CHART_POINTS).max(1);
    samples.iter().step_by(step).copied().collect()
}
