//! One-sided spectral transform and band-power integration

use rustfft::{num_complex::Complex, FftPlanner};

use crate::bands::{BandDefinition, BAND_REGISTRY};
use crate::error::{AnalysisError, Result};
use crate::types::BandPowerSet;

/// One-sided spectrum of a length-N real signal: N/2 + 1 frequency bins with
/// their complex transform coefficients.
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Non-negative frequencies in Hz, ascending
    pub freqs: Vec<f64>,
    /// Unnormalized transform coefficients, one per bin
    pub coeffs: Vec<Complex<f64>>,
}

impl Spectrum {
    /// Spacing between adjacent bins in Hz
    pub fn bin_width(&self) -> f64 {
        self.freqs.get(1).copied().unwrap_or(0.0)
    }
}

/// Compute the one-sided discrete Fourier transform of a real signal.
///
/// The signal is transformed at its own length: no zero padding and no
/// window, so the coefficients match a direct DFT restricted to non-negative
/// frequencies. `freqs[i] = i * sampling_rate / n` for `i = 0..=n/2`.
pub fn compute_spectrum(signal: &[f64], sampling_rate: f64) -> Result<Spectrum> {
    let n = signal.len();
    if n < 2 {
        return Err(AnalysisError::InvalidParameter(format!(
            "signal must contain at least 2 samples, got {}",
            n
        )));
    }
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 {
        return Err(AnalysisError::InvalidParameter(format!(
            "sampling rate must be a positive number, got {}",
            sampling_rate
        )));
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f64>> =
        signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft.process(&mut buffer);

    // Drop the redundant negative-frequency half
    let half = n / 2 + 1;
    buffer.truncate(half);

    let bin_width = sampling_rate / n as f64;
    let freqs = (0..half).map(|i| i as f64 * bin_width).collect();

    Ok(Spectrum {
        freqs,
        coeffs: buffer,
    })
}

/// Sum of squared coefficient magnitudes over every bin inside the band.
///
/// Band edges are closed on both ends, so a bin exactly on a shared edge
/// (4, 8, 13, 30 Hz) is counted by both adjacent bands. The double-count is
/// intentional and kept for compatibility with the original scoring.
pub fn band_power(spectrum: &Spectrum, band: &BandDefinition) -> f64 {
    spectrum
        .freqs
        .iter()
        .zip(&spectrum.coeffs)
        .filter(|(freq, _)| band.contains(**freq))
        .map(|(_, coeff)| coeff.norm_sqr())
        .sum()
}

/// Absolute power for all five fixed bands.
pub fn band_powers(spectrum: &Spectrum) -> BandPowerSet {
    let [delta, theta, alpha, beta, gamma] =
        BAND_REGISTRY.map(|band| band_power(spectrum, band));
    BandPowerSet {
        delta,
        theta,
        alpha,
        beta,
        gamma,
    }
}

/// Convert absolute band powers to fractions of the five-band total.
///
/// Fails when the total is exactly zero (degenerate signal, e.g. all-zero
/// input after DC removal) instead of emitting NaN or Inf artifacts.
pub fn relative_powers(powers: &BandPowerSet) -> Result<BandPowerSet> {
    let total = powers.total();
    if total == 0.0 {
        return Err(AnalysisError::ZeroTotalPower);
    }
    Ok(BandPowerSet {
        delta: powers.delta / total,
        theta: powers.theta / total,
        alpha: powers.alpha / total,
        beta: powers.beta / total,
        gamma: powers.gamma / total,
    })
}
