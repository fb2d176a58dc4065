//! Pipeline orchestrator
//!
//! Runs load -> DC removal -> one-sided FFT -> band integration ->
//! normalization -> scoring -> display decimation as a single forward pass.
//! The first failing stage short-circuits the rest; there is no retry and no
//! partial result.

use crate::error::Result;
use crate::loader;
use crate::scoring;
use crate::signal;
use crate::spectrum;
use crate::types::{AnalysisRequest, AnalysisResult, Metrics};

/// Analyze one recording.
///
/// Pure function of the request: stateless, synchronous, and deterministic.
/// Identical input yields a byte-identical serialized result.
pub fn analyze(request: &AnalysisRequest) -> Result<AnalysisResult> {
    log::info!("Starting analysis for file: {}", request.file_path);
    log::debug!(
        "Sampling rate: {} Hz, channel: {:?}",
        request.sampling_rate,
        request.channel
    );

    let raw = loader::load_signal(&request.file_path, request.channel.as_deref())?;
    log::info!("Loaded {} samples", raw.len());

    let corrected = signal::remove_dc_offset(&raw);

    let spectrum = spectrum::compute_spectrum(&corrected, request.sampling_rate)?;
    log::debug!(
        "Spectrum: {} bins, resolution {:.4} Hz",
        spectrum.freqs.len(),
        spectrum.bin_width()
    );

    let absolute = spectrum::band_powers(&spectrum);
    let relative = spectrum::relative_powers(&absolute)?;

    let ratio = scoring::gamma_alpha_ratio(&relative);
    let score = scoring::risk_score(ratio);
    log::info!("Gamma/alpha ratio {:.4}, risk score {:.2}", ratio, score);

    let chart_data = signal::decimate_strided(&corrected);

    Ok(AnalysisResult::new(
        Metrics {
            bands_relative_power: relative,
            gamma_alpha_ratio: scoring::round4(ratio),
        },
        score,
        chart_data,
    ))
}
