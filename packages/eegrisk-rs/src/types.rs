use serde::{Deserialize, Serialize};

/// Standard medical EEG sampling rate, used when the caller omits one
pub const DEFAULT_SAMPLING_RATE: f64 = 256.0;

fn default_sampling_rate() -> f64 {
    DEFAULT_SAMPLING_RATE
}

/// Complete analysis request configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub file_path: String,
    /// Sampling rate of the recording in Hz
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: f64,
    /// Named column to analyze; first numeric column when absent
    pub channel: Option<String>,
}

impl AnalysisRequest {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            sampling_rate: DEFAULT_SAMPLING_RATE,
            channel: None,
        }
    }

    pub fn with_sampling_rate(mut self, sampling_rate: f64) -> Self {
        self.sampling_rate = sampling_rate;
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }
}

/// Per-band power values, serialized in the fixed Delta through Gamma order.
///
/// Holds absolute powers after band integration and fractional powers after
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPowerSet {
    #[serde(rename = "Delta")]
    pub delta: f64,
    #[serde(rename = "Theta")]
    pub theta: f64,
    #[serde(rename = "Alpha")]
    pub alpha: f64,
    #[serde(rename = "Beta")]
    pub beta: f64,
    #[serde(rename = "Gamma")]
    pub gamma: f64,
}

impl BandPowerSet {
    /// Values paired with band names, in reporting order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Delta", self.delta),
            ("Theta", self.theta),
            ("Alpha", self.alpha),
            ("Beta", self.beta),
            ("Gamma", self.gamma),
        ]
    }

    /// Sum over all five bands.
    pub fn total(&self) -> f64 {
        self.delta + self.theta + self.alpha + self.beta + self.gamma
    }
}

/// Spectral metrics of a successful analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    pub bands_relative_power: BandPowerSet,
    /// Relative gamma over relative alpha, rounded to 4 decimals
    pub gamma_alpha_ratio: f64,
}

/// Successful analysis result, the sole payload of an invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: String,
    pub metrics: Metrics,
    /// Logistic risk score in [0, 100], rounded to 2 decimals
    pub risk_score: f64,
    /// DC-corrected waveform decimated for display
    pub chart_data: Vec<f64>,
}

impl AnalysisResult {
    pub fn new(metrics: Metrics, risk_score: f64, chart_data: Vec<f64>) -> Self {
        Self {
            status: "success".to_string(),
            metrics,
            risk_score,
            chart_data,
        }
    }
}

/// Uniform error shape emitted when any pipeline stage fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    pub status: String,
    pub message: String,
}

impl ErrorOutput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
