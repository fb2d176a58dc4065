//! Fixed EEG frequency band definitions

use serde::Serialize;

/// Number of fixed bands
pub const BAND_COUNT: usize = 5;

/// Named closed frequency interval in Hz
///
/// Both edges are inclusive. Adjacent bands share their edge frequency, so a
/// spectral bin landing exactly on a shared edge contributes to both bands.
#[derive(Debug, Clone, Serialize)]
pub struct BandDefinition {
    pub name: &'static str,
    pub low_hz: f64,
    pub high_hz: f64,
    pub documentation: &'static str,
}

impl BandDefinition {
    /// Look up a band by name
    pub fn from_name(name: &str) -> Option<&'static BandDefinition> {
        BAND_REGISTRY.iter().copied().find(|b| b.name == name)
    }

    /// Whether `freq_hz` falls inside the closed interval
    pub fn contains(&self, freq_hz: f64) -> bool {
        freq_hz >= self.low_hz && freq_hz <= self.high_hz
    }
}

/// Delta [1, 4] Hz
pub const DELTA: BandDefinition = BandDefinition {
    name: "Delta",
    low_hz: 1.0,
    high_hz: 4.0,
    documentation: "Slow-wave activity, dominant in deep sleep.",
};

/// Theta [4, 8] Hz
pub const THETA: BandDefinition = BandDefinition {
    name: "Theta",
    low_hz: 4.0,
    high_hz: 8.0,
    documentation: "Drowsiness, light sleep, and memory encoding.",
};

/// Alpha [8, 13] Hz
pub const ALPHA: BandDefinition = BandDefinition {
    name: "Alpha",
    low_hz: 8.0,
    high_hz: 13.0,
    documentation: "Relaxed wakefulness, strongest over occipital sites.",
};

/// Beta [13, 30] Hz
pub const BETA: BandDefinition = BandDefinition {
    name: "Beta",
    low_hz: 13.0,
    high_hz: 30.0,
    documentation: "Active concentration and motor activity.",
};

/// Gamma [30, 45] Hz
pub const GAMMA: BandDefinition = BandDefinition {
    name: "Gamma",
    low_hz: 30.0,
    high_hz: 45.0,
    documentation: "High-frequency activity linked to cognitive binding.",
};

/// All bands in reporting order (Delta through Gamma)
pub const BAND_REGISTRY: [&BandDefinition; BAND_COUNT] = [&DELTA, &THETA, &ALPHA, &BETA, &GAMMA];
