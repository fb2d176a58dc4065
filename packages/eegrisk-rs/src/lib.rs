pub mod analyzer;
pub mod bands;
pub mod error;
pub mod loader;
pub mod scoring;
pub mod signal;
pub mod spectrum;
pub mod types;

pub use analyzer::analyze;
pub use error::{AnalysisError, Result};
pub use types::*;
