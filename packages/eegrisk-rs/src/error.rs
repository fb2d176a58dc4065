use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No input file path provided")]
    MissingInput,

    #[error("Input file not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("No numeric data found in {0}")]
    NoNumericData(String),

    #[error("Zero total power detected; invalid signal")]
    ZeroTotalPower,

    #[error("Failed to parse input table: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
