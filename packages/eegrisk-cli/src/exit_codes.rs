//! Process exit codes shared by all subcommands
//!
//! Failure is always signaled out-of-band through a non-zero code, so callers
//! never have to parse the JSON payload to detect it.

pub const SUCCESS: i32 = 0;

/// Bad or missing input: file, arguments, or table contents
pub const INPUT_ERROR: i32 = 1;

/// The analysis or output serialization failed
pub const ANALYSIS_ERROR: i32 = 2;

/// Batch run where some files succeeded and some failed
pub const PARTIAL_FAILURE: i32 = 3;
