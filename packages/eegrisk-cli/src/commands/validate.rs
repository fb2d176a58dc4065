use crate::cli::ValidateArgs;
use crate::exit_codes;
use crate::output;
use eegrisk_rs::loader::{self, FileType, SUPPORTED_EXTENSIONS};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ValidateOutput {
    file: String,
    exists: bool,
    readable: bool,
    supported: bool,
    file_type: Option<String>,
    size_bytes: Option<u64>,
    /// Sample count of the default numeric column, when one exists
    samples: Option<usize>,
    error: Option<String>,
}

pub fn execute(args: ValidateArgs) -> i32 {
    let path = Path::new(&args.file);

    let exists = path.exists();
    let readable = path.is_file() && std::fs::File::open(path).is_ok();

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let file_type = FileType::from_extension(extension);
    let supported = file_type.is_some();

    let size_bytes = if readable {
        std::fs::metadata(path).ok().map(|m| m.len())
    } else {
        None
    };

    // Deep check: can a sample sequence actually be loaded from the table?
    let load_outcome = if readable && supported {
        Some(loader::load_signal(&args.file, None))
    } else {
        None
    };
    let samples = load_outcome
        .as_ref()
        .and_then(|r| r.as_ref().ok().map(|s| s.len()));

    let error = if !exists {
        Some(format!("File not found: {}", args.file))
    } else if !readable {
        Some(format!("File is not readable: {}", args.file))
    } else if !supported {
        Some(format!(
            "Unsupported file extension '{}'. Supported: {}",
            extension,
            SUPPORTED_EXTENSIONS.join(", ")
        ))
    } else {
        load_outcome.and_then(|r| r.err().map(|e| e.to_string()))
    };

    let result = ValidateOutput {
        file: args.file.clone(),
        exists,
        readable,
        supported,
        file_type: file_type.map(|ft| format!("{:?}", ft)),
        size_bytes,
        samples,
        error: error.clone(),
    };

    if args.json {
        if let Err(e) = output::emit(&result, false, None) {
            eprintln!("Error: {}", e);
            return exit_codes::ANALYSIS_ERROR;
        }
    } else if let Some(ref err) = error {
        eprintln!("Error: {}", err);
    } else {
        println!(
            "File '{}' is valid ({}, {} bytes, {} samples)",
            args.file,
            file_type.map(|ft| format!("{:?}", ft)).unwrap_or_default(),
            size_bytes.unwrap_or(0),
            samples.unwrap_or(0)
        );
    }

    if error.is_some() {
        exit_codes::INPUT_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
