use crate::cli::AnalyzeArgs;
use crate::exit_codes;
use crate::output;
use eegrisk_rs::{analyze, AnalysisError, AnalysisRequest, ErrorOutput};

pub fn execute(args: AnalyzeArgs) -> i32 {
    // A missing --file is part of the output contract: the uniform error
    // shape is emitted before any pipeline stage runs.
    let request = match &args.file {
        Some(file) => AnalysisRequest {
            file_path: file.clone(),
            sampling_rate: args.sr,
            channel: args.channel.clone(),
        },
        None => return emit_error(&AnalysisError::MissingInput, &args),
    };

    if !args.quiet {
        eprintln!(
            "Analyzing {} at {} Hz...",
            request.file_path, request.sampling_rate
        );
    }

    match analyze(&request) {
        Ok(result) => match output::emit(&result, args.compact, args.output.as_deref()) {
            Ok(()) => {
                if !args.quiet {
                    if let Some(ref path) = args.output {
                        eprintln!("Result written to {}", path);
                    }
                }
                exit_codes::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                exit_codes::ANALYSIS_ERROR
            }
        },
        Err(err) => emit_error(&err, &args),
    }
}

/// Convert any pipeline error to the uniform error shape on the result
/// channel, plus a non-zero exit code.
fn emit_error(err: &AnalysisError, args: &AnalyzeArgs) -> i32 {
    let shape = ErrorOutput::new(err.to_string());
    if let Err(e) = output::emit(&shape, args.compact, args.output.as_deref()) {
        eprintln!("Error: {}", e);
    }
    exit_code_for(err)
}

fn exit_code_for(err: &AnalysisError) -> i32 {
    match err {
        AnalysisError::IoError(_) => exit_codes::ANALYSIS_ERROR,
        _ => exit_codes::INPUT_ERROR,
    }
}
