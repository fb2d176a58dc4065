use crate::cli::BatchArgs;
use crate::exit_codes;
use crate::output;
use eegrisk_rs::{analyze, AnalysisError, AnalysisRequest, AnalysisResult};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

pub fn execute(args: BatchArgs) -> i32 {
    let files = match resolve_files(&args) {
        Ok(f) => f,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if files.is_empty() {
        eprintln!("Error: No matching files found");
        return exit_codes::INPUT_ERROR;
    }

    // Dry-run mode: print file list and exit
    if args.dry_run {
        for f in &files {
            println!("{}", f);
        }
        if !args.quiet {
            eprintln!("Found {} file(s)", files.len());
        }
        return exit_codes::SUCCESS;
    }

    if let Some(ref dir) = args.output_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: Failed to create output directory '{}': {}", dir, e);
            return exit_codes::ANALYSIS_ERROR;
        }
    }

    let total = files.len();
    let start_time = Instant::now();

    // Invocations are independent and stateless, so files are analyzed in
    // parallel; results come back in input order and are written sequentially
    // so the output stream stays deterministic.
    let outcomes: Vec<Result<AnalysisResult, AnalysisError>> = files
        .par_iter()
        .map(|file| {
            let request = AnalysisRequest {
                file_path: file.clone(),
                sampling_rate: args.sr,
                channel: args.channel.clone(),
            };
            analyze(&request)
        })
        .collect();

    let mut succeeded = 0usize;
    let mut failed = 0usize;

    for (i, (file_path, outcome)) in files.iter().zip(outcomes).enumerate() {
        if !args.quiet {
            eprintln!("[{}/{}] {}", i + 1, total, file_path);
        }

        match outcome {
            Ok(result) => match write_result(&result, file_path, &args) {
                Ok(()) => succeeded += 1,
                Err(e) => {
                    eprintln!("  Error writing output: {}", e);
                    failed += 1;
                    if !args.continue_on_error {
                        break;
                    }
                }
            },
            Err(e) => {
                eprintln!("  Error: {}", e);
                failed += 1;
                if !args.continue_on_error {
                    break;
                }
            }
        }
    }

    if !args.quiet {
        eprintln!(
            "Batch complete: {}/{} succeeded, {}/{} failed, {:.1}s",
            succeeded,
            total,
            failed,
            total,
            start_time.elapsed().as_secs_f64()
        );
    }

    if failed == 0 {
        exit_codes::SUCCESS
    } else if succeeded > 0 {
        exit_codes::PARTIAL_FAILURE
    } else {
        exit_codes::ANALYSIS_ERROR
    }
}

/// Per-file JSON under --output-dir, or compact JSONL on stdout.
fn write_result(
    result: &AnalysisResult,
    file_path: &str,
    args: &BatchArgs,
) -> std::result::Result<(), String> {
    match args.output_dir {
        Some(ref dir) => {
            let stem = Path::new(file_path)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let out_path = Path::new(dir).join(format!("{}_analysis.json", stem));
            let json = output::to_json(result, args.compact)?;
            output::write_output(&json, out_path.to_str())
        }
        None => {
            let json = output::to_json(result, true)?;
            output::write_output(&json, None)
        }
    }
}

fn resolve_files(args: &BatchArgs) -> std::result::Result<Vec<String>, String> {
    if let Some(ref pattern) = args.glob {
        resolve_glob(pattern)
    } else if let Some(ref files) = args.files {
        Ok(files.clone())
    } else {
        Err("One of --glob or --files must be specified".to_string())
    }
}

fn resolve_glob(pattern: &str) -> std::result::Result<Vec<String>, String> {
    let paths =
        glob::glob(pattern).map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;

    let mut files: Vec<String> = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    if let Some(s) = path.to_str() {
                        files.push(s.to_string());
                    }
                }
            }
            Err(e) => {
                eprintln!("Warning: glob error: {}", e);
            }
        }
    }
    files.sort();
    Ok(files)
}
