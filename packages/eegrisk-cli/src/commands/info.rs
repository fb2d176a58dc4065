use crate::cli::InfoArgs;
use crate::exit_codes;
use crate::output;
use eegrisk_rs::loader::SUPPORTED_EXTENSIONS;
use eegrisk_rs::scoring::{ALPHA_FLOOR, RATIO_MIDPOINT, SIGMOID_STEEPNESS};
use eegrisk_rs::signal::CHART_POINTS;
use eegrisk_rs::types::DEFAULT_SAMPLING_RATE;
use serde::Serialize;

#[derive(Serialize)]
struct InfoOutput {
    cli_version: String,
    platform: String,
    arch: String,
    supported_extensions: Vec<&'static str>,
    default_sampling_rate: f64,
    chart_points: usize,
    sigmoid_steepness: f64,
    ratio_midpoint: f64,
    alpha_floor: f64,
}

pub fn execute(args: InfoArgs) -> i32 {
    let info = InfoOutput {
        cli_version: env!("CARGO_PKG_VERSION").to_string(),
        platform: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        supported_extensions: SUPPORTED_EXTENSIONS.to_vec(),
        default_sampling_rate: DEFAULT_SAMPLING_RATE,
        chart_points: CHART_POINTS,
        sigmoid_steepness: SIGMOID_STEEPNESS,
        ratio_midpoint: RATIO_MIDPOINT,
        alpha_floor: ALPHA_FLOOR,
    };

    if args.json {
        if let Err(e) = output::emit(&info, false, None) {
            eprintln!("Error: {}", e);
            return exit_codes::ANALYSIS_ERROR;
        }
    } else {
        println!("eegrisk CLI v{}", info.cli_version);
        println!("Platform: {} ({})", info.platform, info.arch);
        println!();
        println!("Supported extensions: {}", info.supported_extensions.join(", "));
        println!("Default sampling rate: {} Hz", info.default_sampling_rate);
        println!("Chart points: {}", info.chart_points);
        println!(
            "Scoring constants: k = {}, R0 = {}, alpha floor = {}",
            info.sigmoid_steepness, info.ratio_midpoint, info.alpha_floor
        );
    }

    exit_codes::SUCCESS
}
