use crate::cli::BandsArgs;
use crate::exit_codes;
use crate::output;
use eegrisk_rs::bands::BAND_REGISTRY;
use serde::Serialize;

#[derive(Serialize)]
struct BandInfo {
    name: &'static str,
    low_hz: f64,
    high_hz: f64,
    documentation: &'static str,
}

pub fn execute(args: BandsArgs) -> i32 {
    let bands: Vec<BandInfo> = BAND_REGISTRY
        .iter()
        .map(|b| BandInfo {
            name: b.name,
            low_hz: b.low_hz,
            high_hz: b.high_hz,
            documentation: b.documentation,
        })
        .collect();

    if args.json {
        match output::emit(&bands, false, None) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("Error: {}", e);
                return exit_codes::ANALYSIS_ERROR;
            }
        }
    } else {
        println!("EEG frequency bands:\n");
        println!("  {:<8} {:>8} {:>8}  {}", "Name", "Low Hz", "High Hz", "Description");
        println!("  {}", "-".repeat(72));
        for b in &bands {
            println!(
                "  {:<8} {:>8.1} {:>8.1}  {}",
                b.name, b.low_hz, b.high_hz, b.documentation
            );
        }
        println!();
        println!("Band edges are closed on both ends; a spectral bin exactly on a shared");
        println!("edge (4, 8, 13, 30 Hz) counts toward both adjacent bands.");
    }

    exit_codes::SUCCESS
}
