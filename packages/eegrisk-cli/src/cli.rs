use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "eegrisk",
    version,
    about = "EEG spectral band-power risk analysis command-line tool",
    long_about = "Analyze a single-channel EEG recording from a delimited table (CSV/TSV/ASCII):\n\
                  one-sided FFT, fixed-band power integration, and a logistic gamma/alpha\n\
                  risk score with a display-ready downsampled waveform."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze one recording and emit the result JSON
    Analyze(AnalyzeArgs),
    /// Analyze many recordings (glob pattern or explicit list)
    Batch(BatchArgs),
    /// List the fixed EEG frequency bands
    Bands(BandsArgs),
    /// Validate an input table
    Validate(ValidateArgs),
    /// Show CLI version and analysis constants
    Info(InfoArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input table path (CSV, TSV, or whitespace-delimited ASCII)
    #[arg(long)]
    pub file: Option<String>,

    /// Sampling rate in Hz
    #[arg(long, default_value_t = eegrisk_rs::types::DEFAULT_SAMPLING_RATE)]
    pub sr: f64,

    /// Named column to analyze (default: first numeric column)
    #[arg(long)]
    pub channel: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern selecting input tables
    #[arg(long)]
    pub glob: Option<String>,

    /// Explicit list of input tables
    #[arg(long, num_args = 1..)]
    pub files: Option<Vec<String>>,

    /// Sampling rate in Hz, shared by all files
    #[arg(long, default_value_t = eegrisk_rs::types::DEFAULT_SAMPLING_RATE)]
    pub sr: f64,

    /// Named column to analyze (default: first numeric column)
    #[arg(long)]
    pub channel: Option<String>,

    /// Write one <stem>_analysis.json per input here instead of JSONL on stdout
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Keep going after a file fails
    #[arg(long, default_value_t = false)]
    pub continue_on_error: bool,

    /// Print the resolved file list and exit
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Compact JSON output (no indentation)
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct BandsArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Input table path
    #[arg(long)]
    pub file: String,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
