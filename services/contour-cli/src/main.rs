//! Contour map command line tool.
//!
//! Reads a survey grid, generates coloured contour lines and writes them as
//! an SVG document, optionally gzip-compressed.

mod app;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "contour-map")]
#[command(about = "Generate a coloured contour map from a survey grid")]
pub struct Args {
    /// Survey file to read, `-` for standard input
    #[arg(default_value = "-")]
    input: PathBuf,

    /// SVG file to write, `-` for standard output
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Compress the output with gzip
    #[arg(long)]
    gzip: bool,

    /// Configuration file (YAML or JSON)
    #[arg(long, env = "CONTOUR_CONFIG")]
    config: Option<PathBuf>,

    /// Height interval between contour levels
    #[arg(long)]
    height_step: Option<i64>,

    /// Longest contour segment kept; negative keeps all
    #[arg(long, allow_hyphen_values = true)]
    distance_threshold: Option<f64>,

    /// Only draw the contour at this height
    #[arg(long, allow_hyphen_values = true)]
    for_height: Option<i64>,

    /// Do not draw interpolated points
    #[arg(long)]
    no_generated_points: bool,

    /// Log level
    #[arg(long, env = "CONTOUR_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so the document can be written to stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    app::run(&args)
}
