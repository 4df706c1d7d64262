//! Crop handwritten move cells out of a chess scoresheet photo.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use scoresheet::{extract_moves, ExtractRequest, ScoresheetConfig};

#[derive(Parser, Debug)]
#[command(
    name = "scoresheet-crop",
    version,
    about = "Smart chess scoresheet cropper using rule-line detection"
)]
struct Cli {
    /// Path to the scoresheet image.
    #[arg(long)]
    image: PathBuf,

    /// Output directory.
    #[arg(long, default_value = "./out")]
    out: PathBuf,

    /// Base name for output files (defaults to the image file stem).
    #[arg(long)]
    basename: Option<String>,

    /// Save the detected-lines overlay image.
    #[arg(long)]
    debug: bool,

    /// JSON file with detector / grid / export parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Emit tracing spans as JSON lines instead of the plain logger.
    #[cfg(feature = "tracing")]
    #[arg(long)]
    trace_json: bool,
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    {
        scoresheet::core::init_tracing(cli.trace_json, cli.log_level);
        Ok(())
    }
    #[cfg(not(feature = "tracing"))]
    {
        scoresheet::core::init_with_level(cli.log_level)?;
        Ok(())
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&cli)?;

    let config = match &cli.config {
        Some(path) => ScoresheetConfig::load_json(path)?,
        None => ScoresheetConfig::default(),
    };

    let mut request = ExtractRequest::new(&cli.image, &cli.out).with_debug(cli.debug);
    if let Some(base) = &cli.basename {
        request = request.with_base_name(base.clone());
    }

    let summary = extract_moves(&request, &config)?;
    log::debug!("summary: {}", serde_json::to_string(&summary)?);

    if let Some(path) = &summary.debug_path {
        println!("debug overlay saved: {}", path.display());
    }
    println!(
        "extracted {} chess move cells ({} placeholders)",
        summary.records, summary.placeholders
    );
    println!("output directory: {}", cli.out.display());
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
