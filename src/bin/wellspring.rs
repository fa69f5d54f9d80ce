//! Wellspring CLI - Command-line interface for the wellness analysis pipeline
//!
//! Commands:
//! - analyze: Run the full pipeline over a health payload (plus optional journal)
//! - validate: Validate a raw health payload without analyzing it

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wellspring::types::{JournalEntry, RawHealthData};
use wellspring::{analyze_wellness, AnalysisError, Normalizer, ENGINE_VERSION};

/// Wellspring - Deterministic wellness scoring for wearable metrics and journal text
#[derive(Parser)]
#[command(name = "wellspring")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Score wearable metrics and journal text into wellness insights", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis pipeline
    Analyze {
        /// Health data file path (use - for stdin)
        #[arg(short = 'i', long)]
        health: PathBuf,

        /// Journal entries file path (JSON array of {date, text})
        #[arg(short, long)]
        journal: Option<PathBuf>,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Pretty-print the output JSON (default when stdout is a TTY)
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a raw health payload without analyzing it
    Validate {
        /// Health data file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WellspringCliError> {
    match cli.command {
        Commands::Analyze {
            health,
            journal,
            output,
            pretty,
        } => cmd_analyze(&health, journal.as_deref(), &output, pretty),

        Commands::Validate { input } => cmd_validate(&input),
    }
}

fn cmd_analyze(
    health: &Path,
    journal: Option<&Path>,
    output: &Path,
    pretty: bool,
) -> Result<(), WellspringCliError> {
    let raw: RawHealthData = serde_json::from_str(&read_input(health)?)?;

    let entries: Vec<JournalEntry> = match journal {
        Some(path) => serde_json::from_str(&read_input(path)?)?,
        None => Vec::new(),
    };

    let analysis = analyze_wellness(&raw, &entries)?;

    let pretty = pretty || (output.to_string_lossy() == "-" && atty::is(atty::Stream::Stdout));
    let json = if pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };

    if output.to_string_lossy() == "-" {
        println!("{}", json);
    } else {
        fs::write(output, json)?;
    }

    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), WellspringCliError> {
    let raw: RawHealthData = serde_json::from_str(&read_input(input)?)?;

    let records = Normalizer::normalize(&raw)?;
    println!(
        "Valid: {} day(s) of metrics for user {}",
        records.len(),
        raw.user_id
    );

    Ok(())
}

fn read_input(path: &Path) -> Result<String, WellspringCliError> {
    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

// Error types

#[derive(Debug)]
enum WellspringCliError {
    Io(io::Error),
    Json(serde_json::Error),
    Analysis(AnalysisError),
}

impl From<io::Error> for WellspringCliError {
    fn from(e: io::Error) -> Self {
        WellspringCliError::Io(e)
    }
}

impl From<serde_json::Error> for WellspringCliError {
    fn from(e: serde_json::Error) -> Self {
        WellspringCliError::Json(e)
    }
}

impl From<AnalysisError> for WellspringCliError {
    fn from(e: AnalysisError) -> Self {
        WellspringCliError::Analysis(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WellspringCliError> for CliError {
    fn from(e: WellspringCliError) -> Self {
        match e {
            WellspringCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WellspringCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax and field types".to_string()),
            },
            WellspringCliError::Analysis(e) => CliError {
                code: "ANALYSIS_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'wellspring validate' for details".to_string()),
            },
        }
    }
}
