//! Command-line interface for projdoc.
//!
//! Run with no arguments to document the current directory into
//! `project_documentation.txt`.

use clap::Parser;
use projdoc::{
    BinaryDetection, DEFAULT_OUTPUT_FILE, ProjdocBuilder, ProjdocError, ProjdocOptions, Snapshot,
    generate_documentation, output, projdoc,
};
use std::io;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::{EnvFilter, fmt};

/// projdoc — snapshot a project tree and its files into one text report
#[derive(Parser)]
#[command(name = "projdoc", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Report file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Binary detection strategy
    #[arg(long, default_value = "none", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Print the report to stdout instead of writing the report file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (ProjdocOptions, bool) {
        let options = ProjdocBuilder::new(self.root)
            .output_file(self.output)
            .binary_detection(self.binary_detection)
            .build();
        (options, self.stdout)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "projdoc=debug" } else { "projdoc=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let (options, to_stdout) = cli.into_options();

    let result = if to_stdout {
        run_stdout(options)
    } else {
        run_normal(options)
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run_normal(options: ProjdocOptions) -> Result<(), ProjdocError> {
    let output = options.output_file.clone();
    let snapshot = generate_documentation(options)?;
    log_summary(&snapshot);
    tracing::info!("Report written to {}", output.display());
    Ok(())
}

fn run_stdout(options: ProjdocOptions) -> Result<(), ProjdocError> {
    let snapshot = projdoc(options)?;
    let stdout = io::stdout();
    output::write_report(&snapshot, stdout.lock())
        .map_err(|e| ProjdocError::Io {
            path: PathBuf::from("<stdout>"),
            source: e,
        })?;
    log_summary(&snapshot);
    Ok(())
}

fn log_summary(snapshot: &Snapshot) {
    let unreadable = snapshot
        .files
        .iter()
        .filter(|file| file.content.is_unreadable())
        .count();
    tracing::info!(
        "Documented {} files ({} unreadable)",
        snapshot.files.len(),
        unreadable
    );
}
