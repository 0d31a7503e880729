//! extract-timestamp - Print a JSON document's timestamp as Unix seconds.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use epochstamp_cli::{Extractor, write_epoch};

/// Print the Unix seconds of a UTC timestamp stored in a JSON file.
///
/// Reads FILE, takes the string at `version.time` (for example
/// `2023-06-15T12:00:00.000000Z`), and prints the number of seconds since
/// 1970-01-01T00:00:00Z rounded to the nearest integer.
#[derive(Parser, Debug)]
#[command(name = "extract-timestamp")]
#[command(about = "Print a JSON timestamp field as Unix seconds")]
#[command(version)]
struct Args {
    /// JSON file to read
    file: PathBuf,

    /// Verbose output (debug logs on stderr)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    let value = Extractor::default()
        .extract_file(&args.file)
        .with_context(|| format!("extracting timestamp from {}", args.file.display()))?;

    write_epoch(io::stdout().lock(), value).context("writing result")?;
    Ok(())
}
