use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use mtf_scanner::{ScannerConfig, catalog, converter};

/// Convert MTF unit record files to canonical JSON documents
#[derive(Parser, Debug)]
#[command(name = "mtf-scanner", version, about)]
struct Args {
    /// Source directory containing MTF files
    #[arg(short, long)]
    source: PathBuf,

    /// Output directory for JSON documents
    #[arg(short, long)]
    output: PathBuf,

    /// Filter by era folder name (e.g. "succession-wars")
    #[arg(short, long)]
    era: Option<String>,

    /// Generate index.json after conversion
    #[arg(short = 'i', long)]
    generate_index: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("Converting unit files from: {}", args.source.display());
    info!("Output directory: {}", args.output.display());

    let config = ScannerConfig {
        era_filter: args.era,
        ..ScannerConfig::default()
    };

    let stats = converter::convert_directory(&args.source, &args.output, &config)?;

    println!("Conversion complete:");
    println!("  Converted: {}", stats.converted);
    println!("  Failed: {}", stats.failed);
    if stats.skipped > 0 {
        println!("  Skipped (era filter): {}", stats.skipped);
    }

    if args.generate_index {
        let index = catalog::generate_catalog(&args.output)?;
        println!("Index generated with {} units", index.total_units);
    }

    Ok(())
}
