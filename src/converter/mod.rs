use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rayon::prelude::*;

use parser_mtf::{CanonicalUnit, vocab};

use crate::scanner::collect_unit_files_with_config;
use crate::types::{ConversionStats, ScannerConfig, SkipReason};
use crate::utils::create_dir_if_not_exists;

/// Outcome of converting a single unit file
enum Outcome {
    Converted,
    Skipped(SkipReason),
}

/// Convert a single unit file, writing the JSON document to `output`.
///
/// Returns `Ok(false)` when the record is unparsable (no chassis);
/// read and write failures are errors.
pub fn convert_file(input: &Path, output: &Path) -> Result<bool> {
    match parser_mtf::parse_unit_file(input)? {
        Some(unit) => {
            write_unit(&unit, output)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Output location for a converted unit:
/// `<era-folder>/<rules-level-folder>/<Chassis Model>.json`.
pub fn output_path_for(unit: &CanonicalUnit, output_dir: &Path) -> PathBuf {
    let era_folder = vocab::era_folder_name(&unit.era);
    let rules_folder = vocab::rules_level_folder_name(&unit.rules_level);
    let file_name = sanitize_file_name(&format!("{} {}", unit.chassis, unit.model));

    output_dir
        .join(era_folder)
        .join(rules_folder)
        .join(format!("{}.json", file_name))
}

/// Replace characters that are invalid in filenames
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            other => other,
        })
        .collect()
}

/// Convert every unit file under `source_dir` into JSON documents under
/// `output_dir`.
///
/// Files convert independently and in parallel; a file that fails to
/// parse or write is logged and counted, never fatal to the batch.
pub fn convert_directory(
    source_dir: &Path,
    output_dir: &Path,
    config: &ScannerConfig,
) -> Result<ConversionStats> {
    info!("Converting unit files from {}", source_dir.display());
    debug!("Configuration: {:?}", config);

    if !source_dir.exists() {
        return Err(anyhow!(
            "Source directory does not exist: {}",
            source_dir.display()
        ));
    }

    if let Err(e) = std::fs::read_dir(source_dir) {
        return Err(anyhow!(
            "Source directory is not readable: {} - {}",
            source_dir.display(),
            e
        ));
    }

    let unit_files = collect_unit_files_with_config(source_dir, config)?;

    if unit_files.is_empty() {
        warn!("No unit files found in {}", source_dir.display());
        return Ok(ConversionStats::default());
    }

    info!("Found {} unit files", unit_files.len());

    let progress = ProgressBar::new(unit_files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    progress.set_message("Converting unit files");

    let outcomes: Vec<Outcome> = unit_files
        .par_iter()
        .progress_with(progress.clone())
        .map(|path| convert_one(path, output_dir, config))
        .collect();

    let mut stats = ConversionStats {
        total: unit_files.len(),
        ..ConversionStats::default()
    };
    for outcome in outcomes {
        match outcome {
            Outcome::Converted => stats.converted += 1,
            Outcome::Skipped(SkipReason::EraFiltered) => stats.skipped += 1,
            Outcome::Skipped(_) => stats.failed += 1,
        }
    }

    progress.finish_with_message(format!("Converted {} units", stats.converted));

    Ok(stats)
}

fn convert_one(path: &Path, output_dir: &Path, config: &ScannerConfig) -> Outcome {
    let unit = match parser_mtf::parse_unit_file(path) {
        Ok(Some(unit)) => unit,
        Ok(None) => {
            warn!("Failed to parse: {}", path.display());
            return Outcome::Skipped(SkipReason::Unparsable);
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return Outcome::Skipped(SkipReason::Failed(e.to_string()));
        }
    };

    if let Some(filter) = &config.era_filter {
        let era_folder = vocab::era_folder_name(&unit.era);
        if !era_folder.contains(&filter.to_lowercase()) {
            debug!("Skipping {} ({})", unit.id, SkipReason::EraFiltered);
            return Outcome::Skipped(SkipReason::EraFiltered);
        }
    }

    let output_path = output_path_for(&unit, output_dir);
    match write_unit(&unit, &output_path) {
        Ok(()) => {
            debug!("Converted {} -> {}", path.display(), output_path.display());
            Outcome::Converted
        }
        Err(e) => {
            warn!("Failed to write {}: {}", output_path.display(), e);
            Outcome::Skipped(SkipReason::Failed(e.to_string()))
        }
    }
}

fn write_unit(unit: &CanonicalUnit, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_if_not_exists(parent)?;
    }

    let json = serde_json::to_string_pretty(unit)?;
    std::fs::write(path, json)?;

    Ok(())
}
