use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::types::ScannerConfig;
use crate::utils::find_files_by_extensions;

/// Collect unit record files from a directory with default configuration
pub fn collect_unit_files(dir: &Path) -> Result<Vec<PathBuf>> {
    collect_unit_files_with_config(dir, &ScannerConfig::default())
}

/// Collect unit record files from a directory, recursively, filtered by
/// the configured extensions. The result is sorted for deterministic
/// batch ordering.
pub fn collect_unit_files_with_config(dir: &Path, config: &ScannerConfig) -> Result<Vec<PathBuf>> {
    let mut files = find_files_by_extensions(dir, &config.file_extensions);
    files.sort();

    for file in &files {
        debug!("Found unit file: {}", file.display());
    }

    Ok(files)
}
