mod collector;

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::info;

use crate::types::ScannerConfig;

pub use collector::{collect_unit_files, collect_unit_files_with_config};

/// Scanner for unit record files
pub struct UnitScanner<'a> {
    /// Directory containing unit files to scan
    input_dir: &'a Path,
    /// Configuration options
    config: ScannerConfig,
}

impl<'a> UnitScanner<'a> {
    /// Create a new unit scanner
    pub fn new(input_dir: &'a Path) -> Self {
        Self {
            input_dir,
            config: ScannerConfig::default(),
        }
    }

    /// Create a new unit scanner with custom configuration
    pub fn with_config(input_dir: &'a Path, config: ScannerConfig) -> Self {
        Self { input_dir, config }
    }

    /// Scan for unit files
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        info!("Scanning for unit files in {}", self.input_dir.display());

        if !self.input_dir.exists() {
            return Err(anyhow!(
                "Input directory does not exist: {}",
                self.input_dir.display()
            ));
        }

        if let Err(e) = std::fs::read_dir(self.input_dir) {
            return Err(anyhow!(
                "Input directory is not readable: {} - {}",
                self.input_dir.display(),
                e
            ));
        }

        let files = collect_unit_files_with_config(self.input_dir, &self.config)?;
        info!("Found {} unit files", files.len());

        Ok(files)
    }
}
