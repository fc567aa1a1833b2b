use std::fmt;

/// Configuration for the unit conversion process
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Only convert units whose era folder name contains this filter
    /// (case-insensitive); `None` converts everything
    pub era_filter: Option<String>,
    /// File extensions treated as unit record files
    pub file_extensions: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            era_filter: None,
            file_extensions: vec!["mtf".to_string()],
        }
    }
}

/// Statistics about a batch conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Total number of unit files found
    pub total: usize,
    /// Number of units converted successfully
    pub converted: usize,
    /// Number of units that failed to parse, read, or write
    pub failed: usize,
    /// Number of units skipped by the era filter
    pub skipped: usize,
}

/// Reason why a unit file did not produce an output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The record could not produce a unit (e.g. no chassis field)
    Unparsable,
    /// The unit's era did not match the configured filter
    EraFiltered,
    /// Reading or writing failed (with description)
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unparsable => write!(f, "Unparsable"),
            SkipReason::EraFiltered => write!(f, "Era filtered"),
            SkipReason::Failed(reason) => write!(f, "Failed: {}", reason),
        }
    }
}
