pub mod catalog;
pub mod converter;
pub mod scanner;
pub mod types;
pub mod utils;

pub use types::{
    ConversionStats,
    ScannerConfig,
    SkipReason,
};

pub use scanner::{
    UnitScanner,
    collect_unit_files,
    collect_unit_files_with_config,
};

pub use converter::{
    convert_directory,
    convert_file,
};

pub use catalog::generate_catalog;
