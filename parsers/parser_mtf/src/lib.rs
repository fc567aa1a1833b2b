//! Parser for MegaMek MTF unit record files.
//!
//! An MTF file is a line-oriented, semi-structured description of a
//! single armored combat unit: key-value header fields, per-location
//! critical-slot sections, a weapons list, and multi-line narrative
//! blocks. This crate scans that text once, top to bottom, and
//! assembles it into a fully typed [`CanonicalUnit`] document.
//!
//! # Examples
//!
//! ```
//! use parser_mtf::parse_unit;
//!
//! let content = "\
//! chassis:Atlas
//! model:AS7-D
//! mass:100
//! engine:300 Fusion Engine(IS)
//! ";
//! let unit = parse_unit(content).expect("record has a chassis");
//! assert_eq!(unit.id, "atlas-as7-d");
//! assert_eq!(unit.engine.rating, 300);
//! ```
//!
//! A record without a `chassis:` line cannot produce a unit and yields
//! `None`; malformed scalar fields never fail the parse, they fall back
//! to defaults.

mod assembler;
mod parser;
mod record;

pub mod models;
pub mod vocab;

use std::path::Path;

pub use models::{
    Armor, ArmorValue, CanonicalUnit, Engine, Equipment, Fluff, Gyro, HeatSinks, Movement,
    Structure,
};

/// Error type for file-level parsing operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read unit file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for file-level parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Parse MTF content into a canonical unit.
///
/// Returns `None` when the record lacks a chassis field.
pub fn parse_unit(content: &str) -> Option<CanonicalUnit> {
    assembler::assemble(parser::scan_record(content))
}

/// Parse an MTF file from disk.
///
/// The format predates UTF-8 and files in the wild carry stray latin-1
/// bytes, so the content is decoded lossily rather than rejected.
pub fn parse_unit_file(path: &Path) -> Result<Option<CanonicalUnit>> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(parse_unit(&content))
}
