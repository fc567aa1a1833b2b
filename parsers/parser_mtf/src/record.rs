//! Intermediate representation produced by the line scan.
//!
//! A `RawRecord` belongs to exactly one parse call: built up line by
//! line, consumed once by the assembler, then discarded.

use std::collections::{BTreeMap, HashMap};

/// Sub-parsed `engine:` field, e.g. `300 Fusion Engine(IS)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineField {
    pub rating: u32,
    pub kind: String,
}

/// Sub-parsed `heat sinks:` field, e.g. `20 Double`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatSinkField {
    pub count: u32,
    pub kind: String,
}

/// One weapon mention from the weapons section, as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponMention {
    pub name: String,
    pub location: String,
}

/// Raw fields captured from a single unit record
#[derive(Debug, Default)]
pub struct RawRecord {
    pub chassis: Option<String>,
    pub model: Option<String>,
    pub mul_id: Option<u32>,
    pub config: Option<String>,
    pub tech_base: Option<String>,
    /// Kept as written; resolved to a year at assembly time
    pub era: Option<String>,
    pub source: Option<String>,
    pub rules_level: Option<String>,
    pub role: Option<String>,
    pub mass: Option<u32>,
    pub engine: Option<EngineField>,
    pub structure: Option<String>,
    pub heat_sinks: Option<HeatSinkField>,
    pub walk_mp: Option<u32>,
    pub jump_mp: Option<u32>,
    pub armor_type: Option<String>,
    pub manufacturer: Option<String>,
    pub primary_factory: Option<String>,
    pub quirks: Vec<String>,
    pub weapons: Vec<WeaponMention>,
    /// Raw content lines per location section header
    pub criticals: HashMap<String, Vec<String>>,
    /// Armor points per short location code (e.g. `LA`, `RTC`)
    pub armor_allocation: HashMap<String, u32>,
    /// Accumulated narrative text per fluff field name
    pub fluff: HashMap<String, String>,
    pub system_manufacturers: BTreeMap<String, String>,
}
