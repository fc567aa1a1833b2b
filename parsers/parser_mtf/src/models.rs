//! Canonical output document for a parsed unit record.
//!
//! These types serialize to the camelCase JSON document consumed by
//! downstream tooling. Optional fields are skipped entirely when
//! absent, so a minimal record produces a minimal document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    #[serde(rename = "type")]
    pub engine_type: String,
    pub rating: u32,
}

/// Gyro configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gyro {
    #[serde(rename = "type")]
    pub gyro_type: String,
}

/// Internal structure configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    #[serde(rename = "type")]
    pub structure_type: String,
}

/// Armor points assigned to a single location.
///
/// Torso locations with rear armor collapse into the composite form;
/// everything else stays a plain point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArmorValue {
    Points(u32),
    FrontRear { front: u32, rear: u32 },
}

/// Armor configuration and per-location allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    #[serde(rename = "type")]
    pub armor_type: String,
    pub allocation: BTreeMap<String, ArmorValue>,
}

/// Heat sink configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatSinks {
    #[serde(rename = "type")]
    pub sink_type: String,
    pub count: u32,
}

/// Movement profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub walk: u32,
    pub jump: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jump_jet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancements: Option<Vec<String>>,
}

/// A single mounted equipment item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_rear_mounted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_ammo: Option<String>,
}

/// Narrative and manufacturer data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fluff {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_factory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_manufacturer: Option<BTreeMap<String, String>>,
}

/// Complete canonical unit document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalUnit {
    pub id: String,
    pub chassis: String,
    pub model: String,
    pub unit_type: String,
    pub configuration: String,
    pub tech_base: String,
    pub rules_level: String,
    pub era: String,
    pub year: i32,
    pub tonnage: u32,
    pub engine: Engine,
    pub gyro: Gyro,
    pub cockpit: String,
    pub structure: Structure,
    pub armor: Armor,
    pub heat_sinks: HeatSinks,
    pub movement: Movement,
    pub equipment: Vec<Equipment>,
    /// Fixed-capacity slot sequence per canonical location name
    pub critical_slots: BTreeMap<String, Vec<Option<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quirks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluff: Option<Fluff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mul_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
