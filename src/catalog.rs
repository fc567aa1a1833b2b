//! Catalog generation over a directory of converted unit documents.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use parser_mtf::CanonicalUnit;

/// File name of the generated catalog
pub const CATALOG_FILE_NAME: &str = "index.json";

/// One catalog row per converted unit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub chassis: String,
    pub model: String,
    pub tonnage: u32,
    pub tech_base: String,
    pub year: i32,
    pub role: String,
    pub rules_level: String,
    /// Path of the document relative to the output directory, with
    /// forward slashes
    pub path: String,
}

/// Catalog of all converted units
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub version: String,
    pub generated_at: String,
    pub total_units: usize,
    pub units: Vec<CatalogEntry>,
}

/// Walk `output_dir`, index every unit document found, and write
/// `index.json` beside them. Documents that fail to read or parse are
/// logged and left out of the catalog.
pub fn generate_catalog(output_dir: &Path) -> Result<Catalog> {
    let mut units = Vec::new();

    for entry in WalkDir::new(output_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().map_or(true, |ext| ext != "json")
            || path.file_name().is_some_and(|name| name == CATALOG_FILE_NAME)
        {
            continue;
        }

        let unit: CanonicalUnit = match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| serde_json::from_str(&content).map_err(anyhow::Error::from))
        {
            Ok(unit) => unit,
            Err(e) => {
                warn!("Error indexing {}: {}", path.display(), e);
                continue;
            }
        };

        let relative = path.strip_prefix(output_dir).unwrap_or(path);
        units.push(CatalogEntry {
            id: unit.id,
            chassis: unit.chassis,
            model: unit.model,
            tonnage: unit.tonnage,
            tech_base: unit.tech_base,
            year: unit.year,
            role: unit.role.unwrap_or_default(),
            rules_level: unit.rules_level,
            path: relative.to_string_lossy().replace('\\', "/"),
        });
    }

    units.sort_by(|a, b| {
        (a.chassis.as_str(), a.model.as_str()).cmp(&(b.chassis.as_str(), b.model.as_str()))
    });

    let catalog = Catalog {
        version: "1.0.0".to_string(),
        generated_at: Utc::now().to_rfc3339(),
        total_units: units.len(),
        units,
    };

    let json = serde_json::to_string_pretty(&catalog)?;
    std::fs::write(output_dir.join(CATALOG_FILE_NAME), json)?;

    info!("Catalog written with {} units", catalog.total_units);

    Ok(catalog)
}
