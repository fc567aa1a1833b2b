use std::path::PathBuf;

use anyhow::Result;

use mtf_scanner::{ScannerConfig, UnitScanner, convert_directory, generate_catalog};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Example 1: Parse a single unit file
    println!("\n=== Parsing a single unit ===");
    let unit_file = PathBuf::from("path/to/your/Atlas AS7-D.mtf");
    match parser_mtf::parse_unit_file(&unit_file) {
        Ok(Some(unit)) => {
            println!("Unit: {} {}", unit.chassis, unit.model);
            println!("  Tonnage: {}", unit.tonnage);
            println!("  Era: {} ({})", unit.era, unit.year);
            println!("  Equipment: {} items", unit.equipment.len());
            for equip in unit.equipment.iter().take(5) {
                println!("    - {} ({})", equip.id, equip.location);
            }
        }
        Ok(None) => println!("Record could not produce a unit"),
        Err(e) => println!("Error reading unit file: {}", e),
    }

    // Example 2: Scan a directory for unit files
    println!("\n=== Scanning a directory ===");
    let units_dir = PathBuf::from("path/to/your/mekfiles");
    let scanner = UnitScanner::new(&units_dir);
    match scanner.scan() {
        Ok(files) => println!("Found {} unit files", files.len()),
        Err(e) => println!("Error scanning: {}", e),
    }

    // Example 3: Batch conversion with an era filter and catalog
    println!("\n=== Batch conversion ===");
    let output_dir = PathBuf::from("path/to/output");
    let config = ScannerConfig {
        era_filter: Some("succession-wars".to_string()),
        ..ScannerConfig::default()
    };
    match convert_directory(&units_dir, &output_dir, &config) {
        Ok(stats) => {
            println!("Converted: {}", stats.converted);
            println!("Failed: {}", stats.failed);
            println!("Skipped: {}", stats.skipped);

            let catalog = generate_catalog(&output_dir)?;
            println!("Catalog entries: {}", catalog.total_units);
        }
        Err(e) => println!("Error converting: {}", e),
    }

    Ok(())
}
