//! Vocabulary normalization tables.
//!
//! Pure lookup functions translating the free-text vocabulary found in
//! MTF records into the canonical labels used by the output document.
//! Every mapper has a defined fallback for unrecognized input.

/// Map a location name or short code to its canonical label.
///
/// Accepts the long section-header names (`Left Arm`) as well as the
/// two-letter codes used elsewhere in the format. Unrecognized input
/// falls back to upper-cased, underscore-joined text.
pub fn map_location(raw: &str) -> String {
    match raw.trim() {
        "Head" | "HD" => "HEAD".to_string(),
        "Center Torso" | "CT" => "CENTER_TORSO".to_string(),
        "Left Torso" | "LT" => "LEFT_TORSO".to_string(),
        "Right Torso" | "RT" => "RIGHT_TORSO".to_string(),
        "Left Arm" | "LA" => "LEFT_ARM".to_string(),
        "Right Arm" | "RA" => "RIGHT_ARM".to_string(),
        "Left Leg" | "LL" => "LEFT_LEG".to_string(),
        "Right Leg" | "RL" => "RIGHT_LEG".to_string(),
        "Front Left Leg" | "FLL" => "FRONT_LEFT_LEG".to_string(),
        "Front Right Leg" | "FRL" => "FRONT_RIGHT_LEG".to_string(),
        "Rear Left Leg" | "RLL" => "REAR_LEFT_LEG".to_string(),
        "Rear Right Leg" | "RRL" => "REAR_RIGHT_LEG".to_string(),
        "Center Leg" | "CL" => "CENTER_LEG".to_string(),
        other => other.to_uppercase().replace(' ', "_"),
    }
}

/// Map a short armor code to a canonical location label, where the
/// rear-facing torso codes map to `<TORSO>_REAR`. Unrecognized codes
/// pass through unchanged.
pub fn map_armor_code(code: &str) -> String {
    match code {
        "HD" => "HEAD".to_string(),
        "CT" => "CENTER_TORSO".to_string(),
        "LT" => "LEFT_TORSO".to_string(),
        "RT" => "RIGHT_TORSO".to_string(),
        "LA" => "LEFT_ARM".to_string(),
        "RA" => "RIGHT_ARM".to_string(),
        "LL" => "LEFT_LEG".to_string(),
        "RL" => "RIGHT_LEG".to_string(),
        "RTC" => "CENTER_TORSO_REAR".to_string(),
        "RTL" => "LEFT_TORSO_REAR".to_string(),
        "RTR" => "RIGHT_TORSO_REAR".to_string(),
        other => other.to_string(),
    }
}

/// Canonical critical-slot capacity for a location.
///
/// Head and every leg-type location hold 6 slots; torsos and arms hold
/// 12. Unrecognized locations default to 12.
pub fn slot_capacity(canonical: &str) -> usize {
    match canonical {
        "HEAD" | "LEFT_LEG" | "RIGHT_LEG" | "CENTER_LEG" | "FRONT_LEFT_LEG"
        | "FRONT_RIGHT_LEG" | "REAR_LEFT_LEG" | "REAR_RIGHT_LEG" => 6,
        _ => 12,
    }
}

/// Tech base label; falls back to `INNER_SPHERE`.
pub fn map_tech_base(raw: &str) -> String {
    let value = raw.trim().to_lowercase();
    if value.starts_with("mixed") {
        "MIXED".to_string()
    } else if value.contains("clan") {
        "CLAN".to_string()
    } else {
        "INNER_SPHERE".to_string()
    }
}

/// Rules level label; falls back to `STANDARD`.
pub fn map_rules_level(raw: &str) -> String {
    match raw.trim() {
        "1" => "INTRODUCTORY".to_string(),
        "2" => "STANDARD".to_string(),
        "3" => "ADVANCED".to_string(),
        "4" => "EXPERIMENTAL".to_string(),
        _ => "STANDARD".to_string(),
    }
}

/// Engine type label; falls back to `FUSION`.
pub fn map_engine_type(raw: &str) -> String {
    let value = raw.to_lowercase();
    if value.contains("xxl") {
        "XXL".to_string()
    } else if value.contains("xl") {
        "XL".to_string()
    } else if value.contains("light") {
        "LIGHT".to_string()
    } else if value.contains("compact") {
        "COMPACT".to_string()
    } else if value.contains("ice") {
        "ICE".to_string()
    } else if value.contains("fuel cell") || value.contains("fuel-cell") {
        "FUEL_CELL".to_string()
    } else if value.contains("fission") {
        "FISSION".to_string()
    } else {
        "FUSION".to_string()
    }
}

/// Internal structure type label; falls back to `STANDARD`.
pub fn map_structure_type(raw: &str) -> String {
    let value = raw.to_lowercase();
    if value.contains("endo-composite") || value.contains("endo composite") {
        "ENDO_COMPOSITE".to_string()
    } else if value.contains("endo") {
        "ENDO_STEEL".to_string()
    } else if value.contains("composite") {
        "COMPOSITE".to_string()
    } else if value.contains("reinforced") {
        "REINFORCED".to_string()
    } else if value.contains("industrial") {
        "INDUSTRIAL".to_string()
    } else {
        "STANDARD".to_string()
    }
}

/// Armor type label; falls back to `STANDARD`.
pub fn map_armor_type(raw: &str) -> String {
    let value = raw.to_lowercase();
    if value.contains("light ferro") {
        "LIGHT_FERRO_FIBROUS".to_string()
    } else if value.contains("heavy ferro") {
        "HEAVY_FERRO_FIBROUS".to_string()
    } else if value.contains("ferro") {
        "FERRO_FIBROUS".to_string()
    } else if value.contains("stealth") {
        "STEALTH".to_string()
    } else if value.contains("hardened") {
        "HARDENED".to_string()
    } else if value.contains("reactive") {
        "REACTIVE".to_string()
    } else if value.contains("reflective") {
        "REFLECTIVE".to_string()
    } else if value.contains("industrial") {
        "INDUSTRIAL".to_string()
    } else {
        "STANDARD".to_string()
    }
}

/// Heat sink type label; falls back to `SINGLE`.
pub fn map_heat_sink_type(raw: &str) -> String {
    let value = raw.to_lowercase();
    if value.contains("double") {
        "DOUBLE".to_string()
    } else if value.contains("laser") {
        "LASER".to_string()
    } else if value.contains("compact") {
        "COMPACT".to_string()
    } else {
        "SINGLE".to_string()
    }
}

/// Unit type from the `Config:` value.
pub fn map_unit_type(config: &str) -> String {
    if config.to_lowercase().contains("omnimech") {
        "OMNIMECH".to_string()
    } else {
        "BATTLEMECH".to_string()
    }
}

/// Chassis configuration from the `Config:` value; falls back to `BIPED`.
pub fn map_configuration(config: &str) -> String {
    let value = config.to_lowercase();
    if value.contains("quad") {
        "QUAD".to_string()
    } else if value.contains("tripod") {
        "TRIPOD".to_string()
    } else if value.contains("lam") {
        "LAM".to_string()
    } else {
        "BIPED".to_string()
    }
}

/// Classify a year into its era label.
pub fn map_year_to_era(year: i32) -> String {
    let era = match year {
        i32::MIN..=2570 => "AGE_OF_WAR",
        2571..=2780 => "STAR_LEAGUE",
        2781..=3049 => "SUCCESSION_WARS",
        3050..=3061 => "CLAN_INVASION",
        3062..=3067 => "CIVIL_WAR",
        3068..=3080 => "JIHAD",
        3081..=3150 => "DARK_AGE",
        _ => "ILCLAN",
    };
    era.to_string()
}

/// Output folder name for an era label, e.g. `SUCCESSION_WARS` ->
/// `succession-wars`.
pub fn era_folder_name(era: &str) -> String {
    era.to_lowercase().replace('_', "-")
}

/// Output folder name for a rules level label.
pub fn rules_level_folder_name(rules_level: &str) -> String {
    rules_level.to_lowercase().replace('_', "-")
}

/// Stable unit identifier derived from chassis and model.
pub fn generate_id(chassis: &str, model: &str) -> String {
    slugify(&format!("{} {}", chassis, model))
}

/// Stable equipment identifier derived from a cleaned display name.
pub fn normalize_equipment_id(name: &str) -> String {
    slugify(name)
}

/// Lower-case, replace every non-alphanumeric run with a single dash,
/// and trim leading/trailing dashes.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
