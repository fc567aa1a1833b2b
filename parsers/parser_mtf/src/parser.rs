//! Stateful line scan of an MTF record.
//!
//! One pass, top to bottom. Each line is classified against the current
//! scan state: narrative headers open a fluff buffer, recognized
//! location headers open a critical-slot section, `weapons:` opens the
//! weapons list, and everything with a colon left over is a key-value
//! field. Accumulated buffers flush into the record whenever the
//! context changes and once more at end of input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{EngineField, HeatSinkField, RawRecord, WeaponMention};

/// Narrative fields recognized as fluff headers, matched
/// case-insensitively against the start of a line.
const FLUFF_FIELDS: &[&str] = &[
    "overview",
    "capabilities",
    "deployment",
    "history",
    "variants",
    "notable_pilots",
    "notes",
];

/// Location names recognized as critical-slot section headers.
const SECTION_LOCATIONS: &[&str] = &[
    "Head",
    "Center Torso",
    "Left Torso",
    "Right Torso",
    "Left Arm",
    "Right Arm",
    "Left Leg",
    "Right Leg",
    "Front Left Leg",
    "Front Right Leg",
    "Rear Left Leg",
    "Rear Right Leg",
    "Center Leg",
];

static ENGINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s*(.*?)(?:\(([^)]+)\))?$").unwrap());

static HEAT_SINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*(.*)$").unwrap());

/// Current collection target of the scan.
///
/// A fluff buffer interrupts whatever was open and remembers it in
/// `resume`: a blank line closes the fluff field without disturbing an
/// open section or the weapons list.
#[derive(Debug)]
enum ScanState {
    Neutral,
    InSection {
        location: String,
        lines: Vec<String>,
    },
    InWeapons,
    InFluff {
        field: String,
        lines: Vec<String>,
        resume: Box<ScanState>,
    },
}

/// Scan record text into its raw intermediate form.
pub(crate) fn scan_record(content: &str) -> RawRecord {
    let mut record = RawRecord::default();
    let mut state = ScanState::Neutral;

    for raw_line in content.lines() {
        let line = raw_line.trim();

        // Blank lines and comments close an open fluff buffer but leave
        // section/weapons context intact.
        if line.is_empty() || line.starts_with('#') {
            if matches!(state, ScanState::InFluff { .. }) {
                state = flush_fluff(state, &mut record);
            }
            continue;
        }

        if let Some((field, remainder)) = match_fluff_header(line) {
            let resume = match std::mem::replace(&mut state, ScanState::Neutral) {
                ScanState::InFluff {
                    field: open_field,
                    lines,
                    resume,
                } => {
                    store_fluff(&mut record, open_field, lines);
                    resume
                }
                other => Box::new(other),
            };
            state = ScanState::InFluff {
                field: field.to_string(),
                lines: vec![remainder.to_string()],
                resume,
            };
            continue;
        }

        // Fluff bodies are not scanned for further structure.
        if let ScanState::InFluff { lines, .. } = &mut state {
            lines.push(line.to_string());
            continue;
        }

        if let Some(location) = match_section_header(line) {
            flush_section(&mut state, &mut record);
            state = ScanState::InSection {
                location: location.to_string(),
                lines: Vec::new(),
            };
            continue;
        }

        if line.to_lowercase().starts_with("weapons:") {
            flush_section(&mut state, &mut record);
            state = ScanState::InWeapons;
            continue;
        }

        if matches!(state, ScanState::InWeapons) {
            // e.g. "Medium Laser, Left Arm"
            if let Some((name, location)) = line.split_once(',') {
                record.weapons.push(WeaponMention {
                    name: name.trim().to_string(),
                    location: location.trim().to_string(),
                });
            }
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_lowercase().replace(' ', "_");
            apply_field(&mut record, &key, value.trim());
            continue;
        }

        if let ScanState::InSection { lines, .. } = &mut state {
            lines.push(line.to_string());
        }
        // Anything else is ignored.
    }

    // Flush whatever is still open at end of input.
    let mut state = flush_fluff(state, &mut record);
    flush_section(&mut state, &mut record);

    record
}

/// Match a fluff header, returning the field name and the text after
/// the colon.
fn match_fluff_header(line: &str) -> Option<(&'static str, &str)> {
    let lower = line.to_lowercase();
    for field in FLUFF_FIELDS.iter().copied() {
        if lower.starts_with(field) && lower[field.len()..].starts_with(':') {
            return Some((field, line[field.len() + 1..].trim()));
        }
    }
    None
}

/// Match a location section header: the line ends with the only colon
/// and the text before it is a recognized location name.
fn match_section_header(line: &str) -> Option<&'static str> {
    let name = line.strip_suffix(':')?;
    if name.contains(':') {
        return None;
    }
    SECTION_LOCATIONS.iter().find(|loc| **loc == name).copied()
}

/// Save an open section's lines into the criticals map.
fn flush_section(state: &mut ScanState, record: &mut RawRecord) {
    if let ScanState::InSection { location, lines } =
        std::mem::replace(state, ScanState::Neutral)
    {
        if !lines.is_empty() {
            record.criticals.insert(location, lines);
        }
    }
}

/// Close an open fluff buffer and restore the interrupted state.
fn flush_fluff(state: ScanState, record: &mut RawRecord) -> ScanState {
    match state {
        ScanState::InFluff {
            field,
            lines,
            resume,
        } => {
            store_fluff(record, field, lines);
            *resume
        }
        other => other,
    }
}

fn store_fluff(record: &mut RawRecord, field: String, lines: Vec<String>) {
    record.fluff.insert(field, lines.join("\n").trim().to_string());
}

/// Dispatch one normalized key to its field strategy. Unrecognized
/// keys are ignored; malformed scalars fall back to defaults rather
/// than failing the parse.
fn apply_field(record: &mut RawRecord, key: &str, value: &str) {
    match key {
        "chassis" => record.chassis = Some(value.to_string()),
        "model" => record.model = Some(value.to_string()),
        "mul_id" => record.mul_id = value.parse().ok(),
        "config" => record.config = Some(value.to_string()),
        "techbase" => record.tech_base = Some(value.to_string()),
        "era" => record.era = Some(value.to_string()),
        "source" => record.source = Some(value.to_string()),
        "rules_level" => record.rules_level = Some(value.to_string()),
        "role" => record.role = Some(value.to_string()),
        // Mass is written with a fractional part in some records.
        "mass" => record.mass = Some(value.parse::<f64>().map(|m| m as u32).unwrap_or(0)),
        "engine" => record.engine = Some(parse_engine(value)),
        "structure" => record.structure = Some(value.to_string()),
        "heat_sinks" => record.heat_sinks = Some(parse_heat_sinks(value)),
        "walk_mp" => record.walk_mp = Some(value.parse().unwrap_or(0)),
        "jump_mp" => record.jump_mp = Some(value.parse().unwrap_or(0)),
        "armor" => record.armor_type = Some(value.to_string()),
        "quirk" => record.quirks.push(value.to_string()),
        "manufacturer" => record.manufacturer = Some(value.to_string()),
        "primaryfactory" => record.primary_factory = Some(value.to_string()),
        // e.g. "CHASSIS:Foundation Type 10X"
        "systemmanufacturer" => {
            if let Some((subsystem, name)) = value.split_once(':') {
                record
                    .system_manufacturers
                    .insert(subsystem.trim().to_string(), name.trim().to_string());
            }
        }
        _ if key.ends_with("armor") => apply_armor_entry(record, key, value),
        _ => {}
    }
}

/// Per-location armor point entry, e.g. `la_armor` -> `LA`. Entries
/// with unparsable values are dropped.
fn apply_armor_entry(record: &mut RawRecord, key: &str, value: &str) {
    let code = key
        .strip_suffix("_armor")
        .or_else(|| key.strip_suffix("armor"))
        .unwrap_or(key)
        .trim_matches('_')
        .to_uppercase();
    if code.is_empty() {
        return;
    }
    if let Ok(points) = value.parse::<u32>() {
        record.armor_allocation.insert(code, points);
    }
}

/// Parse an engine descriptor like `300 Fusion Engine(IS)`.
///
/// A trailing parenthetical qualifier is folded back into the type as
/// `Type(Qualifier)`. If the pattern does not match at all, the rating
/// defaults to 0 and the raw string becomes the type.
fn parse_engine(value: &str) -> EngineField {
    match ENGINE_RE.captures(value) {
        Some(caps) => {
            let rating = caps[1].parse().unwrap_or(0);
            let base = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            let kind = match caps.get(3) {
                Some(qualifier) => format!("{}({})", base, qualifier.as_str()),
                None => base.to_string(),
            };
            EngineField { rating, kind }
        }
        None => EngineField {
            rating: 0,
            kind: value.to_string(),
        },
    }
}

/// Parse a heat sink descriptor like `20 Double`; the type defaults to
/// `Single` when absent.
fn parse_heat_sinks(value: &str) -> HeatSinkField {
    match HEAT_SINK_RE.captures(value) {
        Some(caps) => {
            let count = caps[1].parse().unwrap_or(0);
            let kind = caps[2].trim();
            HeatSinkField {
                count,
                kind: if kind.is_empty() {
                    "Single".to_string()
                } else {
                    kind.to_string()
                },
            }
        }
        None => HeatSinkField {
            count: 10,
            kind: "Single".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalar_fields_are_captured() {
        let record = scan_record(
            "chassis:Atlas\nmodel:AS7-D\nmul id:104\nmass:100.0\nwalk mp:3\njump mp:0\n",
        );
        assert_eq!(record.chassis.as_deref(), Some("Atlas"));
        assert_eq!(record.model.as_deref(), Some("AS7-D"));
        assert_eq!(record.mul_id, Some(104));
        assert_eq!(record.mass, Some(100));
        assert_eq!(record.walk_mp, Some(3));
        assert_eq!(record.jump_mp, Some(0));
    }

    #[test]
    fn malformed_numeric_fields_fall_back() {
        let record = scan_record("mass:heavy\nwalk mp:fast\nmul id:abc\n");
        assert_eq!(record.mass, Some(0));
        assert_eq!(record.walk_mp, Some(0));
        assert_eq!(record.mul_id, None);
    }

    #[test]
    fn engine_sub_parse() {
        let engine = parse_engine("300 Fusion Engine(IS)");
        assert_eq!(engine.rating, 300);
        assert_eq!(engine.kind, "Fusion Engine(IS)");

        let engine = parse_engine("400 XL Engine");
        assert_eq!(engine.rating, 400);
        assert_eq!(engine.kind, "XL Engine");

        let engine = parse_engine("not an engine");
        assert_eq!(engine.rating, 0);
        assert_eq!(engine.kind, "not an engine");
    }

    #[test]
    fn heat_sink_sub_parse() {
        let sinks = parse_heat_sinks("20 Double");
        assert_eq!(sinks.count, 20);
        assert_eq!(sinks.kind, "Double");

        let sinks = parse_heat_sinks("10");
        assert_eq!(sinks.count, 10);
        assert_eq!(sinks.kind, "Single");

        let sinks = parse_heat_sinks("none");
        assert_eq!(sinks.count, 10);
        assert_eq!(sinks.kind, "Single");
    }

    #[test]
    fn armor_entries_by_location_code() {
        let record = scan_record("LA armor:34\nRTC armor:14\nHD armor:bad\narmor:Standard\n");
        assert_eq!(record.armor_allocation.get("LA"), Some(&34));
        assert_eq!(record.armor_allocation.get("RTC"), Some(&14));
        // unparsable values are dropped
        assert!(!record.armor_allocation.contains_key("HD"));
        // bare "armor" is the armor type, not an allocation
        assert_eq!(record.armor_type.as_deref(), Some("Standard"));
    }

    #[test]
    fn quirks_accumulate_in_order() {
        let record = scan_record("quirk:battle_fists_la\nquirk:command_mech\nquirk:battle_fists_la\n");
        assert_eq!(
            record.quirks,
            vec!["battle_fists_la", "command_mech", "battle_fists_la"]
        );
    }

    #[test]
    fn system_manufacturer_entries_split_on_first_colon() {
        let record =
            scan_record("systemmanufacturer:CHASSIS:Foundation Type 10X\nsystemmanufacturer:ENGINE:Vlar 300\n");
        assert_eq!(
            record.system_manufacturers.get("CHASSIS").map(String::as_str),
            Some("Foundation Type 10X")
        );
        assert_eq!(
            record.system_manufacturers.get("ENGINE").map(String::as_str),
            Some("Vlar 300")
        );
    }

    #[test]
    fn section_lines_accumulate_per_location() {
        let record = scan_record(
            "Left Arm:\nShoulder\nUpper Arm Actuator\n-Empty-\n\nRight Arm:\nShoulder\n",
        );
        assert_eq!(
            record.criticals.get("Left Arm").unwrap(),
            &vec![
                "Shoulder".to_string(),
                "Upper Arm Actuator".to_string(),
                "-Empty-".to_string()
            ]
        );
        assert_eq!(
            record.criticals.get("Right Arm").unwrap(),
            &vec!["Shoulder".to_string()]
        );
    }

    #[test]
    fn unrecognized_header_does_not_open_a_section() {
        let record = scan_record("Left Flipper:\nShoulder\n");
        assert!(record.criticals.is_empty());
    }

    #[test]
    fn weapons_lines_split_on_first_comma() {
        let record = scan_record("Weapons:3\nAC/20, Right Torso\nMedium Laser, Left Arm\nno comma line\n");
        assert_eq!(record.weapons.len(), 2);
        assert_eq!(record.weapons[0].name, "AC/20");
        assert_eq!(record.weapons[0].location, "Right Torso");
        assert_eq!(record.weapons[1].name, "Medium Laser");
        assert_eq!(record.weapons[1].location, "Left Arm");
    }

    #[test]
    fn section_header_ends_weapons_list() {
        let record = scan_record("Weapons:1\nAC/20, Right Torso\nLeft Arm:\nShoulder\n");
        assert_eq!(record.weapons.len(), 1);
        assert_eq!(
            record.criticals.get("Left Arm").unwrap(),
            &vec!["Shoulder".to_string()]
        );
    }

    #[test]
    fn fluff_accumulates_until_blank_line() {
        let record = scan_record(
            "overview: The Atlas is the king of the battlefield.\nIt was designed to be as ugly as possible.\n\nchassis:Atlas\n",
        );
        assert_eq!(
            record.fluff.get("overview").map(String::as_str),
            Some("The Atlas is the king of the battlefield.\nIt was designed to be as ugly as possible.")
        );
        // the line after the blank is a normal key-value, not fluff
        assert_eq!(record.chassis.as_deref(), Some("Atlas"));
    }

    #[test]
    fn fluff_header_is_case_insensitive_and_closes_previous_field() {
        let record = scan_record("Overview: first\nCapabilities: second\n");
        assert_eq!(record.fluff.get("overview").map(String::as_str), Some("first"));
        assert_eq!(
            record.fluff.get("capabilities").map(String::as_str),
            Some("second")
        );
    }

    #[test]
    fn fluff_flushes_at_end_of_input() {
        let record = scan_record("history: Short history");
        assert_eq!(
            record.fluff.get("history").map(String::as_str),
            Some("Short history")
        );
    }

    #[test]
    fn blank_line_keeps_section_open() {
        let record = scan_record("Left Arm:\nShoulder\n\nHand Actuator\n");
        assert_eq!(
            record.criticals.get("Left Arm").unwrap(),
            &vec!["Shoulder".to_string(), "Hand Actuator".to_string()]
        );
    }

    #[test]
    fn fluff_inside_section_resumes_the_section() {
        let record = scan_record("Left Arm:\nShoulder\nnotes: mid-section note\n\nHand Actuator\n");
        assert_eq!(
            record.fluff.get("notes").map(String::as_str),
            Some("mid-section note")
        );
        assert_eq!(
            record.criticals.get("Left Arm").unwrap(),
            &vec!["Shoulder".to_string(), "Hand Actuator".to_string()]
        );
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let record = scan_record("generator:MegaMek Suite 0.49\nimagefile:atlas.png\n");
        assert_eq!(record.chassis, None);
        assert!(record.criticals.is_empty());
        assert!(record.fluff.is_empty());
    }
}
