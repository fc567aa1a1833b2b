//! Assembly of a raw record into the canonical unit document.
//!
//! Consumes the `RawRecord` exactly once. All vocabulary translation
//! happens here; the only way assembly fails is a missing chassis.

use std::collections::{BTreeMap, HashMap};

use crate::models::{
    Armor, ArmorValue, CanonicalUnit, Engine, Equipment, Fluff, Gyro, HeatSinks, Movement,
    Structure,
};
use crate::record::{EngineField, HeatSinkField, RawRecord, WeaponMention};
use crate::vocab;

/// Fallback year when the era field is absent or unparsable.
const DEFAULT_YEAR: i32 = 3025;

/// Marker for an explicitly empty critical slot.
const EMPTY_SLOT: &str = "-Empty-";

/// Build the canonical unit, or `None` when the record never carried a
/// chassis line.
pub(crate) fn assemble(record: RawRecord) -> Option<CanonicalUnit> {
    let chassis = record.chassis?;
    let model = record.model.unwrap_or_else(|| "Unknown".to_string());
    let id = vocab::generate_id(&chassis, &model);

    let year = record
        .era
        .as_deref()
        .and_then(|era| era.trim().parse::<i32>().ok())
        .unwrap_or(DEFAULT_YEAR);
    let era = vocab::map_year_to_era(year);

    let engine_raw = record.engine.unwrap_or(EngineField {
        rating: 0,
        kind: "Fusion".to_string(),
    });
    let engine = Engine {
        engine_type: vocab::map_engine_type(&engine_raw.kind),
        rating: engine_raw.rating,
    };

    let heat_sink_raw = record.heat_sinks.unwrap_or(HeatSinkField {
        count: 10,
        kind: "Single".to_string(),
    });
    let heat_sinks = HeatSinks {
        sink_type: vocab::map_heat_sink_type(&heat_sink_raw.kind),
        count: heat_sink_raw.count,
    };

    let armor = Armor {
        armor_type: vocab::map_armor_type(record.armor_type.as_deref().unwrap_or("Standard")),
        allocation: build_armor_allocation(&record.armor_allocation),
    };

    let structure = Structure {
        structure_type: vocab::map_structure_type(
            record.structure.as_deref().unwrap_or("Standard"),
        ),
    };

    let movement = Movement {
        walk: record.walk_mp.unwrap_or(0),
        jump: record.jump_mp.unwrap_or(0),
        jump_jet_type: None,
        enhancements: None,
    };

    let config = record.config.as_deref().unwrap_or("Biped");

    let fluff = build_fluff(
        &record.fluff,
        record.manufacturer,
        record.primary_factory,
        record.system_manufacturers,
    );

    Some(CanonicalUnit {
        id,
        chassis,
        model,
        unit_type: vocab::map_unit_type(config),
        configuration: vocab::map_configuration(config),
        tech_base: vocab::map_tech_base(record.tech_base.as_deref().unwrap_or("Inner Sphere")),
        rules_level: vocab::map_rules_level(record.rules_level.as_deref().unwrap_or("1")),
        era,
        year,
        tonnage: record.mass.unwrap_or(0),
        engine,
        // Not encoded in the record format; always the default label.
        gyro: Gyro {
            gyro_type: "STANDARD".to_string(),
        },
        cockpit: "STANDARD".to_string(),
        structure,
        armor,
        heat_sinks,
        movement,
        equipment: build_equipment_list(record.weapons),
        critical_slots: build_critical_slots(record.criticals),
        quirks: if record.quirks.is_empty() {
            None
        } else {
            Some(record.quirks)
        },
        fluff,
        mul_id: record.mul_id,
        role: record.role,
        source: record.source,
    })
}

/// Merge raw per-code armor entries into the canonical allocation.
///
/// Pass 1 records every front-facing value as a scalar. Pass 2 folds
/// rear-facing values into `{front, rear}` composites, but only when
/// pass 1 produced a front value for that torso: a rear entry with no
/// matching front is dropped without signal. The record format always
/// writes front before rear, so in practice nothing is lost.
pub(crate) fn build_armor_allocation(raw: &HashMap<String, u32>) -> BTreeMap<String, ArmorValue> {
    let mut allocation = BTreeMap::new();

    for (code, &points) in raw {
        let location = vocab::map_armor_code(code);
        if !location.contains("REAR") {
            allocation.insert(location, ArmorValue::Points(points));
        }
    }

    for (code, &rear) in raw {
        let location = vocab::map_armor_code(code);
        if let Some(front_location) = location.strip_suffix("_REAR") {
            if let Some(ArmorValue::Points(front)) = allocation.get(front_location).copied() {
                allocation.insert(front_location.to_string(), ArmorValue::FrontRear { front, rear });
            }
        }
    }

    allocation
}

/// Normalize each location's content lines to its exact slot capacity.
///
/// Explicit empty markers and blank entries become `None`; overlong
/// lists are truncated (the tail is usually trailing empty markers) and
/// short lists are padded with `None`.
pub(crate) fn build_critical_slots(
    criticals: HashMap<String, Vec<String>>,
) -> BTreeMap<String, Vec<Option<String>>> {
    let mut slots = BTreeMap::new();

    for (location, items) in criticals {
        let canonical = vocab::map_location(&location);
        let capacity = vocab::slot_capacity(&canonical);

        let mut entries: Vec<Option<String>> = items
            .into_iter()
            .map(|item| {
                if item == EMPTY_SLOT || item.is_empty() {
                    None
                } else {
                    Some(item)
                }
            })
            .collect();

        entries.truncate(capacity);
        entries.resize(capacity, None);

        slots.insert(canonical, entries);
    }

    slots
}

/// Turn raw weapon mentions into typed equipment entries, in source
/// order. Rear mounts are marked by `(R)` or `(rear)` in the name; the
/// marker is stripped before deriving the equipment id.
pub(crate) fn build_equipment_list(weapons: Vec<WeaponMention>) -> Vec<Equipment> {
    weapons
        .into_iter()
        .map(|weapon| {
            let is_rear = weapon.name.contains("(R)")
                || weapon.name.to_ascii_lowercase().contains("(rear)");
            let clean_name = strip_rear_markers(&weapon.name);

            Equipment {
                id: vocab::normalize_equipment_id(&clean_name),
                location: vocab::map_location(&weapon.location),
                slots: None,
                is_rear_mounted: is_rear.then_some(true),
                linked_ammo: None,
            }
        })
        .collect()
}

/// Remove every `(R)`/`(r)` and case-insensitive `(rear)` marker.
fn strip_rear_markers(name: &str) -> String {
    let mut cleaned = name.replace("(R)", "").replace("(r)", "");
    while let Some(idx) = cleaned.to_ascii_lowercase().find("(rear)") {
        cleaned.replace_range(idx..idx + "(rear)".len(), "");
    }
    cleaned.trim().to_string()
}

/// Emit a fluff block only when narrative or manufacturer data was
/// captured.
fn build_fluff(
    fluff: &HashMap<String, String>,
    manufacturer: Option<String>,
    primary_factory: Option<String>,
    system_manufacturers: BTreeMap<String, String>,
) -> Option<Fluff> {
    if fluff.is_empty()
        && manufacturer.is_none()
        && primary_factory.is_none()
        && system_manufacturers.is_empty()
    {
        return None;
    }

    Some(Fluff {
        overview: fluff.get("overview").cloned(),
        capabilities: fluff.get("capabilities").cloned(),
        history: fluff.get("history").cloned(),
        deployment: fluff.get("deployment").cloned(),
        manufacturer,
        primary_factory,
        system_manufacturer: if system_manufacturers.is_empty() {
            None
        } else {
            Some(system_manufacturers)
        },
    })
}
