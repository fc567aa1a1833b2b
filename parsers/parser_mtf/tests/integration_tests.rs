use parser_mtf::{parse_unit, ArmorValue};
use pretty_assertions::assert_eq;

const ATLAS: &str = r#"generator:MegaMek Suite 0.49.19
chassis:Atlas
model:AS7-D
mul id:104

Config:Biped
techbase:Inner Sphere
era:2755
source:TRO: 3025
rules level:1
role:Juggernaut

quirk:battle_fists_la
quirk:battle_fists_ra
quirk:command_mech

mass:100
engine:300 Fusion Engine(IS)
structure:IS Standard
myomer:Standard

heat sinks:20 Single
walk mp:3
jump mp:0

armor:Standard(Inner Sphere)
LA armor:34
RA armor:34
LT armor:32
RT armor:32
CT armor:47
HD armor:9
LL armor:41
RL armor:41
RTL armor:10
RTR armor:10
RTC armor:14

Weapons:5
AC/20, Right Torso
LRM 20, Left Torso
Medium Laser, Left Arm
Medium Laser, Right Arm
SRM 6, Left Torso

Left Arm:
Shoulder
Upper Arm Actuator
Lower Arm Actuator
Hand Actuator
Medium Laser
-Empty-
-Empty-
-Empty-
-Empty-
-Empty-
-Empty-
-Empty-

Right Arm:
Shoulder
Upper Arm Actuator
Lower Arm Actuator
Hand Actuator
Medium Laser
-Empty-
-Empty-
-Empty-
-Empty-
-Empty-
-Empty-
-Empty-

Head:
Life Support
Sensors
Cockpit
-Empty-
Sensors
Life Support

overview:The Atlas is the undisputed king of the battlefield.
Its profile was designed to inspire dread in anyone who sees it.

capabilities:Massive armor and a deadly short-range arsenal.

deployment:Found in every Successor State army.

history:Commissioned by Aleksandr Kerensky himself.

manufacturer:Defiance Industries,Hesperus II
primaryfactory:Hesperus II
systemmanufacturer:CHASSIS:Foundation Type 10X
systemmanufacturer:ENGINE:Vlar 300
systemmanufacturer:ARMOR:Durallex Special Heavy
"#;

#[test]
fn parses_a_complete_record() {
    let unit = parse_unit(ATLAS).expect("record should parse");

    assert_eq!(unit.id, "atlas-as7-d");
    assert_eq!(unit.chassis, "Atlas");
    assert_eq!(unit.model, "AS7-D");
    assert_eq!(unit.unit_type, "BATTLEMECH");
    assert_eq!(unit.configuration, "BIPED");
    assert_eq!(unit.tech_base, "INNER_SPHERE");
    assert_eq!(unit.rules_level, "INTRODUCTORY");
    assert_eq!(unit.year, 2755);
    assert_eq!(unit.era, "STAR_LEAGUE");
    assert_eq!(unit.tonnage, 100);
    assert_eq!(unit.mul_id, Some(104));
    assert_eq!(unit.role.as_deref(), Some("Juggernaut"));
    assert_eq!(unit.source.as_deref(), Some("TRO: 3025"));

    assert_eq!(unit.engine.rating, 300);
    assert_eq!(unit.engine.engine_type, "FUSION");
    assert_eq!(unit.structure.structure_type, "STANDARD");
    assert_eq!(unit.armor.armor_type, "STANDARD");
    assert_eq!(unit.heat_sinks.count, 20);
    assert_eq!(unit.heat_sinks.sink_type, "SINGLE");
    assert_eq!(unit.movement.walk, 3);
    assert_eq!(unit.movement.jump, 0);
    assert_eq!(unit.gyro.gyro_type, "STANDARD");
    assert_eq!(unit.cockpit, "STANDARD");
}

#[test]
fn armor_allocation_merges_torso_rear_values() {
    let unit = parse_unit(ATLAS).unwrap();
    let allocation = &unit.armor.allocation;

    assert_eq!(allocation.get("HEAD"), Some(&ArmorValue::Points(9)));
    assert_eq!(allocation.get("LEFT_ARM"), Some(&ArmorValue::Points(34)));
    assert_eq!(
        allocation.get("CENTER_TORSO"),
        Some(&ArmorValue::FrontRear { front: 47, rear: 14 })
    );
    assert_eq!(
        allocation.get("LEFT_TORSO"),
        Some(&ArmorValue::FrontRear { front: 32, rear: 10 })
    );
    assert_eq!(
        allocation.get("RIGHT_TORSO"),
        Some(&ArmorValue::FrontRear { front: 32, rear: 10 })
    );
    assert!(!allocation.contains_key("CENTER_TORSO_REAR"));
}

#[test]
fn critical_slots_are_capacity_normalized() {
    let unit = parse_unit(ATLAS).unwrap();
    let slots = &unit.critical_slots;

    // arm sections wrote 12 lines, head wrote 6
    let left_arm = slots.get("LEFT_ARM").expect("left arm section");
    assert_eq!(left_arm.len(), 12);
    assert_eq!(left_arm[0].as_deref(), Some("Shoulder"));
    assert_eq!(left_arm[4].as_deref(), Some("Medium Laser"));
    assert_eq!(left_arm[5], None);

    let head = slots.get("HEAD").expect("head section");
    assert_eq!(head.len(), 6);
    assert_eq!(head[2].as_deref(), Some("Cockpit"));
    assert_eq!(head[3], None);
}

#[test]
fn equipment_list_is_ordered_and_located() {
    let unit = parse_unit(ATLAS).unwrap();
    let ids: Vec<&str> = unit.equipment.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["ac-20", "lrm-20", "medium-laser", "medium-laser", "srm-6"]
    );
    assert_eq!(unit.equipment[0].location, "RIGHT_TORSO");
    assert!(unit.equipment.iter().all(|e| e.is_rear_mounted.is_none()));
}

#[test]
fn quirks_and_fluff_are_carried_over() {
    let unit = parse_unit(ATLAS).unwrap();

    let quirks = unit.quirks.expect("quirks present");
    assert_eq!(
        quirks,
        vec!["battle_fists_la", "battle_fists_ra", "command_mech"]
    );

    let fluff = unit.fluff.expect("fluff present");
    let overview = fluff.overview.expect("overview");
    assert!(overview.starts_with("The Atlas is the undisputed king"));
    assert!(overview.ends_with("anyone who sees it."));
    assert_eq!(
        fluff.capabilities.as_deref(),
        Some("Massive armor and a deadly short-range arsenal.")
    );
    assert_eq!(
        fluff.history.as_deref(),
        Some("Commissioned by Aleksandr Kerensky himself.")
    );
    assert_eq!(
        fluff.manufacturer.as_deref(),
        Some("Defiance Industries,Hesperus II")
    );
    assert_eq!(fluff.primary_factory.as_deref(), Some("Hesperus II"));

    let systems = fluff.system_manufacturer.expect("system manufacturers");
    assert_eq!(systems.get("ENGINE").map(String::as_str), Some("Vlar 300"));
    assert_eq!(
        systems.get("ARMOR").map(String::as_str),
        Some("Durallex Special Heavy")
    );
}

#[test]
fn serialized_document_uses_camel_case_and_omits_absent_fields() {
    let unit = parse_unit(ATLAS).unwrap();
    let json = serde_json::to_value(&unit).unwrap();

    assert_eq!(json["techBase"], "INNER_SPHERE");
    assert_eq!(json["rulesLevel"], "INTRODUCTORY");
    assert_eq!(json["mulId"], 104);
    assert_eq!(json["engine"]["type"], "FUSION");
    assert_eq!(json["armor"]["allocation"]["CENTER_TORSO"]["front"], 47);
    assert_eq!(json["armor"]["allocation"]["HEAD"], 9);
    assert_eq!(json["criticalSlots"]["HEAD"][3], serde_json::Value::Null);
    assert_eq!(json["fluff"]["primaryFactory"], "Hesperus II");

    // unset optionals are skipped entirely
    assert!(json["movement"].get("jumpJetType").is_none());
    assert!(json["equipment"][0].get("isRearMounted").is_none());
    assert!(json["equipment"][0].get("slots").is_none());
}

#[test]
fn record_without_chassis_yields_none() {
    assert!(parse_unit("model:AS7-D\nmass:100\n").is_none());
    assert!(parse_unit("").is_none());
}

#[test]
fn quad_record_recognizes_leg_sections() {
    let content = r#"chassis:Scorpion
model:SCP-1N
Config:Quad
era:2570

Front Left Leg:
Hip
Upper Leg Actuator
Lower Leg Actuator
Foot Actuator
-Empty-
-Empty-
"#;
    let unit = parse_unit(content).unwrap();
    assert_eq!(unit.configuration, "QUAD");
    assert_eq!(unit.era, "AGE_OF_WAR");
    let leg = unit.critical_slots.get("FRONT_LEFT_LEG").expect("quad leg");
    assert_eq!(leg.len(), 6);
    assert_eq!(leg[0].as_deref(), Some("Hip"));
    assert_eq!(leg[4], None);
}
