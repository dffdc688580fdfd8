use application::{ExportOptions, ProjectExporter, ValidationReport};
use domain::device::{ChannelAddress, ChannelKind, DeviceFamily, DeviceSubtype, MSubtype, ParameterTag, PropertyTag};
use domain::tech_object::normalize_file_name;
use infrastructure::load_project;
use std::fs;

const SNAPSHOT: &str = r#"{
    "base_tech_objects": [
        { "name": "Танк", "lua_module_name": "tank", "basic_name": "tank", "binding_name": "tank" },
        { "name": "Линия", "lua_module_name": "line", "basic_name": "line", "binding_name": "line_1" }
    ],
    "devices": [
        {
            "name": "TANK1PT1",
            "object_name": "TANK",
            "object_number": 1,
            "family": "PT",
            "subtype": "PT",
            "article": "PN2094",
            "parameters": { "P_MIN_V": 0.0, "P_MAX_V": 10.0, "P_ERR": 1.0 },
            "wiring": [ { "kind": "AI", "node": 1, "module": 2, "clamp": 1 } ]
        },
        {
            "name": "LINE1M1",
            "object_name": "LINE",
            "object_number": 1,
            "family": "M",
            "subtype": "M_ATV",
            "article": "ATV320",
            "properties": { "IP": "10.0.0.12" }
        },
        { "name": "TANK1XX1", "family": "XX" },
        { "name": "TANK1LS1", "object_name": "TANK", "object_number": 1, "family": "LS", "subtype": "" }
    ],
    "tech_objects": [
        {
            "name": "Танк",
            "cad_name": "TANK",
            "tech_number": 1,
            "base": "Танк",
            "attached_objects": "2",
            "equipment": [ { "lua_name": "level", "device": "TANK1PT1" } ]
        },
        {
            "name": "Линия",
            "cad_name": "LINE",
            "tech_number": 1,
            "base": "Линия",
            "modes": [ { "name": "Наполнение", "base_operation": "FILL" } ]
        },
        { "name": "Узел", "cad_name": "NODE", "tech_number": 1, "base": "Узел" }
    ]
}"#;

fn load(text: &str) -> infrastructure::LoadedProject {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.json");
    fs::write(&path, text).unwrap();
    load_project(&path).unwrap()
}

#[test]
fn test_devices_are_configured_once_and_filled() {
    let project = load(SNAPSHOT);

    let names: Vec<_> = project.devices.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["TANK1PT1", "LINE1M1", "TANK1LS1"]);

    let sensor = &project.devices[0];
    assert_eq!(sensor.family(), DeviceFamily::Pt);
    assert_eq!(sensor.range(), "_0..10");
    assert_eq!(
        sensor.channels_of(ChannelKind::AI).next().and_then(|c| c.address()),
        Some(ChannelAddress::new(1, 2, 1))
    );
    assert_eq!(sensor.parameter(ParameterTag::PC0), None);
    assert_eq!(sensor.check(), "");

    let drive = &project.devices[1];
    assert_eq!(drive.subtype(), Some(DeviceSubtype::M(MSubtype::Atv)));
    assert_eq!(drive.property(PropertyTag::Ip), Some("10.0.0.12"));
}

#[test]
fn test_import_messages_are_collected() {
    let project = load(SNAPSHOT);

    assert_eq!(
        project.messages,
        [
            "\"TANK1PT1\" - parameter P_ERR is not used by subtype \"PT\".",
            "\"TANK1XX1\" - Unknown device family: XX.",
            "\"TANK1LS1\" - subtype is not set (LS_MIN, LS_MAX, LS_IOLINK_MIN, LS_IOLINK_MAX, LS_VIRT).",
            "\"Узел 1\" - unknown template \"Узел\".",
        ]
    );
}

#[test]
fn test_tech_objects_keep_order_and_templates() {
    let project = load(SNAPSHOT);

    assert_eq!(project.tech_objects.len(), 3);
    assert_eq!(project.tech_objects[0].identifier(), "tank1");
    assert_eq!(
        project.tech_objects[1].base().map(|b| b.binding_name.as_str()),
        Some("line_1")
    );
    assert!(project.tech_objects[2].base().is_none());
    assert!(project.tech_objects[1].has_operations());
}

#[test]
fn test_file_name_is_always_derived_from_cad_name() {
    let project = load(
        r#"{
            "tech_objects": [
                { "name": "Танк", "cad_name": "TANK-1", "file_name": "Танк x", "tech_number": 1 }
            ]
        }"#,
    );

    let object = &project.tech_objects[0];
    assert_eq!(object.file_name(), normalize_file_name(object.cad_name()));
    assert_eq!(object.file_name(), "TANK1");
    assert_eq!(object.identifier(), "tank11");
}

#[test]
fn test_loaded_project_exports() {
    let project = load(SNAPSHOT);

    let rendered = ProjectExporter::new(ExportOptions::default())
        .render(&project.devices, &project.tech_objects);

    assert!(rendered.diagnostics.is_empty());
    assert!(rendered.document.contains("        TANK1PT1 = PT('TANK1PT1'),\n"));
    assert!(rendered.document.contains("\nprg.tank1.line_1 = prg.line1\n"));
    assert!(rendered.document.contains("prg.tank1.level = prg.control_modules.TANK1PT1\n"));
    assert!(rendered.document.contains("--add_functionality(prg.node1, basic_)\n"));

    let report = ValidationReport::collect(&project.devices, &project.tech_objects);
    assert!(!report.is_empty());
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_project(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid project snapshot"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_project(dir.path().join("missing.json")).is_err());
}
