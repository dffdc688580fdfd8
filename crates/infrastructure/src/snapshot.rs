//! JSON project snapshot exported from CAD.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use domain::device::{
    ChannelAddress, ChannelKind, Device, DeviceFamily, DeviceIdentity, ParameterTag, PropertyTag,
};
use domain::tech_object::{BaseTechObject, Equipment, Mode, ObjectProperty, TechObject};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WiringRecord {
    pub kind: String,
    /// 0-based position among the device's channels of `kind`.
    #[serde(default)]
    pub position: usize,
    pub node: u32,
    pub module: u32,
    pub clamp: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeviceRecord {
    pub name: String,
    #[serde(default)]
    pub cad_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub object_name: String,
    #[serde(default)]
    pub object_number: u32,
    pub family: String,
    #[serde(default)]
    pub subtype: String,
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub wiring: Vec<WiringRecord>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TechObjectRecord {
    pub name: String,
    #[serde(default)]
    pub cad_name: String,
    pub tech_number: u32,
    /// Template name, see [`ProjectSnapshot::base_tech_objects`].
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub attached_objects: String,
    #[serde(default)]
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub properties: Vec<ObjectProperty>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub base_tech_objects: Vec<BaseTechObject>,
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
    #[serde(default)]
    pub tech_objects: Vec<TechObjectRecord>,
}

/// Domain model built from a snapshot, plus everything worth telling the
/// user about the import.
#[derive(Debug, Clone, Default)]
pub struct LoadedProject {
    pub devices: Vec<Device>,
    pub tech_objects: Vec<TechObject>,
    pub messages: Vec<String>,
}

pub fn load_project(path: impl AsRef<Path>) -> Result<LoadedProject> {
    let path = path.as_ref();
    info!(path = ?path, "📂 Loading project snapshot");

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project snapshot {:?}", path))?;
    let snapshot: ProjectSnapshot = serde_json::from_str(&text)
        .with_context(|| format!("Invalid project snapshot {:?}", path))?;

    let project = snapshot.into_project();
    info!(
        devices = project.devices.len(),
        objects = project.tech_objects.len(),
        messages = project.messages.len(),
        "✅ Project snapshot loaded"
    );
    Ok(project)
}

impl ProjectSnapshot {
    pub fn into_project(self) -> LoadedProject {
        let mut messages = Vec::new();

        let devices = self
            .devices
            .into_iter()
            .filter_map(|record| build_device(record, &mut messages))
            .collect();

        let templates = self.base_tech_objects;
        let tech_objects = self
            .tech_objects
            .into_iter()
            .map(|record| build_tech_object(record, &templates, &mut messages))
            .collect();

        LoadedProject {
            devices,
            tech_objects,
            messages,
        }
    }
}

fn build_device(record: DeviceRecord, messages: &mut Vec<String>) -> Option<Device> {
    let family = match DeviceFamily::from_str(&record.family) {
        Ok(family) => family,
        Err(e) => {
            error!("Device {} skipped: {}", record.name, e);
            messages.push(format!("\"{}\" - {}.", record.name, e));
            return None;
        }
    };

    let identity = DeviceIdentity::new(record.name, family)
        .with_cad_name(record.cad_name)
        .with_description(record.description)
        .with_number(record.number)
        .with_object(record.object_name, record.object_number);
    let mut device = Device::new(identity, record.article);

    match device.apply_subtype(&record.subtype) {
        Ok(diagnostic) => {
            messages.extend(diagnostic.lines().map(str::to_string));
        }
        Err(e) => {
            error!("Device {} skipped: {}", device.name(), e);
            messages.push(format!("\"{}\" - {}.", device.name(), e));
            return None;
        }
    }

    for (name, value) in record.parameters {
        let applied = ParameterTag::from_str(&name)
            .map(|tag| device.set_parameter(tag, value))
            .unwrap_or(false);
        if !applied {
            messages.push(format!(
                "\"{}\" - parameter {} is not used by subtype \"{}\".",
                device.name(),
                name,
                record.subtype
            ));
        }
    }

    for (name, value) in record.properties {
        let applied = PropertyTag::from_str(&name)
            .map(|tag| device.set_property(tag, value))
            .unwrap_or(false);
        if !applied {
            messages.push(format!(
                "\"{}\" - property {} is not used by subtype \"{}\".",
                device.name(),
                name,
                record.subtype
            ));
        }
    }

    for wiring in record.wiring {
        let address = ChannelAddress::new(wiring.node, wiring.module, wiring.clamp);
        let wired = ChannelKind::from_str(&wiring.kind)
            .and_then(|kind| device.wire_channel(kind, wiring.position, address));
        if let Err(e) = wired {
            messages.push(format!("\"{}\" - {}.", device.name(), e));
        }
    }

    debug!(device = %device.name(), subtype = %record.subtype, "Device imported");
    Some(device)
}

fn build_tech_object(
    record: TechObjectRecord,
    templates: &[BaseTechObject],
    messages: &mut Vec<String>,
) -> TechObject {
    let mut object = TechObject::new(&record.name, record.cad_name, record.tech_number)
        .with_attached_objects(record.attached_objects);

    if let Some(template) = record.base.as_deref().filter(|name| !name.is_empty()) {
        match templates.iter().find(|base| base.name == template) {
            Some(base) => object = object.with_base(base.clone()),
            None => {
                error!(object = %record.name, template = %template, "Unknown template");
                messages.push(format!(
                    "\"{} {}\" - unknown template \"{}\".",
                    record.name, record.tech_number, template
                ));
            }
        }
    }

    for mode in record.modes {
        object = object.with_mode(mode);
    }
    for equipment in record.equipment {
        object = object.with_equipment(equipment);
    }
    for property in record.properties {
        object = object.with_property(property);
    }
    object
}
