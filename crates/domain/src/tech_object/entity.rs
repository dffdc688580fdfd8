use serde::{Deserialize, Serialize};

use crate::tech_object::{BaseTechObject, Mode};

/// Equipment slot of a tech object and the control module assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub lua_name: String,
    /// Control module name; empty when nothing is assigned.
    #[serde(default)]
    pub device: String,
}

impl Equipment {
    pub fn new(lua_name: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            lua_name: lua_name.into(),
            device: device.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub lua_name: String,
    pub value: String,
}

impl ObjectProperty {
    pub fn new(lua_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            lua_name: lua_name.into(),
            value: value.into(),
        }
    }
}

/// Keeps ASCII alphanumerics and `_`, drops everything else.
pub fn normalize_file_name(cad_name: &str) -> String {
    cad_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// A unit of the plant (tank, line, pasteurizer...) as described in CAD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechObject {
    name: String,
    cad_name: String,
    file_name: String,
    tech_number: u32,
    base: Option<BaseTechObject>,
    attached_objects: String,
    modes: Vec<Mode>,
    equipment: Vec<Equipment>,
    properties: Vec<ObjectProperty>,
}

impl TechObject {
    pub fn new(name: impl Into<String>, cad_name: impl Into<String>, tech_number: u32) -> Self {
        let cad_name = cad_name.into();
        Self {
            name: name.into(),
            file_name: normalize_file_name(&cad_name),
            cad_name,
            tech_number,
            base: None,
            attached_objects: String::new(),
            modes: Vec::new(),
            equipment: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: BaseTechObject) -> Self {
        self.base = Some(base);
        self
    }

    /// Whitespace separated, 1-based global indices of attached objects.
    pub fn with_attached_objects(mut self, attached: impl Into<String>) -> Self {
        self.attached_objects = attached.into();
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.modes.push(mode);
        self
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment.push(equipment);
        self
    }

    pub fn with_property(mut self, property: ObjectProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cad_name(&self) -> &str {
        &self.cad_name
    }

    /// CAD name reduced to characters valid in a Lua identifier.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn tech_number(&self) -> u32 {
        self.tech_number
    }

    pub fn base(&self) -> Option<&BaseTechObject> {
        self.base.as_ref()
    }

    pub fn attached_objects(&self) -> &str {
        &self.attached_objects
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn properties(&self) -> &[ObjectProperty] {
        &self.properties
    }

    /// Key of the object inside `prg`, e.g. `tank2`.
    pub fn identifier(&self) -> String {
        format!("{}{}", self.file_name.to_lowercase(), self.tech_number)
    }

    pub fn has_operations(&self) -> bool {
        self.modes.iter().any(|mode| mode.base_operation().is_some())
    }
}
