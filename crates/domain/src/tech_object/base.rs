use serde::{Deserialize, Serialize};

/// Template a tech object is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseTechObject {
    /// Template name as shown in CAD, e.g. `Танк`.
    pub name: String,
    /// Lua module providing the template's runtime behaviour.
    #[serde(default)]
    pub lua_module_name: String,
    /// Basic functionality tag, used as `basic_<tag>`.
    #[serde(default)]
    pub basic_name: String,
    /// Slot name under which an attached object of this template is bound
    /// to its owner.
    #[serde(default)]
    pub binding_name: String,
}

impl BaseTechObject {
    pub fn new(
        name: impl Into<String>,
        lua_module_name: impl Into<String>,
        basic_name: impl Into<String>,
        binding_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lua_module_name: lua_module_name.into(),
            basic_name: basic_name.into(),
            binding_name: binding_name.into(),
        }
    }
}
