use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    #[serde(default)]
    pub base_step: Option<String>,
}

impl Step {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_step: None,
        }
    }

    pub fn with_base_step(mut self, lua_name: impl Into<String>) -> Self {
        self.base_step = Some(lua_name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationParameter {
    pub lua_name: String,
    /// Lua literal, emitted as is.
    pub value: String,
}

impl OperationParameter {
    pub fn new(lua_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            lua_name: lua_name.into(),
            value: value.into(),
        }
    }
}

/// Operating mode (operation) of a tech object.
///
/// `base_operation` is the Lua name of the template operation the mode
/// implements (`WASHING_CIP`, `FILL`, ...). Modes without one are not
/// described to the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    pub name: String,
    #[serde(default)]
    pub base_operation: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub parameters: Vec<OperationParameter>,
}

impl Mode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_operation: None,
            steps: Vec::new(),
            parameters: Vec::new(),
        }
    }

    pub fn with_base_operation(mut self, lua_name: impl Into<String>) -> Self {
        self.base_operation = Some(lua_name.into());
        self
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn with_parameter(mut self, parameter: OperationParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn base_operation(&self) -> Option<&str> {
        self.base_operation.as_deref().filter(|name| !name.is_empty())
    }
}
