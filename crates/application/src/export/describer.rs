use domain::TechObject;

/// Renders the descriptive blocks of a templated tech object.
///
/// `object_name` is the qualified Lua name (`prg.tank1`). Every method
/// returns an empty string when it has nothing to describe.
pub trait ObjectDescriber {
    fn object_info(&self, object: &TechObject, object_name: &str) -> String;

    fn operations(&self, object: &TechObject, object_name: &str) -> String;

    fn operation_steps(&self, object: &TechObject, object_name: &str) -> String;

    fn operation_parameters(&self, object: &TechObject, object_name: &str) -> String;

    fn equipment(&self, object: &TechObject, object_name: &str) -> String;
}

/// Default describer producing plain Lua table assignments.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuaObjectDescriber;

fn table(object_name: &str, field: &str, body: &str) -> String {
    format!("{object_name}.{field} =\n\t{{\n{body}\t}}\n")
}

impl ObjectDescriber for LuaObjectDescriber {
    fn object_info(&self, object: &TechObject, object_name: &str) -> String {
        if object.properties().is_empty() {
            return String::new();
        }

        let body: String = object
            .properties()
            .iter()
            .map(|property| format!("\t\t{} = {},\n", property.lua_name, property.value))
            .collect();
        table(object_name, "properties", &body)
    }

    fn operations(&self, object: &TechObject, object_name: &str) -> String {
        let body: String = object
            .modes()
            .iter()
            .enumerate()
            .filter_map(|(index, mode)| {
                mode.base_operation()
                    .map(|operation| format!("\t\t{} = {},\n", operation, index + 1))
            })
            .collect();

        if body.is_empty() {
            String::new()
        } else {
            table(object_name, "operations", &body)
        }
    }

    fn operation_steps(&self, object: &TechObject, object_name: &str) -> String {
        let mut body = String::new();
        for mode in object.modes() {
            let Some(operation) = mode.base_operation() else {
                continue;
            };

            let steps: String = mode
                .steps
                .iter()
                .enumerate()
                .filter_map(|(index, step)| {
                    step.base_step
                        .as_deref()
                        .filter(|name| !name.is_empty())
                        .map(|name| format!("\t\t\t\t{} = {},\n", name, index + 1))
                })
                .collect();
            if !steps.is_empty() {
                body.push_str(&format!("\t\t{operation} =\n\t\t\t{{\n{steps}\t\t\t}},\n"));
            }
        }

        if body.is_empty() {
            String::new()
        } else {
            table(object_name, "steps", &body)
        }
    }

    fn operation_parameters(&self, object: &TechObject, object_name: &str) -> String {
        let mut body = String::new();
        for mode in object.modes() {
            let Some(operation) = mode.base_operation() else {
                continue;
            };
            if mode.parameters.is_empty() {
                continue;
            }

            let parameters: String = mode
                .parameters
                .iter()
                .map(|parameter| format!("\t\t\t\t{} = {},\n", parameter.lua_name, parameter.value))
                .collect();
            body.push_str(&format!(
                "\t\t{operation} =\n\t\t\t{{\n{parameters}\t\t\t}},\n"
            ));
        }

        if body.is_empty() {
            String::new()
        } else {
            table(object_name, "operations_params", &body)
        }
    }

    fn equipment(&self, object: &TechObject, object_name: &str) -> String {
        object
            .equipment()
            .iter()
            .filter(|equipment| !equipment.device.is_empty())
            .map(|equipment| {
                format!(
                    "{object_name}.{} = prg.control_modules.{}\n",
                    equipment.lua_name, equipment.device
                )
            })
            .collect()
    }
}
