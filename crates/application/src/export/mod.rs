//! `prg.lua` rendering.
//!
//! The document is consumed by the Lua runtime on the controller; table
//! names (`control_modules`, `OBJECT<n>`, `add_functionality`) and family
//! constructor names are part of that contract.

mod describer;
mod document;

pub use describer::{LuaObjectDescriber, ObjectDescriber};
pub use document::{GroupSeparator, LuaDocument};

use std::collections::BTreeSet;

use domain::{Device, DiagnosticSink, Diagnostics, TechObject};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::binding::{Binding, resolve_bindings};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Spaces per indentation level in the written document.
    pub indent_width: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Rendered document plus the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProject {
    pub document: String,
    pub diagnostics: Vec<String>,
}

pub struct ProjectExporter<D: ObjectDescriber = LuaObjectDescriber> {
    options: ExportOptions,
    describer: D,
}

impl ProjectExporter<LuaObjectDescriber> {
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            describer: LuaObjectDescriber,
        }
    }
}

impl<D: ObjectDescriber> ProjectExporter<D> {
    pub fn with_describer(options: ExportOptions, describer: D) -> Self {
        Self { options, describer }
    }

    /// Render the project and collect diagnostics.
    pub fn render(&self, devices: &[Device], objects: &[TechObject]) -> RenderedProject {
        let mut diagnostics = Diagnostics::new();
        let document = self.render_with_sink(devices, objects, &mut diagnostics);
        RenderedProject {
            document,
            diagnostics: diagnostics.into_messages(),
        }
    }

    /// Render the project, reporting warnings to `sink`. Never fails: broken
    /// bindings are reported and left out of the document.
    pub fn render_with_sink(
        &self,
        devices: &[Device],
        objects: &[TechObject],
        sink: &mut dyn DiagnosticSink,
    ) -> String {
        info!(
            devices = devices.len(),
            objects = objects.len(),
            "📝 Rendering prg.lua"
        );

        let bindings = resolve_bindings(objects, sink);
        debug!(bindings = bindings.len(), "Bindings resolved");

        let document = LuaDocument::new()
            .text(&require_modules(objects))
            .empty_line()
            .comment("Main project objects (objects described in CAD).")
            .text_line("local prg =")
            .text_line("\t{")
            .text(&control_modules(devices))
            .text(&object_variables(objects))
            .text_line("\t}")
            .text(&object_bindings(objects, &bindings, sink))
            .text(&self.object_descriptions(objects))
            .text(&functionality(objects))
            .text("return prg")
            .build(self.options.indent_width);

        info!(bytes = document.len(), "✅ prg.lua rendered");
        document
    }

    fn object_descriptions(&self, objects: &[TechObject]) -> String {
        let mut info = String::new();
        let mut operations = String::new();
        let mut steps = String::new();
        let mut parameters = String::new();
        let mut equipment = String::new();

        for object in objects.iter().filter(|object| object.base().is_some()) {
            let name = qualified_name(object);
            info.push_str(&self.describer.object_info(object, &name));
            if object.has_operations() {
                operations.push_str(&self.describer.operations(object, &name));
                steps.push_str(&self.describer.operation_steps(object, &name));
                parameters.push_str(&self.describer.operation_parameters(object, &name));
            }
            equipment.push_str(&self.describer.equipment(object, &name));
        }

        LuaDocument::new()
            .section(&info)
            .section(&operations)
            .section(&steps)
            .section(&parameters)
            .section(&equipment)
            .into_string()
    }
}

fn group_key(object: &TechObject) -> String {
    object.file_name().to_lowercase()
}

fn qualified_name(object: &TechObject) -> String {
    format!("prg.{}", object.identifier())
}

fn require_modules(objects: &[TechObject]) -> String {
    // Ordered by the rendered line, not by module name.
    let lines: BTreeSet<String> = objects
        .iter()
        .filter_map(|object| object.base())
        .map(|base| base.lua_module_name.as_str())
        .filter(|module| !module.is_empty())
        .map(|module| format!("require( \"{module}\" )\n"))
        .collect();

    let mut out = String::from("-- Basic functionality\n");
    for line in lines {
        out.push_str(&line);
    }
    out
}

fn control_modules(devices: &[Device]) -> String {
    let mut out = String::from("\tcontrol_modules =\n\t\t{\n");
    for device in devices.iter().filter(|device| device.family().is_control_module()) {
        let marker = if device.has_anonymous_owner() { "_" } else { "" };
        out.push_str(&format!(
            "\t\t{marker}{name} = {family}('{name}'),\n",
            name = device.name(),
            family = device.family()
        ));
    }
    out.push_str("\t},\n\n");
    out
}

fn object_variables(objects: &[TechObject]) -> String {
    let mut out = String::new();
    let mut separator = GroupSeparator::new();

    for (index, object) in objects.iter().enumerate() {
        separator.separate(&group_key(object), &mut out);
        let comment = if object.file_name().is_empty() { "--" } else { "" };
        out.push_str(&format!(
            "\t{comment}{} = OBJECT{},\n",
            object.identifier(),
            index + 1
        ));
    }
    out
}

fn object_bindings(
    objects: &[TechObject],
    bindings: &[Binding],
    sink: &mut dyn DiagnosticSink,
) -> String {
    let mut lines = String::new();
    let mut separator = GroupSeparator::new();

    for binding in bindings {
        let owner = &objects[binding.owner];
        let attached = &objects[binding.attached];
        let Some(base) = attached.base() else {
            let message = format!(
                "attached unit `{}` of object `{} {}` has no template",
                binding.attached + 1,
                owner.name(),
                owner.tech_number()
            );
            warn!(object = %owner.name(), "⚠️ {}", message);
            sink.add_message(&message);
            continue;
        };

        separator.separate(&group_key(owner), &mut lines);
        lines.push_str(&format!(
            "{}.{} = {}\n",
            qualified_name(owner),
            base.binding_name,
            qualified_name(attached)
        ));
    }

    if lines.is_empty() {
        lines
    } else {
        format!("\n{lines}\n")
    }
}

fn functionality(objects: &[TechObject]) -> String {
    let mut out = String::new();
    let mut separator = GroupSeparator::new();

    for object in objects {
        separator.separate(&group_key(object), &mut out);
        let basic = object
            .base()
            .map(|base| base.basic_name.as_str())
            .unwrap_or("");
        let comment = if basic.is_empty() { "--" } else { "" };
        out.push_str(&format!(
            "{comment}add_functionality({}, basic_{basic})\n",
            qualified_name(object)
        ));
    }
    out
}
