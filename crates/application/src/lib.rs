//! Application layer - Use cases over a loaded project snapshot

pub mod binding;
pub mod export;
pub mod validation;

pub use binding::{Binding, resolve_bindings};
pub use export::{
    ExportOptions, LuaObjectDescriber, ObjectDescriber, ProjectExporter, RenderedProject,
};
pub use validation::ValidationReport;
