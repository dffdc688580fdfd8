//! Technological objects (tanks, lines, units) and the templates they are
//! built from.

mod base;
mod entity;
mod mode;

pub use base::BaseTechObject;
pub use entity::{Equipment, ObjectProperty, TechObject, normalize_file_name};
pub use mode::{Mode, OperationParameter, Step};
