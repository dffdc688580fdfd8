//! Infrastructure layer - Configuration, project snapshot loading and
//! `prg.lua` output

pub mod config;
pub mod snapshot;
pub mod writer;

pub use snapshot::{LoadedProject, ProjectSnapshot, load_project};
pub use writer::PrgFileWriter;
