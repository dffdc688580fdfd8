//! Domain layer - Pure model of the project being exported
//!
//! This crate contains:
//! - Devices (families, subtypes, channels, parameters)
//! - Tech objects and their templates
//! - The diagnostic sink used to report configuration defects
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Raw CAD tokens are parsed once, into closed enums
//! - Configuration defects are reported, never panicked on

pub mod device;
pub mod diagnostics;
pub mod error;
pub mod tech_object;

// Re-export commonly used types
pub use device::{Device, DeviceFamily, DeviceIdentity, DeviceSubtype};
pub use diagnostics::{DiagnosticSink, Diagnostics};
pub use error::DomainError;
pub use tech_object::{BaseTechObject, TechObject};
