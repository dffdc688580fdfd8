use thiserror::Error;

use crate::device::ChannelKind;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown device family: {0}")]
    UnknownFamily(String),

    #[error("Unknown device parameter: {0}")]
    UnknownParameter(String),

    #[error("Unknown device property: {0}")]
    UnknownProperty(String),

    #[error("Unknown channel kind: {0}")]
    UnknownChannelKind(String),

    #[error("Subtype already applied to device {0}")]
    SubtypeAlreadyApplied(String),

    #[error("Device {device} has no {kind} channel at position {position}")]
    ChannelNotFound {
        device: String,
        kind: ChannelKind,
        position: usize,
    },
}

pub type Result<T> = std::result::Result<T, DomainError>;
