use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Kind of a wiring point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Analog input
    AI,
    /// Analog output
    AO,
    /// Discrete input
    DI,
    /// Discrete output
    DO,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 4] = [Self::AI, Self::AO, Self::DI, Self::DO];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AI => "AI",
            Self::AO => "AO",
            Self::DI => "DI",
            Self::DO => "DO",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChannelKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownChannelKind(s.to_string()))
    }
}

/// Physical location of a channel: bus node, module on the node and clamp
/// on the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelAddress {
    pub node: u32,
    pub module: u32,
    pub clamp: u32,
}

impl ChannelAddress {
    pub fn new(node: u32, module: u32, clamp: u32) -> Self {
        Self {
            node,
            module,
            clamp,
        }
    }
}

impl fmt::Display for ChannelAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.node, self.module, self.clamp)
    }
}

/// One wiring point of a device. Immutable: wiring produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IOChannel {
    kind: ChannelKind,
    address: Option<ChannelAddress>,
    label: String,
}

impl IOChannel {
    /// Unwired channel
    pub fn new(kind: ChannelKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            address: None,
            label: label.into(),
        }
    }

    pub fn with_address(self, address: ChannelAddress) -> Self {
        Self {
            address: Some(address),
            ..self
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn address(&self) -> Option<ChannelAddress> {
        self.address
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_wired(&self) -> bool {
        self.address.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in ChannelKind::ALL {
            assert_eq!(kind.as_str().parse::<ChannelKind>().unwrap(), kind);
        }
        assert_eq!(
            "XI".parse::<ChannelKind>(),
            Err(DomainError::UnknownChannelKind("XI".to_string()))
        );
    }

    #[test]
    fn test_new_channel_is_unwired() {
        let channel = IOChannel::new(ChannelKind::DO, "Start");
        assert!(!channel.is_wired());
        assert_eq!(channel.label(), "Start");
        assert_eq!(channel.kind(), ChannelKind::DO);
    }

    #[test]
    fn test_with_address_keeps_kind_and_label() {
        let channel = IOChannel::new(ChannelKind::AI, "").with_address(ChannelAddress::new(1, 3, 2));
        assert!(channel.is_wired());
        assert_eq!(channel.kind(), ChannelKind::AI);
        assert_eq!(channel.address().unwrap().to_string(), "1.3.2");
    }
}
