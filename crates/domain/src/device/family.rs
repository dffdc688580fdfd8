use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Fixed, construction-time category of an instrument.
///
/// The string form is the constructor name the automation runtime expects
/// in `prg.lua`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceFamily {
    /// Pressure sensor
    #[serde(rename = "PT")]
    Pt,
    /// Conductivity sensor
    #[serde(rename = "QT")]
    Qt,
    /// Level switch
    #[serde(rename = "LS")]
    Ls,
    /// Motor
    M,
    /// Weight sensor
    #[serde(rename = "WT")]
    Wt,
    /// Door/gate position sensor
    #[serde(rename = "GS")]
    Gs,
    /// Valve terminal actuator
    Y,
    /// Valve terminal bus coupler
    #[serde(rename = "DEV_VTUG")]
    DevVtug,
}

impl DeviceFamily {
    pub const ALL: [DeviceFamily; 8] = [
        Self::Pt,
        Self::Qt,
        Self::Ls,
        Self::M,
        Self::Wt,
        Self::Gs,
        Self::Y,
        Self::DevVtug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pt => "PT",
            Self::Qt => "QT",
            Self::Ls => "LS",
            Self::M => "M",
            Self::Wt => "WT",
            Self::Gs => "GS",
            Self::Y => "Y",
            Self::DevVtug => "DEV_VTUG",
        }
    }

    /// Whether devices of this family get an entry in the runtime's
    /// `control_modules` table. Valve terminal actuators and bus couplers
    /// are driven through their terminal and never declared on their own.
    pub fn is_control_module(&self) -> bool {
        !matches!(self, Self::Y | Self::DevVtug)
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFamily(s.to_string()))
    }
}
