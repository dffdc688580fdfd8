use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Tunable value a device exposes to the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterTag {
    /// Zero shift
    #[serde(rename = "P_C0")]
    PC0,
    /// Lower bound of the measuring range
    #[serde(rename = "P_MIN_V")]
    PMinV,
    /// Upper bound of the measuring range
    #[serde(rename = "P_MAX_V")]
    PMaxV,
    /// Value reported on sensor error
    #[serde(rename = "P_ERR")]
    PErr,
    /// Signal debounce time, ms
    #[serde(rename = "P_DT")]
    PDt,
    /// Motor switch-on time, ms
    #[serde(rename = "P_ON_TIME")]
    POnTime,
    /// Nominal load of a weight cell
    #[serde(rename = "P_NOMINAL_W")]
    PNominalW,
    /// Rated output of a weight cell
    #[serde(rename = "P_RKP")]
    PRkp,
}

impl ParameterTag {
    pub const ALL: [ParameterTag; 8] = [
        Self::PC0,
        Self::PMinV,
        Self::PMaxV,
        Self::PErr,
        Self::PDt,
        Self::POnTime,
        Self::PNominalW,
        Self::PRkp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PC0 => "P_C0",
            Self::PMinV => "P_MIN_V",
            Self::PMaxV => "P_MAX_V",
            Self::PErr => "P_ERR",
            Self::PDt => "P_DT",
            Self::POnTime => "P_ON_TIME",
            Self::PNominalW => "P_NOMINAL_W",
            Self::PRkp => "P_RKP",
        }
    }
}

impl fmt::Display for ParameterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| DomainError::UnknownParameter(s.to_string()))
    }
}

/// Extra named attribute added by a few subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyTag {
    /// Network address of a drive
    #[serde(rename = "IP")]
    Ip,
}

impl PropertyTag {
    pub const ALL: [PropertyTag; 1] = [Self::Ip];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ip => "IP",
        }
    }
}

impl fmt::Display for PropertyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| DomainError::UnknownProperty(s.to_string()))
    }
}

/// Data point the runtime reads from a device; used to size generated
/// monitoring tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceTag {
    St,
    M,
    V,
    Ok,
    T,
    R,
    Frq,
    Rpm,
    Est,
    PCz,
    PMinV,
    PMaxV,
    PErr,
    PDt,
    POnTime,
    PNominalW,
    PRkp,
}

impl DeviceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::St => "ST",
            Self::M => "M",
            Self::V => "V",
            Self::Ok => "OK",
            Self::T => "T",
            Self::R => "R",
            Self::Frq => "FRQ",
            Self::Rpm => "RPM",
            Self::Est => "EST",
            Self::PCz => "P_CZ",
            Self::PMinV => "P_MIN_V",
            Self::PMaxV => "P_MAX_V",
            Self::PErr => "P_ERR",
            Self::PDt => "P_DT",
            Self::POnTime => "P_ON_TIME",
            Self::PNominalW => "P_NOMINAL_W",
            Self::PRkp => "P_RKP",
        }
    }
}

impl fmt::Display for DeviceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
