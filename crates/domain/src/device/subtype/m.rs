use super::{ChannelSpec, ExportedTags, Layout, SubtypeRules};
use crate::device::{ChannelKind, DeviceFamily, DeviceTag, ParameterTag, PropertyTag};

// Channel labels are the wiring comments used on CAD drawings.
const START: ChannelSpec = (ChannelKind::DO, "Пуск");
const FEEDBACK: ChannelSpec = (ChannelKind::DI, "Обратная связь");
const REVERSE: ChannelSpec = (ChannelKind::DO, "Реверс");
const FREQUENCY: ChannelSpec = (ChannelKind::AO, "Частота вращения");
const FAULT: ChannelSpec = (ChannelKind::DI, "Авария");

const ON_TIME: &[ParameterTag] = &[ParameterTag::POnTime];

/// Motor subtypes.
///
/// Parameters:
/// 1. `P_ON_TIME` - switch-on time, ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MSubtype {
    None,
    /// Direct start
    M,
    /// Frequency converter
    Freq,
    /// Reversible
    Rev,
    /// Reversible with frequency converter
    RevFreq,
    Rev2,
    RevFreq2,
    /// Reversible with a fault input instead of feedback
    Rev2Error,
    RevFreq2Error,
    /// Drive controlled over the network
    Atv,
    Virt,
}

const EXPORT_M: ExportedTags = &[(DeviceTag::St, 1), (DeviceTag::M, 1), (DeviceTag::POnTime, 1)];

const EXPORT_FREQ: ExportedTags = &[
    (DeviceTag::St, 1),
    (DeviceTag::M, 1),
    (DeviceTag::POnTime, 1),
    (DeviceTag::V, 1),
];

const EXPORT_REV: ExportedTags = &[
    (DeviceTag::St, 1),
    (DeviceTag::M, 1),
    (DeviceTag::POnTime, 1),
    (DeviceTag::V, 1),
    (DeviceTag::R, 1),
];

const EXPORT_ATV: ExportedTags = &[
    (DeviceTag::M, 1),
    (DeviceTag::St, 1),
    (DeviceTag::R, 1),
    (DeviceTag::Frq, 1),
    (DeviceTag::Rpm, 1),
    (DeviceTag::Est, 1),
    (DeviceTag::V, 1),
    (DeviceTag::POnTime, 1),
];

impl SubtypeRules for MSubtype {
    const FAMILY: DeviceFamily = DeviceFamily::M;
    const NONE: Self = Self::None;
    const ALL: &'static [Self] = &[
        Self::M,
        Self::Freq,
        Self::Rev,
        Self::RevFreq,
        Self::Rev2,
        Self::RevFreq2,
        Self::Rev2Error,
        Self::RevFreq2Error,
        Self::Atv,
        Self::Virt,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::M => "M",
            Self::Freq => "M_FREQ",
            Self::Rev => "M_REV",
            Self::RevFreq => "M_REV_FREQ",
            Self::Rev2 => "M_REV_2",
            Self::RevFreq2 => "M_REV_FREQ_2",
            Self::Rev2Error => "M_REV_2_ERROR",
            Self::RevFreq2Error => "M_REV_FREQ_2_ERROR",
            Self::Atv => "M_ATV",
            Self::Virt => "M_VIRT",
        }
    }

    fn layout(self) -> Layout {
        match self {
            Self::M => Layout::new(&[START, FEEDBACK], ON_TIME),
            Self::Freq => Layout::new(&[FEEDBACK, FREQUENCY, START], ON_TIME),
            Self::Rev | Self::Rev2 => Layout::new(&[FEEDBACK, REVERSE, START], ON_TIME),
            Self::RevFreq | Self::RevFreq2 => {
                Layout::new(&[FEEDBACK, REVERSE, START, FREQUENCY], ON_TIME)
            }
            Self::Rev2Error => Layout::new(&[FAULT, REVERSE, START], ON_TIME),
            Self::RevFreq2Error => {
                Layout::new(&[FEEDBACK, FAULT, REVERSE, START, FREQUENCY], ON_TIME)
            }
            Self::Atv => Layout::new(&[], ON_TIME).with_properties(&[PropertyTag::Ip]),
            Self::None | Self::Virt => Layout::EMPTY,
        }
    }

    fn exported_tags(self) -> Option<ExportedTags> {
        match self {
            Self::M => Some(EXPORT_M),
            Self::Freq => Some(EXPORT_FREQ),
            Self::Rev
            | Self::RevFreq
            | Self::Rev2
            | Self::RevFreq2
            | Self::Rev2Error
            | Self::RevFreq2Error => Some(EXPORT_REV),
            Self::Atv => Some(EXPORT_ATV),
            Self::None | Self::Virt => None,
        }
    }

    fn requires_article(self) -> bool {
        !matches!(self, Self::None | Self::Virt)
    }
}
