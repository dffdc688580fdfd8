use super::{ChannelSpec, ExportedTags, Layout, SubtypeRules};
use crate::device::{ChannelKind, DeviceFamily, DeviceTag, ParameterTag};

/// Pressure sensor subtypes.
///
/// Parameters of the analog variant:
/// 1. `P_C0`    - zero shift.
/// 2. `P_MIN_V` - lower bound of the range.
/// 3. `P_MAX_V` - upper bound of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PtSubtype {
    None,
    /// Analog 4-20 mA transmitter
    Pt,
    /// IO-Link transmitter
    PtIoLink,
    /// IO-Link pressure switch
    DevSpae,
    Virt,
}

const ANALOG_INPUT: &[ChannelSpec] = &[(ChannelKind::AI, "")];

const EXPORT_PT: ExportedTags = &[
    (DeviceTag::St, 1),
    (DeviceTag::M, 1),
    (DeviceTag::V, 1),
    (DeviceTag::PMinV, 1),
    (DeviceTag::PMaxV, 1),
    (DeviceTag::PCz, 1),
];

const EXPORT_IOLINK: ExportedTags = &[
    (DeviceTag::M, 1),
    (DeviceTag::V, 1),
    (DeviceTag::PMinV, 1),
    (DeviceTag::PMaxV, 1),
    (DeviceTag::PErr, 1),
];

const EXPORT_SPAE: ExportedTags = &[(DeviceTag::M, 1), (DeviceTag::V, 1), (DeviceTag::PErr, 1)];

impl SubtypeRules for PtSubtype {
    const FAMILY: DeviceFamily = DeviceFamily::Pt;
    const NONE: Self = Self::None;
    const ALL: &'static [Self] = &[Self::Pt, Self::PtIoLink, Self::DevSpae, Self::Virt];

    fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Pt => "PT",
            Self::PtIoLink => "PT_IOLINK",
            Self::DevSpae => "DEV_SPAE",
            Self::Virt => "PT_VIRT",
        }
    }

    fn layout(self) -> Layout {
        match self {
            Self::Pt => Layout::new(
                ANALOG_INPUT,
                &[ParameterTag::PC0, ParameterTag::PMinV, ParameterTag::PMaxV],
            ),
            Self::PtIoLink | Self::DevSpae => Layout::new(ANALOG_INPUT, &[ParameterTag::PErr]),
            Self::None | Self::Virt => Layout::EMPTY,
        }
    }

    fn exported_tags(self) -> Option<ExportedTags> {
        match self {
            Self::Pt => Some(EXPORT_PT),
            Self::PtIoLink => Some(EXPORT_IOLINK),
            Self::DevSpae => Some(EXPORT_SPAE),
            Self::None | Self::Virt => None,
        }
    }

    fn requires_article(self) -> bool {
        !matches!(self, Self::None | Self::Virt)
    }

    fn measures_range() -> bool {
        true
    }
}
