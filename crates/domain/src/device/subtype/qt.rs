use super::{ChannelSpec, ExportedTags, Layout, SubtypeRules};
use crate::device::{ChannelKind, Device, DeviceFamily, DeviceTag, ParameterTag};

/// Conductivity sensor subtypes.
///
/// Parameters of the analog variants:
/// 1. `P_C0`    - zero shift.
/// 2. `P_MIN_V` - lower bound of the range.
/// 3. `P_MAX_V` - upper bound of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QtSubtype {
    None,
    /// Analog transmitter
    Qt,
    /// Analog transmitter with a discrete "concentration ok" output
    QtOk,
    /// IO-Link transmitter
    QtIoLink,
    Virt,
}

const RANGE_PARAMETERS: &[ParameterTag] =
    &[ParameterTag::PC0, ParameterTag::PMinV, ParameterTag::PMaxV];

const ANALOG_INPUT: &[ChannelSpec] = &[(ChannelKind::AI, "")];

const ANALOG_INPUT_WITH_OK: &[ChannelSpec] = &[(ChannelKind::AI, ""), (ChannelKind::DI, "")];

const EXPORT_QT: ExportedTags = &[
    (DeviceTag::St, 1),
    (DeviceTag::M, 1),
    (DeviceTag::V, 1),
    (DeviceTag::PMinV, 1),
    (DeviceTag::PMaxV, 1),
    (DeviceTag::PCz, 1),
];

const EXPORT_QT_OK: ExportedTags = &[
    (DeviceTag::St, 1),
    (DeviceTag::M, 1),
    (DeviceTag::V, 1),
    (DeviceTag::Ok, 1),
    (DeviceTag::PMinV, 1),
    (DeviceTag::PMaxV, 1),
    (DeviceTag::PCz, 1),
];

const EXPORT_IOLINK: ExportedTags = &[
    (DeviceTag::St, 1),
    (DeviceTag::M, 1),
    (DeviceTag::V, 1),
    (DeviceTag::PCz, 1),
    (DeviceTag::T, 1),
    (DeviceTag::PErr, 1),
];

impl SubtypeRules for QtSubtype {
    const FAMILY: DeviceFamily = DeviceFamily::Qt;
    const NONE: Self = Self::None;
    const ALL: &'static [Self] = &[Self::Qt, Self::QtOk, Self::QtIoLink, Self::Virt];

    fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Qt => "QT",
            Self::QtOk => "QT_OK",
            Self::QtIoLink => "QT_IOLINK",
            Self::Virt => "QT_VIRT",
        }
    }

    fn layout(self) -> Layout {
        match self {
            Self::Qt => Layout::new(ANALOG_INPUT, RANGE_PARAMETERS),
            Self::QtOk => Layout::new(ANALOG_INPUT_WITH_OK, RANGE_PARAMETERS),
            Self::QtIoLink => Layout::new(ANALOG_INPUT, &[ParameterTag::PErr]),
            Self::None | Self::Virt => Layout::EMPTY,
        }
    }

    fn exported_tags(self) -> Option<ExportedTags> {
        match self {
            Self::Qt => Some(EXPORT_QT),
            Self::QtOk => Some(EXPORT_QT_OK),
            Self::QtIoLink => Some(EXPORT_IOLINK),
            Self::None | Self::Virt => None,
        }
    }

    fn requires_article(self) -> bool {
        !matches!(self, Self::None | Self::Virt)
    }

    fn measures_range() -> bool {
        true
    }

    fn check(self, device: &Device, report: &mut String) {
        // IO-Link transmitters report their range over the link.
        if !matches!(self, Self::QtIoLink | Self::Virt) && device.range().is_empty() {
            report.push_str(&format!(
                "\"{}\" - measuring range is not set.\n",
                device.name()
            ));
        }

        if self.requires_article() && device.article().is_empty() {
            report.push_str(&format!("\"{}\" - article is not set.\n", device.name()));
        }
    }
}
