use super::{ChannelSpec, ExportedTags, Layout, SubtypeRules};
use crate::device::{ChannelKind, DeviceFamily, DeviceTag};

/// Pneumatic valve subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YSubtype {
    None,
    Y,
    Virt,
}

const SOLENOID: &[ChannelSpec] = &[(ChannelKind::DO, "")];

const EXPORT_Y: ExportedTags = &[(DeviceTag::St, 1), (DeviceTag::M, 1)];

impl SubtypeRules for YSubtype {
    const FAMILY: DeviceFamily = DeviceFamily::Y;
    const NONE: Self = Self::None;
    const ALL: &'static [Self] = &[Self::Y, Self::Virt];

    fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Y => "Y",
            Self::Virt => "Y_VIRT",
        }
    }

    fn layout(self) -> Layout {
        match self {
            Self::Y => Layout::new(SOLENOID, &[]),
            Self::None | Self::Virt => Layout::EMPTY,
        }
    }

    fn exported_tags(self) -> Option<ExportedTags> {
        match self {
            Self::Y => Some(EXPORT_Y),
            Self::None | Self::Virt => None,
        }
    }
}
