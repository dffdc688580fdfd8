use super::{ChannelSpec, ExportedTags, Layout, SubtypeRules};
use crate::device::{ChannelKind, DeviceFamily, DeviceTag, ParameterTag};

/// Gate (position) sensor subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GsSubtype {
    None,
    Gs,
    Virt,
}

const POSITION_INPUT: &[ChannelSpec] = &[(ChannelKind::DI, "")];

const EXPORT_GS: ExportedTags = &[(DeviceTag::St, 1), (DeviceTag::M, 1), (DeviceTag::PDt, 1)];

impl SubtypeRules for GsSubtype {
    const FAMILY: DeviceFamily = DeviceFamily::Gs;
    const NONE: Self = Self::None;
    const ALL: &'static [Self] = &[Self::Gs, Self::Virt];

    fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Gs => "GS",
            Self::Virt => "GS_VIRT",
        }
    }

    fn layout(self) -> Layout {
        match self {
            Self::Gs => Layout::new(POSITION_INPUT, &[ParameterTag::PDt]),
            Self::None | Self::Virt => Layout::EMPTY,
        }
    }

    fn exported_tags(self) -> Option<ExportedTags> {
        match self {
            Self::Gs => Some(EXPORT_GS),
            Self::None | Self::Virt => None,
        }
    }

    fn empty_token_default() -> Self {
        Self::Gs
    }
}
