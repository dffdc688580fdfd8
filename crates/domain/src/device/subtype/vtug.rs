use super::{ChannelSpec, ExportedTags, Layout, SubtypeRules};
use crate::device::{ChannelKind, DeviceFamily};

/// Valve terminal subtypes, named after the number of valve slots. The
/// terminal is driven through a single analog output carrying the slot mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VtugSubtype {
    None,
    Vtug8,
    Vtug16,
    Vtug24,
}

const SLOT_MASK: &[ChannelSpec] = &[(ChannelKind::AO, "")];

impl SubtypeRules for VtugSubtype {
    const FAMILY: DeviceFamily = DeviceFamily::DevVtug;
    const NONE: Self = Self::None;
    const ALL: &'static [Self] = &[Self::Vtug8, Self::Vtug16, Self::Vtug24];

    fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Vtug8 => "DEV_VTUG_8",
            Self::Vtug16 => "DEV_VTUG_16",
            Self::Vtug24 => "DEV_VTUG_24",
        }
    }

    fn layout(self) -> Layout {
        match self {
            Self::None => Layout::EMPTY,
            _ => Layout::new(SLOT_MASK, &[]),
        }
    }

    fn exported_tags(self) -> Option<ExportedTags> {
        None
    }
}
