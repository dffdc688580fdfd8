use super::{ChannelSpec, ExportedTags, Layout, SubtypeRules};
use crate::device::{ChannelKind, DeviceFamily, DeviceTag, ParameterTag};

/// Weight sensor subtypes. A load cell bridge is read through two analog
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WtSubtype {
    None,
    Wt,
    Virt,
}

const BRIDGE: &[ChannelSpec] = &[(ChannelKind::AI, ""), (ChannelKind::AI, "")];

const BRIDGE_PARAMETERS: &[ParameterTag] = &[
    ParameterTag::PNominalW,
    ParameterTag::PRkp,
    ParameterTag::PC0,
    ParameterTag::PDt,
];

const EXPORT_WT: ExportedTags = &[
    (DeviceTag::St, 1),
    (DeviceTag::M, 1),
    (DeviceTag::V, 1),
    (DeviceTag::PNominalW, 1),
    (DeviceTag::PDt, 1),
    (DeviceTag::PRkp, 1),
    (DeviceTag::PCz, 1),
];

impl SubtypeRules for WtSubtype {
    const FAMILY: DeviceFamily = DeviceFamily::Wt;
    const NONE: Self = Self::None;
    const ALL: &'static [Self] = &[Self::Wt, Self::Virt];

    fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Wt => "WT",
            Self::Virt => "WT_VIRT",
        }
    }

    fn layout(self) -> Layout {
        match self {
            Self::Wt => Layout::new(BRIDGE, BRIDGE_PARAMETERS),
            Self::None | Self::Virt => Layout::EMPTY,
        }
    }

    fn exported_tags(self) -> Option<ExportedTags> {
        match self {
            Self::Wt => Some(EXPORT_WT),
            Self::None | Self::Virt => None,
        }
    }

    fn empty_token_default() -> Self {
        Self::Wt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::subtype::fixtures::{channel_counts, configured, parameter_keys};
    use crate::device::{DeviceSubtype, exported_properties, subtype_display_name};

    #[test]
    fn test_empty_token_falls_back_to_bridge_sensor() {
        let (device, diagnostic) = configured(DeviceFamily::Wt, "");
        assert_eq!(device.subtype(), Some(DeviceSubtype::Wt(WtSubtype::Wt)));
        assert_eq!(
            diagnostic,
            "\"TANK2WT1\" - subtype is not set, using WT (WT, WT_VIRT).\n"
        );
        assert_eq!(channel_counts(&device), [2, 0, 0, 0]);
    }

    #[test]
    fn test_apply_subtype_resolves_subtype() {
        let cases = [
            ("WT", WtSubtype::Wt),
            ("WT_VIRT", WtSubtype::Virt),
            ("Incorrect", WtSubtype::None),
        ];
        for (token, subtype) in cases {
            let (device, _) = configured(DeviceFamily::Wt, token);
            assert_eq!(device.subtype(), Some(DeviceSubtype::Wt(subtype)), "token {token:?}");
        }
    }

    #[test]
    fn test_display_name() {
        let cases = [("WT", "WT"), ("", "WT"), ("WT_VIRT", "WT_VIRT"), ("Incorrect", "")];
        for (token, name) in cases {
            let (device, _) = configured(DeviceFamily::Wt, token);
            assert_eq!(subtype_display_name(DeviceFamily::Wt, device.subtype().unwrap()), name);
        }
    }

    #[test]
    fn test_parameters_in_order() {
        let (device, _) = configured(DeviceFamily::Wt, "WT");
        assert_eq!(parameter_keys(&device), BRIDGE_PARAMETERS);

        let (device, _) = configured(DeviceFamily::Wt, "WT_VIRT");
        assert!(parameter_keys(&device).is_empty());
    }

    #[test]
    fn test_exported_properties() {
        let cases = [
            ("WT", Some(EXPORT_WT)),
            ("", Some(EXPORT_WT)),
            ("WT_VIRT", None),
            ("Incorrect", None),
        ];
        for (token, tags) in cases {
            let (device, _) = configured(DeviceFamily::Wt, token);
            let subtype = device.subtype().unwrap();
            assert_eq!(exported_properties(DeviceFamily::Wt, subtype), tags, "token {token:?}");
        }
    }
}
