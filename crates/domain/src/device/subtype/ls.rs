use super::{ChannelSpec, ExportedTags, Layout, SubtypeRules};
use crate::device::{ChannelKind, DeviceFamily, DeviceTag, ParameterTag};

/// Level switch subtypes. `MIN` switches guard against dry running, `MAX`
/// switches against overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LsSubtype {
    None,
    Min,
    Max,
    IoLinkMin,
    IoLinkMax,
    Virt,
}

const DISCRETE_INPUT: &[ChannelSpec] = &[(ChannelKind::DI, "")];

const ANALOG_INPUT: &[ChannelSpec] = &[(ChannelKind::AI, "")];

const EXPORT_DISCRETE: ExportedTags = &[(DeviceTag::St, 1), (DeviceTag::M, 1), (DeviceTag::PDt, 1)];

const EXPORT_IOLINK: ExportedTags = &[
    (DeviceTag::St, 1),
    (DeviceTag::M, 1),
    (DeviceTag::V, 1),
    (DeviceTag::PErr, 1),
];

impl SubtypeRules for LsSubtype {
    const FAMILY: DeviceFamily = DeviceFamily::Ls;
    const NONE: Self = Self::None;
    const ALL: &'static [Self] = &[
        Self::Min,
        Self::Max,
        Self::IoLinkMin,
        Self::IoLinkMax,
        Self::Virt,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Min => "LS_MIN",
            Self::Max => "LS_MAX",
            Self::IoLinkMin => "LS_IOLINK_MIN",
            Self::IoLinkMax => "LS_IOLINK_MAX",
            Self::Virt => "LS_VIRT",
        }
    }

    fn layout(self) -> Layout {
        match self {
            Self::Min | Self::Max => Layout::new(DISCRETE_INPUT, &[ParameterTag::PDt]),
            Self::IoLinkMin | Self::IoLinkMax => {
                Layout::new(ANALOG_INPUT, &[ParameterTag::PDt, ParameterTag::PErr])
            }
            Self::None | Self::Virt => Layout::EMPTY,
        }
    }

    fn exported_tags(self) -> Option<ExportedTags> {
        match self {
            // A virtual switch is still monitored like a discrete one.
            Self::Min | Self::Max | Self::Virt => Some(EXPORT_DISCRETE),
            Self::IoLinkMin | Self::IoLinkMax => Some(EXPORT_IOLINK),
            Self::None => None,
        }
    }

    fn connection_label(self) -> &'static str {
        match self {
            Self::Min | Self::IoLinkMin => "_Min",
            Self::Max | Self::IoLinkMax => "_Max",
            Self::None | Self::Virt => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::subtype::fixtures::{channel_counts, configured, parameter_keys};
    use crate::device::{DeviceSubtype, exported_properties, subtype_display_name};

    #[test]
    fn test_apply_subtype_resolves_subtype() {
        let cases = [
            ("LS_MIN", LsSubtype::Min),
            ("LS_MAX", LsSubtype::Max),
            ("LS_IOLINK_MIN", LsSubtype::IoLinkMin),
            ("LS_IOLINK_MAX", LsSubtype::IoLinkMax),
            ("LS_VIRT", LsSubtype::Virt),
            ("", LsSubtype::None),
            ("Incorrect", LsSubtype::None),
        ];
        for (token, subtype) in cases {
            let (device, _) = configured(DeviceFamily::Ls, token);
            assert_eq!(device.subtype(), Some(DeviceSubtype::Ls(subtype)), "token {token:?}");
        }
    }

    #[test]
    fn test_display_name() {
        let cases = [
            ("LS_MIN", "LS_MIN"),
            ("LS_MAX", "LS_MAX"),
            ("LS_IOLINK_MIN", "LS_IOLINK_MIN"),
            ("LS_IOLINK_MAX", "LS_IOLINK_MAX"),
            ("LS_VIRT", "LS_VIRT"),
            ("", ""),
            ("Incorrect", ""),
        ];
        for (token, name) in cases {
            let (device, _) = configured(DeviceFamily::Ls, token);
            assert_eq!(subtype_display_name(DeviceFamily::Ls, device.subtype().unwrap()), name);
        }
    }

    #[test]
    fn test_exported_properties() {
        let cases = [
            ("LS_MIN", Some(EXPORT_DISCRETE)),
            ("LS_MAX", Some(EXPORT_DISCRETE)),
            ("LS_VIRT", Some(EXPORT_DISCRETE)),
            ("LS_IOLINK_MIN", Some(EXPORT_IOLINK)),
            ("LS_IOLINK_MAX", Some(EXPORT_IOLINK)),
            ("Incorrect", None),
            ("", None),
        ];
        for (token, tags) in cases {
            let (device, _) = configured(DeviceFamily::Ls, token);
            let subtype = device.subtype().unwrap();
            assert_eq!(exported_properties(DeviceFamily::Ls, subtype), tags, "token {token:?}");
        }
    }

    #[test]
    fn test_connection_type() {
        let cases = [
            ("_Min", "LS_MIN"),
            ("_Min", "LS_IOLINK_MIN"),
            ("_Max", "LS_MAX"),
            ("_Max", "LS_IOLINK_MAX"),
            ("", ""),
            ("", "Incorrect"),
            ("", "LS_VIRT"),
        ];
        for (expected, token) in cases {
            let (device, _) = configured(DeviceFamily::Ls, token);
            assert_eq!(device.connection_type(), expected, "token {token:?}");
        }
    }

    #[test]
    fn test_parameters_in_order() {
        let cases: [(&str, &[ParameterTag]); 5] = [
            ("LS_MIN", &[ParameterTag::PDt]),
            ("LS_MAX", &[ParameterTag::PDt]),
            ("LS_VIRT", &[]),
            ("LS_IOLINK_MIN", &[ParameterTag::PDt, ParameterTag::PErr]),
            ("LS_IOLINK_MAX", &[ParameterTag::PDt, ParameterTag::PErr]),
        ];
        for (token, expected) in cases {
            let (device, _) = configured(DeviceFamily::Ls, token);
            assert_eq!(parameter_keys(&device), expected, "token {token:?}");
        }
    }

    #[test]
    fn test_channels() {
        let cases = [
            ("LS_MIN", [0, 0, 1, 0]),
            ("LS_MAX", [0, 0, 1, 0]),
            ("LS_IOLINK_MIN", [1, 0, 0, 0]),
            ("LS_IOLINK_MAX", [1, 0, 0, 0]),
            ("LS_VIRT", [0, 0, 0, 0]),
            ("", [0, 0, 0, 0]),
            ("Incorrect", [0, 0, 0, 0]),
        ];
        for (token, expected) in cases {
            let (device, _) = configured(DeviceFamily::Ls, token);
            assert_eq!(channel_counts(&device), expected, "token {token:?}");
        }
    }

    #[test]
    fn test_range_is_not_a_level_switch_capability() {
        let (mut device, _) = configured(DeviceFamily::Ls, "LS_IOLINK_MAX");
        device.set_parameter(ParameterTag::PDt, 200.0);
        assert_eq!(device.range(), "");
    }
}
