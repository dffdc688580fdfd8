//! Per-family subtype tables.
//!
//! Every device family owns a closed subtype enum implementing
//! [`SubtypeRules`]. The enums are gathered in the [`DeviceSubtype`] union so
//! that family/subtype pairs stay exhaustively checked. Raw tokens coming
//! from CAD are parsed once through [`resolve`] and never travel further.

mod gs;
mod ls;
mod m;
mod pt;
mod qt;
mod vtug;
mod wt;
mod y;

pub use gs::GsSubtype;
pub use ls::LsSubtype;
pub use m::MSubtype;
pub use pt::PtSubtype;
pub use qt::QtSubtype;
pub use vtug::VtugSubtype;
pub use wt::WtSubtype;
pub use y::YSubtype;

use std::fmt;

use super::channel::ChannelKind;
use super::entity::Device;
use super::family::DeviceFamily;
use super::tag::{DeviceTag, ParameterTag, PropertyTag};

/// Kind and label of a channel a subtype wires.
pub type ChannelSpec = (ChannelKind, &'static str);

/// Ordered tag → arity table a subtype exports to the runtime.
pub type ExportedTags = &'static [(DeviceTag, u32)];

/// Channels, parameter slots and properties a subtype adds to a device, in
/// the order they are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub channels: &'static [ChannelSpec],
    pub parameters: &'static [ParameterTag],
    pub properties: &'static [PropertyTag],
}

impl Layout {
    pub const EMPTY: Layout = Layout::new(&[], &[]);

    pub const fn new(
        channels: &'static [ChannelSpec],
        parameters: &'static [ParameterTag],
    ) -> Self {
        Self {
            channels,
            parameters,
            properties: &[],
        }
    }

    pub const fn with_properties(self, properties: &'static [PropertyTag]) -> Self {
        Self {
            channels: self.channels,
            parameters: self.parameters,
            properties,
        }
    }
}

/// Capability set shared by every family's subtype enum.
pub trait SubtypeRules: Copy + Eq + fmt::Debug + Into<DeviceSubtype> + 'static {
    const FAMILY: DeviceFamily;

    /// Subtype of a device whose token was not recognized.
    const NONE: Self;

    /// Accepted subtypes, in the order diagnostics list them. Excludes `NONE`.
    const ALL: &'static [Self];

    /// Wire-level token; empty for `NONE`.
    fn token(self) -> &'static str;

    fn layout(self) -> Layout;

    fn exported_tags(self) -> Option<ExportedTags>;

    /// Subtype picked for an empty token.
    fn empty_token_default() -> Self {
        Self::NONE
    }

    /// Whether the subtype stands for a physical product that needs an
    /// article reference.
    fn requires_article(self) -> bool {
        false
    }

    /// Whether the family reports a measuring range (`_<low>..<high>`).
    fn measures_range() -> bool {
        false
    }

    fn connection_label(self) -> &'static str {
        ""
    }

    /// Family-specific validation, appended after the shared checks.
    fn check(self, device: &Device, report: &mut String) {
        if self.requires_article() && device.article().is_empty() {
            report.push_str(&format!("\"{}\" - article is not set.\n", device.name()));
        }
    }

    fn parse(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|subtype| subtype.token() == token)
    }
}

/// Closed union of every family's subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceSubtype {
    Pt(PtSubtype),
    Qt(QtSubtype),
    Ls(LsSubtype),
    M(MSubtype),
    Wt(WtSubtype),
    Gs(GsSubtype),
    Y(YSubtype),
    DevVtug(VtugSubtype),
}

macro_rules! dispatch {
    ($value:expr, $subtype:ident => $body:expr) => {
        match $value {
            DeviceSubtype::Pt($subtype) => $body,
            DeviceSubtype::Qt($subtype) => $body,
            DeviceSubtype::Ls($subtype) => $body,
            DeviceSubtype::M($subtype) => $body,
            DeviceSubtype::Wt($subtype) => $body,
            DeviceSubtype::Gs($subtype) => $body,
            DeviceSubtype::Y($subtype) => $body,
            DeviceSubtype::DevVtug($subtype) => $body,
        }
    };
}

macro_rules! impl_into_device_subtype {
    ($($subtype:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$subtype> for DeviceSubtype {
                fn from(subtype: $subtype) -> Self {
                    DeviceSubtype::$variant(subtype)
                }
            }
        )*
    };
}

impl_into_device_subtype!(
    PtSubtype => Pt,
    QtSubtype => Qt,
    LsSubtype => Ls,
    MSubtype => M,
    WtSubtype => Wt,
    GsSubtype => Gs,
    YSubtype => Y,
    VtugSubtype => DevVtug,
);

fn family_of<S: SubtypeRules>(_: S) -> DeviceFamily {
    S::FAMILY
}

fn measures_range_of<S: SubtypeRules>(_: S) -> bool {
    S::measures_range()
}

fn none_of<S: SubtypeRules>(subtype: S) -> bool {
    subtype == S::NONE
}

impl DeviceSubtype {
    pub fn family(self) -> DeviceFamily {
        dispatch!(self, s => family_of(s))
    }

    /// Canonical token; empty for "none".
    pub fn token(self) -> &'static str {
        dispatch!(self, s => s.token())
    }

    pub fn layout(self) -> Layout {
        dispatch!(self, s => s.layout())
    }

    pub fn exported_tags(self) -> Option<ExportedTags> {
        dispatch!(self, s => s.exported_tags())
    }

    pub fn is_none(self) -> bool {
        dispatch!(self, s => none_of(s))
    }

    pub fn requires_article(self) -> bool {
        dispatch!(self, s => s.requires_article())
    }

    pub fn measures_range(self) -> bool {
        dispatch!(self, s => measures_range_of(s))
    }

    pub fn connection_label(self) -> &'static str {
        dispatch!(self, s => s.connection_label())
    }

    pub(crate) fn check(self, device: &Device, report: &mut String) {
        dispatch!(self, s => s.check(device, report))
    }
}

impl fmt::Display for DeviceSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// How a raw token matched its family's enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Recognized,
    Empty,
    Unrecognized,
}

/// Outcome of parsing a raw subtype token for a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtypeResolution {
    pub subtype: DeviceSubtype,
    pub status: TokenStatus,
}

impl SubtypeResolution {
    /// Human-readable defect for `device_name`; empty when the token was
    /// recognized.
    pub fn diagnostic(&self, device_name: &str, token: &str) -> String {
        let accepted = valid_tokens(self.subtype.family()).join(", ");
        match self.status {
            TokenStatus::Recognized => String::new(),
            TokenStatus::Empty if self.subtype.is_none() => {
                format!("\"{device_name}\" - subtype is not set ({accepted}).\n")
            }
            TokenStatus::Empty => format!(
                "\"{device_name}\" - subtype is not set, using {} ({accepted}).\n",
                self.subtype.token()
            ),
            TokenStatus::Unrecognized => {
                format!("\"{device_name}\" - invalid subtype \"{token}\" ({accepted}).\n")
            }
        }
    }
}

fn resolve_as<S: SubtypeRules>(token: &str) -> SubtypeResolution {
    if token.is_empty() {
        return SubtypeResolution {
            subtype: S::empty_token_default().into(),
            status: TokenStatus::Empty,
        };
    }

    match S::parse(token) {
        Some(subtype) => SubtypeResolution {
            subtype: subtype.into(),
            status: TokenStatus::Recognized,
        },
        None => SubtypeResolution {
            subtype: S::NONE.into(),
            status: TokenStatus::Unrecognized,
        },
    }
}

fn tokens_of<S: SubtypeRules>() -> Vec<&'static str> {
    S::ALL.iter().map(|subtype| subtype.token()).collect()
}

/// Parse a raw token against `family`'s enumeration (case-sensitive).
pub fn resolve(family: DeviceFamily, token: &str) -> SubtypeResolution {
    match family {
        DeviceFamily::Pt => resolve_as::<PtSubtype>(token),
        DeviceFamily::Qt => resolve_as::<QtSubtype>(token),
        DeviceFamily::Ls => resolve_as::<LsSubtype>(token),
        DeviceFamily::M => resolve_as::<MSubtype>(token),
        DeviceFamily::Wt => resolve_as::<WtSubtype>(token),
        DeviceFamily::Gs => resolve_as::<GsSubtype>(token),
        DeviceFamily::Y => resolve_as::<YSubtype>(token),
        DeviceFamily::DevVtug => resolve_as::<VtugSubtype>(token),
    }
}

/// Tokens `family` accepts, in diagnostic order.
pub fn valid_tokens(family: DeviceFamily) -> Vec<&'static str> {
    match family {
        DeviceFamily::Pt => tokens_of::<PtSubtype>(),
        DeviceFamily::Qt => tokens_of::<QtSubtype>(),
        DeviceFamily::Ls => tokens_of::<LsSubtype>(),
        DeviceFamily::M => tokens_of::<MSubtype>(),
        DeviceFamily::Wt => tokens_of::<WtSubtype>(),
        DeviceFamily::Gs => tokens_of::<GsSubtype>(),
        DeviceFamily::Y => tokens_of::<YSubtype>(),
        DeviceFamily::DevVtug => tokens_of::<VtugSubtype>(),
    }
}

/// Canonical token for a matching (family, subtype) pair. Any mismatch,
/// including a subtype that belongs to another family, yields `""`.
pub fn subtype_display_name(family: DeviceFamily, subtype: DeviceSubtype) -> &'static str {
    if subtype.family() == family {
        subtype.token()
    } else {
        ""
    }
}

/// Tags `subtype` exports when it belongs to `family`; `None` when the pair
/// exports nothing.
pub fn exported_properties(family: DeviceFamily, subtype: DeviceSubtype) -> Option<ExportedTags> {
    if subtype.family() == family {
        subtype.exported_tags()
    } else {
        None
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_empty_for_foreign_family() {
        let pt = DeviceSubtype::Pt(PtSubtype::Pt);
        assert_eq!(subtype_display_name(DeviceFamily::Pt, pt), "PT");
        assert_eq!(subtype_display_name(DeviceFamily::Qt, pt), "");
        assert_eq!(
            subtype_display_name(DeviceFamily::Ls, DeviceSubtype::Qt(QtSubtype::Qt)),
            ""
        );
    }

    #[test]
    fn test_display_name_is_empty_for_none() {
        for family in DeviceFamily::ALL {
            let resolution = resolve(family, "Incorrect");
            assert_eq!(subtype_display_name(family, resolution.subtype), "");
        }
    }

    #[test]
    fn test_display_name_matches_every_valid_token() {
        for family in DeviceFamily::ALL {
            for token in valid_tokens(family) {
                let resolution = resolve(family, token);
                assert_eq!(resolution.status, TokenStatus::Recognized);
                assert_eq!(subtype_display_name(family, resolution.subtype), token);
                for other in DeviceFamily::ALL.into_iter().filter(|f| *f != family) {
                    assert_eq!(subtype_display_name(other, resolution.subtype), "");
                }
            }
        }
    }

    #[test]
    fn test_exported_properties_mismatch_is_none() {
        let pt = DeviceSubtype::Pt(PtSubtype::Pt);
        assert!(exported_properties(DeviceFamily::Pt, pt).is_some());
        assert!(exported_properties(DeviceFamily::Wt, pt).is_none());
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        let resolution = resolve(DeviceFamily::Pt, "pt");
        assert_eq!(resolution.status, TokenStatus::Unrecognized);
        assert!(resolution.subtype.is_none());
    }

    #[test]
    fn test_diagnostic_lists_accepted_tokens() {
        let resolution = resolve(DeviceFamily::Pt, "Incorrect");
        assert_eq!(
            resolution.diagnostic("TANK1PT1", "Incorrect"),
            "\"TANK1PT1\" - invalid subtype \"Incorrect\" (PT, PT_IOLINK, DEV_SPAE, PT_VIRT).\n"
        );

        let resolution = resolve(DeviceFamily::Pt, "");
        assert_eq!(
            resolution.diagnostic("TANK1PT1", ""),
            "\"TANK1PT1\" - subtype is not set (PT, PT_IOLINK, DEV_SPAE, PT_VIRT).\n"
        );

        let resolution = resolve(DeviceFamily::Gs, "");
        assert_eq!(
            resolution.diagnostic("TANK1GS1", ""),
            "\"TANK1GS1\" - subtype is not set, using GS (GS, GS_VIRT).\n"
        );
    }

    #[test]
    fn test_recognized_token_has_no_diagnostic() {
        let resolution = resolve(DeviceFamily::M, "M_FREQ");
        assert_eq!(resolution.diagnostic("TANK1M1", "M_FREQ"), "");
    }

    #[test]
    fn test_none_is_never_listed() {
        for family in DeviceFamily::ALL {
            assert!(!valid_tokens(family).contains(&""));
        }
    }
}
