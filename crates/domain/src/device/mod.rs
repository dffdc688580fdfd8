//! Devices: family, subtype, channels, parameters and configuration checks.

mod channel;
mod entity;
mod family;
mod subtype;
mod tag;

pub use channel::{ChannelAddress, ChannelKind, IOChannel};
pub use entity::{Device, DeviceIdentity};
pub use family::DeviceFamily;
pub use subtype::{
    ChannelSpec, DeviceSubtype, ExportedTags, GsSubtype, Layout, LsSubtype, MSubtype, PtSubtype,
    QtSubtype, SubtypeResolution, SubtypeRules, TokenStatus, VtugSubtype, WtSubtype, YSubtype,
    exported_properties, resolve, subtype_display_name, valid_tokens,
};
pub use tag::{DeviceTag, ParameterTag, PropertyTag};
