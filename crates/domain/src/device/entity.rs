use serde::{Deserialize, Serialize};

use crate::device::{
    ChannelAddress, ChannelKind, DeviceFamily, DeviceSubtype, IOChannel, ParameterTag, PropertyTag,
    resolve,
};
use crate::error::{DomainError, Result};

/// Who a device is and where it sits in the plant hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    pub name: String,
    pub cad_name: String,
    pub description: String,
    pub number: u32,
    pub object_name: String,
    pub object_number: u32,
    pub family: DeviceFamily,
}

impl DeviceIdentity {
    pub fn new(name: impl Into<String>, family: DeviceFamily) -> Self {
        Self {
            name: name.into(),
            cad_name: String::new(),
            description: String::new(),
            number: 0,
            object_name: String::new(),
            object_number: 0,
            family,
        }
    }

    pub fn with_cad_name(mut self, cad_name: impl Into<String>) -> Self {
        self.cad_name = cad_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = number;
        self
    }

    /// Owning object, e.g. `("TANK", 2)` for `TANK2`.
    pub fn with_object(mut self, name: impl Into<String>, number: u32) -> Self {
        self.object_name = name.into();
        self.object_number = number;
        self
    }
}

/// A configurable piece of plant equipment.
///
/// A device starts with no subtype and no channels. [`Device::apply_subtype`]
/// is called exactly once and appends the channels, parameter slots and
/// properties of the resolved subtype. Parameter values start unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    identity: DeviceIdentity,
    article: String,
    subtype: Option<DeviceSubtype>,
    channels: Vec<IOChannel>,
    parameters: Vec<(ParameterTag, Option<f64>)>,
    properties: Vec<(PropertyTag, Option<String>)>,
}

impl Device {
    pub fn new(identity: DeviceIdentity, article: impl Into<String>) -> Self {
        Self {
            identity,
            article: article.into(),
            subtype: None,
            channels: Vec::new(),
            parameters: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn cad_name(&self) -> &str {
        &self.identity.cad_name
    }

    pub fn description(&self) -> &str {
        &self.identity.description
    }

    pub fn number(&self) -> u32 {
        self.identity.number
    }

    pub fn object_name(&self) -> &str {
        &self.identity.object_name
    }

    pub fn object_number(&self) -> u32 {
        self.identity.object_number
    }

    pub fn family(&self) -> DeviceFamily {
        self.identity.family
    }

    pub fn article(&self) -> &str {
        &self.article
    }

    /// `None` until a subtype has been applied.
    pub fn subtype(&self) -> Option<DeviceSubtype> {
        self.subtype
    }

    pub fn channels(&self) -> &[IOChannel] {
        &self.channels
    }

    pub fn channels_of(&self, kind: ChannelKind) -> impl Iterator<Item = &IOChannel> {
        self.channels.iter().filter(move |channel| channel.kind() == kind)
    }

    pub fn parameters(&self) -> &[(ParameterTag, Option<f64>)] {
        &self.parameters
    }

    pub fn parameter_keys(&self) -> Vec<ParameterTag> {
        self.parameters.iter().map(|(tag, _)| *tag).collect()
    }

    pub fn has_parameter(&self, tag: ParameterTag) -> bool {
        self.parameters.iter().any(|(key, _)| *key == tag)
    }

    /// Value of a parameter slot; `None` when the slot is missing or unset.
    pub fn parameter(&self, tag: ParameterTag) -> Option<f64> {
        self.parameters
            .iter()
            .find(|(key, _)| *key == tag)
            .and_then(|(_, value)| *value)
    }

    /// Sets an existing parameter slot. Returns `false` when the subtype has
    /// no such slot.
    pub fn set_parameter(&mut self, tag: ParameterTag, value: f64) -> bool {
        match self.parameters.iter_mut().find(|(key, _)| *key == tag) {
            Some((_, slot)) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }

    pub fn properties(&self) -> &[(PropertyTag, Option<String>)] {
        &self.properties
    }

    pub fn property_keys(&self) -> Vec<PropertyTag> {
        self.properties.iter().map(|(tag, _)| *tag).collect()
    }

    pub fn property(&self, tag: PropertyTag) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| *key == tag)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn set_property(&mut self, tag: PropertyTag, value: impl Into<String>) -> bool {
        match self.properties.iter_mut().find(|(key, _)| *key == tag) {
            Some((_, slot)) => {
                *slot = Some(value.into());
                true
            }
            None => false,
        }
    }

    /// Resolve `token` for this device's family and append the subtype's
    /// layout.
    ///
    /// Returns the diagnostic text for an empty or unrecognized token (empty
    /// string when the token was accepted). A device is configured once; a
    /// second call fails with [`DomainError::SubtypeAlreadyApplied`] and
    /// leaves the device untouched.
    pub fn apply_subtype(&mut self, token: &str) -> Result<String> {
        if self.subtype.is_some() {
            return Err(DomainError::SubtypeAlreadyApplied(self.name().to_string()));
        }

        let resolution = resolve(self.family(), token);
        let layout = resolution.subtype.layout();

        self.channels.extend(
            layout
                .channels
                .iter()
                .map(|(kind, label)| IOChannel::new(*kind, *label)),
        );
        self.parameters
            .extend(layout.parameters.iter().map(|tag| (*tag, None)));
        self.properties
            .extend(layout.properties.iter().map(|tag| (*tag, None)));
        self.subtype = Some(resolution.subtype);

        Ok(resolution.diagnostic(self.name(), token))
    }

    /// Wire the `position`-th channel of `kind` (0-based, in layout order).
    pub fn wire_channel(
        &mut self,
        kind: ChannelKind,
        position: usize,
        address: ChannelAddress,
    ) -> Result<()> {
        let index = self
            .channels
            .iter()
            .enumerate()
            .filter(|(_, channel)| channel.kind() == kind)
            .map(|(index, _)| index)
            .nth(position)
            .ok_or_else(|| DomainError::ChannelNotFound {
                device: self.name().to_string(),
                kind,
                position,
            })?;

        let channel = self.channels[index].clone();
        self.channels[index] = channel.with_address(address);
        Ok(())
    }

    /// Measuring range as `_<low>..<high>`; empty unless the subtype
    /// measures a range and both bounds are set.
    pub fn range(&self) -> String {
        let measures = self
            .subtype
            .is_some_and(|subtype| subtype.measures_range());
        if !measures {
            return String::new();
        }

        match (
            self.parameter(ParameterTag::PMinV),
            self.parameter(ParameterTag::PMaxV),
        ) {
            (Some(low), Some(high)) => format!("_{low}..{high}"),
            _ => String::new(),
        }
    }

    /// Connection suffix used on CAD drawings (`_Min`/`_Max` for level
    /// switches).
    pub fn connection_type(&self) -> &'static str {
        self.subtype
            .map(|subtype| subtype.connection_label())
            .unwrap_or("")
    }

    /// Owned by a numbered object whose name is missing.
    pub fn has_anonymous_owner(&self) -> bool {
        self.object_number() > 0 && self.object_name().is_empty()
    }

    /// Configuration defects, one line each; empty when the device is
    /// ready for export.
    pub fn check(&self) -> String {
        let mut report = String::new();

        let Some(subtype) = self.subtype else {
            report.push_str(&format!("\"{}\" - subtype is not applied.\n", self.name()));
            return report;
        };
        if subtype.is_none() {
            report.push_str(&format!("\"{}\" - subtype is not set.\n", self.name()));
        }

        for channel in self.channels.iter().filter(|channel| !channel.is_wired()) {
            report.push_str(&format!(
                "\"{}\" - unwired channel {} \"{}\".\n",
                self.name(),
                channel.kind(),
                channel.label()
            ));
        }

        subtype.check(self, &mut report);
        report
    }
}
