use std::collections::HashSet;
use std::fmt;

use domain::{Device, TechObject};
use tracing::debug;

/// Pre-export report of configuration defects, one message per defect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    messages: Vec<String>,
}

impl ValidationReport {
    /// Device checks, duplicate device names and tech objects without a
    /// CAD name usable in Lua, in that order.
    pub fn collect(devices: &[Device], objects: &[TechObject]) -> Self {
        let mut messages = Vec::new();

        for device in devices {
            messages.extend(device.check().lines().map(str::to_string));
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for device in devices {
            if !seen.insert(device.name()) && reported.insert(device.name()) {
                messages.push(format!("\"{}\" - duplicate device name.", device.name()));
            }
        }

        for object in objects.iter().filter(|object| object.file_name().is_empty()) {
            messages.push(format!(
                "\"{} {}\" - CAD name \"{}\" has no characters usable in Lua.",
                object.name(),
                object.tech_number(),
                object.cad_name()
            ));
        }

        debug!(defects = messages.len(), "Validation finished");
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::device::{ChannelAddress, ChannelKind, DeviceFamily, DeviceIdentity};

    fn wired_valve(name: &str) -> Device {
        let identity = DeviceIdentity::new(name, DeviceFamily::Y).with_object("TANK", 1);
        let mut device = Device::new(identity, "");
        device.apply_subtype("Y").unwrap();
        device
            .wire_channel(ChannelKind::DO, 0, ChannelAddress::new(1, 1, 1))
            .unwrap();
        device
    }

    #[test]
    fn test_clean_project_has_no_defects() {
        let devices = vec![wired_valve("TANK1Y1"), wired_valve("TANK1Y2")];
        let objects = vec![TechObject::new("Танк", "TANK", 1)];

        let report = ValidationReport::collect(&devices, &objects);
        assert!(report.is_empty(), "{report}");
    }

    #[test]
    fn test_collects_every_kind_of_defect() {
        let identity = DeviceIdentity::new("TANK1PT1", DeviceFamily::Pt).with_object("TANK", 1);
        let mut sensor = Device::new(identity, "");
        sensor.apply_subtype("PT").unwrap();

        let devices = vec![
            sensor,
            wired_valve("TANK1Y1"),
            wired_valve("TANK1Y1"),
            wired_valve("TANK1Y1"),
        ];
        let objects = vec![TechObject::new("Танк", "Танк", 1)];

        let report = ValidationReport::collect(&devices, &objects);
        assert_eq!(
            report.messages(),
            [
                "\"TANK1PT1\" - unwired channel AI \"\".",
                "\"TANK1PT1\" - article is not set.",
                "\"TANK1Y1\" - duplicate device name.",
                "\"Танк 1\" - CAD name \"Танк\" has no characters usable in Lua.",
            ]
        );
    }
}
