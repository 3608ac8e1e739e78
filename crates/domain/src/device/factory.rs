//! Device factory — builds a [`Device`] from a raw type tag.

use crate::error::SmartHubError;

use super::{Device, DeviceKind};

/// Type tags understood by the factory.
pub const LIGHT: &str = "light";
pub const THERMOSTAT: &str = "thermostat";
pub const DOOR_LOCK: &str = "doorlock";

/// Constructs device variants from the operator's type tag.
///
/// An unrecognised tag never blocks registration: it produces a
/// [`DeviceKind::Generic`] device carrying the tag.
pub struct DeviceFactory;

impl DeviceFactory {
    /// Whether the given tag needs a numeric attribute (the temperature).
    #[must_use]
    pub fn needs_attribute(tag: &str) -> bool {
        tag == THERMOSTAT
    }

    /// Build a device of the kind named by `tag`.
    ///
    /// `attribute` is the thermostat's temperature and is ignored for every
    /// other kind.
    #[must_use]
    pub fn create(tag: &str, id: &str, attribute: i32) -> Device {
        let kind = match tag {
            LIGHT => DeviceKind::Light,
            THERMOSTAT => DeviceKind::Thermostat {
                temperature: attribute,
            },
            DOOR_LOCK => DeviceKind::DoorLock,
            other => DeviceKind::Generic {
                tag: other.to_string(),
            },
        };
        Device::new(id, kind)
    }
}

/// Parse an operator-entered temperature. Surrounding whitespace is an error.
///
/// # Errors
///
/// Returns [`SmartHubError::InvalidTemperature`] when the input is not an
/// integer.
pub fn parse_temperature(input: &str) -> Result<i32, SmartHubError> {
    input
        .parse()
        .map_err(|source| SmartHubError::InvalidTemperature {
            input: input.to_string(),
            source,
        })
}
