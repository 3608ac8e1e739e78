//! Device — a simulated controllable unit with an identity, a kind, and a
//! power state.
//!
//! Devices are keyed by the operator-chosen id string. Kind-specific payloads
//! (the thermostat's target temperature) live on the [`DeviceKind`] variant.

mod factory;
mod power;

pub use factory::{DeviceFactory, parse_temperature};
pub use power::PowerState;

use serde::{Deserialize, Serialize};

/// The kind of a device along with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    Thermostat {
        /// Target temperature in degrees.
        temperature: i32,
    },
    DoorLock,
    /// Fallback for an unrecognised type tag, which is kept verbatim.
    Generic { tag: String },
}

impl DeviceKind {
    /// Human readable label used as the first word of every phrase.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Thermostat { .. } => "Thermostat",
            Self::DoorLock => "Door lock",
            Self::Generic { .. } => "Device",
        }
    }

    /// How a power state reads for this kind. Door locks are `Locked` when on.
    #[must_use]
    pub fn describe_power(&self, power: PowerState) -> &'static str {
        match (self, power) {
            (Self::DoorLock, PowerState::On) => "Locked",
            (Self::DoorLock, PowerState::Off) => "Unlocked",
            (_, PowerState::On) => "On",
            (_, PowerState::Off) => "Off",
        }
    }
}

/// A registered device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub kind: DeviceKind,
    pub power: PowerState,
}

impl Device {
    /// Create a device in the [`PowerState::Off`] state.
    ///
    /// Any id is accepted, including an empty one.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id: id.into(),
            kind,
            power: PowerState::default(),
        }
    }

    /// Switch the device on and return the transition phrase.
    pub fn turn_on(&mut self) -> String {
        self.power = PowerState::On;
        self.transition_phrase()
    }

    /// Switch the device off and return the transition phrase.
    pub fn turn_off(&mut self) -> String {
        self.power = PowerState::Off;
        self.transition_phrase()
    }

    /// Kind-specific status sentence, without a trailing period.
    #[must_use]
    pub fn status(&self) -> String {
        let label = self.kind.label();
        let power = self.kind.describe_power(self.power);
        match &self.kind {
            DeviceKind::Thermostat { temperature } => {
                format!("{label} {} is {power} and set to {temperature} degrees", self.id)
            }
            _ => format!("{label} {} is {power}", self.id),
        }
    }

    fn transition_phrase(&self) -> String {
        format!(
            "{} {} is now {}.",
            self.kind.label(),
            self.id,
            self.kind.describe_power(self.power)
        )
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status())
    }
}
