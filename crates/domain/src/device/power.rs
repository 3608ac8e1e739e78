//! Power state — the only state machine a device has.

use serde::{Deserialize, Serialize};

/// On/off state of a device. Every device starts [`Off`](Self::Off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_off() {
        assert_eq!(PowerState::default(), PowerState::Off);
        assert!(!PowerState::default().is_on());
    }

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(PowerState::On.to_string(), "on");
        assert_eq!(PowerState::Off.to_string(), "off");
    }
}
