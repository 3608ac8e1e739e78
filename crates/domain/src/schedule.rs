//! Scheduled task — a stored (device, time, command) triple.
//!
//! Tasks are never executed. The time and command are kept exactly as the
//! operator typed them.

use serde::{Deserialize, Serialize};

use crate::device::Device;

/// A schedule entry recorded against a registered device.
///
/// The task keeps a snapshot of the device id rather than a live reference,
/// so removing the device later leaves the entry readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub device_id: String,
    pub time: String,
    pub command: String,
}

impl ScheduledTask {
    /// Record a task for `device`.
    #[must_use]
    pub fn new(device: &Device, time: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            device_id: device.id.clone(),
            time: time.into(),
            command: command.into(),
        }
    }
}

impl std::fmt::Display for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{device: {}, time: \"{}\", command: \"{}\"}}",
            self.device_id, self.time, self.command
        )
    }
}
