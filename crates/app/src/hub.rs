//! Hub — the in-memory registry of devices, scheduled tasks, and triggers.
//!
//! Every mutation is non-failing. Operations naming an id that is not
//! registered are silently absorbed: they return `None` and leave the hub
//! untouched.

use std::collections::BTreeMap;

use smarthub_domain::device::Device;
use smarthub_domain::schedule::ScheduledTask;
use smarthub_domain::trigger::Trigger;

use crate::report;
use crate::trigger_manager::TriggerManager;

/// Owns all devices, tasks, and triggers for the lifetime of a session.
///
/// Devices are keyed by id and iterate in ascending id order.
#[derive(Debug, Default)]
pub struct Hub {
    devices: BTreeMap<String, Device>,
    tasks: Vec<ScheduledTask>,
    triggers: TriggerManager,
}

impl Hub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device, replacing any device with the same id.
    ///
    /// Returns the replaced device, if any.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id))]
    pub fn add_device(&mut self, device: Device) -> Option<Device> {
        let replaced = self.devices.insert(device.id.clone(), device);
        if replaced.is_some() {
            tracing::info!("device replaced");
        } else {
            tracing::info!("device added");
        }
        replaced
    }

    /// Unregister a device. Scheduled tasks that name it are kept.
    #[tracing::instrument(skip(self))]
    pub fn remove_device(&mut self, id: &str) -> Option<Device> {
        let removed = self.devices.remove(id);
        if removed.is_none() {
            tracing::debug!("no such device");
        }
        removed
    }

    /// Switch a device on, returning its transition phrase.
    #[tracing::instrument(skip(self))]
    pub fn turn_on_device(&mut self, id: &str) -> Option<String> {
        let Some(device) = self.devices.get_mut(id) else {
            tracing::debug!("no such device");
            return None;
        };
        Some(device.turn_on())
    }

    /// Switch a device off, returning its transition phrase.
    #[tracing::instrument(skip(self))]
    pub fn turn_off_device(&mut self, id: &str) -> Option<String> {
        let Some(device) = self.devices.get_mut(id) else {
            tracing::debug!("no such device");
            return None;
        };
        Some(device.turn_off())
    }

    /// Record a scheduled task for a registered device.
    ///
    /// The request is dropped when `id` is not registered.
    #[tracing::instrument(skip(self, time, command))]
    pub fn set_schedule(
        &mut self,
        id: &str,
        time: impl Into<String>,
        command: impl Into<String>,
    ) -> Option<&ScheduledTask> {
        let Some(device) = self.devices.get(id) else {
            tracing::debug!("schedule dropped, no such device");
            return None;
        };
        self.tasks.push(ScheduledTask::new(device, time, command));
        self.tasks.last()
    }

    /// Store a trigger rule. Always succeeds.
    #[tracing::instrument(skip(self, condition, action))]
    pub fn add_trigger(&mut self, condition: impl Into<String>, action: impl Into<String>) {
        self.triggers.add_trigger(Trigger::new(condition, action));
    }

    /// Look up a registered device.
    #[must_use]
    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.get(id)
    }

    /// Registered devices in report order.
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.devices.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Scheduled tasks, oldest first.
    #[must_use]
    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    #[must_use]
    pub fn triggers(&self) -> &TriggerManager {
        &self.triggers
    }

    /// The `Status Report: "..."` line.
    #[must_use]
    pub fn show_status(&self) -> String {
        report::status_report(self.devices())
    }

    /// The `Scheduled Tasks: "[...]"` line.
    #[must_use]
    pub fn show_scheduled_tasks(&self) -> String {
        report::task_report(&self.tasks)
    }

    /// The `Automated Triggers: "[...]"` line.
    #[must_use]
    pub fn show_triggers(&self) -> String {
        report::trigger_report(self.triggers.triggers())
    }
}
