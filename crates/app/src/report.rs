//! Report rendering — the exact lines printed for `status`, `tasks`, and
//! `triggers`.

use std::fmt::Display;

use smarthub_domain::device::Device;
use smarthub_domain::schedule::ScheduledTask;
use smarthub_domain::trigger::Trigger;

pub const STATUS_HEADING: &str = "Status Report";
pub const TASKS_HEADING: &str = "Scheduled Tasks";
pub const TRIGGERS_HEADING: &str = "Automated Triggers";

/// `Status Report: "<s1>. <s2>."`, or `Status Report: ""` with no devices.
#[must_use]
pub fn status_report<'a>(devices: impl IntoIterator<Item = &'a Device>) -> String {
    let body = devices
        .into_iter()
        .map(|device| format!("{}.", device.status()))
        .collect::<Vec<_>>()
        .join(" ");
    quoted(STATUS_HEADING, &body)
}

/// `Scheduled Tasks: "[{device: L1, time: "08:00", command: "Turn On"}, ...]"`.
#[must_use]
pub fn task_report(tasks: &[ScheduledTask]) -> String {
    quoted(TASKS_HEADING, &bracketed(tasks))
}

/// `Automated Triggers: "[{condition: "c", action: "a"}, ...]"`.
#[must_use]
pub fn trigger_report(triggers: &[Trigger]) -> String {
    quoted(TRIGGERS_HEADING, &bracketed(triggers))
}

/// `[a, b, c]`, or `[]` when empty.
fn bracketed<T: Display>(items: &[T]) -> String {
    let inner = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

fn quoted(heading: &str, body: &str) -> String {
    format!("{heading}: \"{body}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthub_domain::device::DeviceKind;

    fn light(id: &str) -> Device {
        Device::new(id, DeviceKind::Light)
    }

    #[test]
    fn should_render_empty_status_as_empty_quotes() {
        assert_eq!(status_report(&Vec::<Device>::new()), "Status Report: \"\"");
    }

    #[test]
    fn should_terminate_each_status_with_a_period() {
        let devices = [light("L1"), light("L2")];
        assert_eq!(
            status_report(&devices),
            "Status Report: \"Light L1 is Off. Light L2 is Off.\""
        );
    }

    #[test]
    fn should_render_empty_tasks_as_brackets() {
        assert_eq!(task_report(&[]), "Scheduled Tasks: \"[]\"");
    }

    #[test]
    fn should_render_single_task() {
        let task = ScheduledTask::new(&light("L1"), "08:00", "Turn On");
        assert_eq!(
            task_report(&[task]),
            "Scheduled Tasks: \"[{device: L1, time: \"08:00\", command: \"Turn On\"}]\""
        );
    }

    #[test]
    fn should_separate_tasks_without_trailing_comma() {
        let device = light("L1");
        let tasks = [
            ScheduledTask::new(&device, "08:00", "Turn On"),
            ScheduledTask::new(&device, "22:00", "Turn Off"),
        ];
        let report = task_report(&tasks);
        assert!(report.ends_with("command: \"Turn Off\"}]\""));
        assert_eq!(report.matches("}, {").count(), 1);
        assert!(!report.contains("}, ]"));
    }

    #[test]
    fn should_render_empty_triggers_as_brackets() {
        assert_eq!(trigger_report(&[]), "Automated Triggers: \"[]\"");
    }

    #[test]
    fn should_render_triggers_in_insertion_order() {
        let triggers: Vec<Trigger> = (1..=3)
            .map(|n| Trigger::new(format!("c{n}"), format!("a{n}")))
            .collect();
        assert_eq!(
            trigger_report(&triggers),
            "Automated Triggers: \"[{condition: \"c1\", action: \"a1\"}, \
             {condition: \"c2\", action: \"a2\"}, \
             {condition: \"c3\", action: \"a3\"}]\""
        );
    }
}
