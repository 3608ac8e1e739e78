//! Trigger manager — append-only store of condition → action rules.

use smarthub_domain::trigger::Trigger;

/// Holds triggers in insertion order. Nothing here evaluates them.
#[derive(Debug, Default)]
pub struct TriggerManager {
    triggers: Vec<Trigger>,
}

impl TriggerManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trigger.
    pub fn add_trigger(&mut self, trigger: Trigger) {
        self.triggers.push(trigger);
    }

    /// All triggers, oldest first.
    #[must_use]
    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
