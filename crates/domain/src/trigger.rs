//! Trigger — a stored condition → action rule.
//!
//! Both halves are free-form text and are never parsed or evaluated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// e.g. `temperature > 75`
    pub condition: String,
    /// e.g. `turnOff(1)`
    pub action: String,
}

impl Trigger {
    #[must_use]
    pub fn new(condition: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            action: action.into(),
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{condition: \"{}\", action: \"{}\"}}",
            self.condition, self.action
        )
    }
}
