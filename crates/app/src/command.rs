//! Command verbs accepted by the console.

/// A parsed operator command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Add,
    Remove,
    TurnOn,
    TurnOff,
    Schedule,
    Trigger,
    Status,
    Tasks,
    Triggers,
    Exit,
    /// Anything else, kept for logging.
    Unknown(String),
}

impl Verb {
    /// Parse a command line.
    ///
    /// `exit` must be the whole line. Every other verb is the first
    /// space-separated token, so trailing text is ignored.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        if line == "exit" {
            return Self::Exit;
        }
        let head = line.split_once(' ').map_or(line, |(head, _)| head);
        match head {
            "add" => Self::Add,
            "remove" => Self::Remove,
            "turnOn" => Self::TurnOn,
            "turnOff" => Self::TurnOff,
            "schedule" => Self::Schedule,
            "trigger" => Self::Trigger,
            "status" => Self::Status,
            "tasks" => Self::Tasks,
            "triggers" => Self::Triggers,
            other => Self::Unknown(other.to_string()),
        }
    }
}
