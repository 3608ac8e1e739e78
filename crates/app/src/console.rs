//! Console — the line-oriented prompt/response loop.
//!
//! Reads a verb line, then one line per follow-up field. There is no
//! re-prompting: a bad temperature aborts the whole session with an error,
//! and end of input at any point ends the session normally.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use smarthub_domain::device::{DeviceFactory, parse_temperature};

use crate::command::Verb;
use crate::error::ConsoleError;
use crate::hub::Hub;

pub const MENU: &str = "Enter command (e.g., add, remove, turnOn, turnOff, schedule, trigger, status, tasks, triggers, exit):";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Follow-up prompts, in the order each verb asks them.
pub mod prompt {
    pub const DEVICE_TYPE: &str = "Enter device type (light, thermostat, doorlock):";
    pub const DEVICE_ID: &str = "Enter device ID:";
    pub const TEMPERATURE: &str = "Enter temperature:";
    pub const REMOVE_ID: &str = "Enter device ID to remove:";
    pub const TURN_ON_ID: &str = "Enter device ID to turn on:";
    pub const TURN_OFF_ID: &str = "Enter device ID to turn off:";
    pub const SCHEDULE_ID: &str = "Enter device ID to schedule:";
    pub const SCHEDULE_TIME: &str = "Enter time to schedule (HH:MM):";
    pub const SCHEDULE_COMMAND: &str = "Enter command (Turn On, Turn Off):";
    pub const CONDITION: &str = "Enter condition for trigger (e.g., temperature > 75):";
    pub const ACTION: &str = "Enter action for trigger (e.g., turnOff(1)):";
}

type Step = Result<ControlFlow<()>, ConsoleError>;

const STOP: Step = Ok(ControlFlow::Break(()));
const NEXT: Step = Ok(ControlFlow::Continue(()));

/// Drives a [`Hub`] from operator input.
pub struct Console<R, W> {
    input: R,
    output: W,
    prompts: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console that echoes prompts.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompts: true,
        }
    }

    /// Enable or disable prompt echoing. Reports and messages are always
    /// written.
    #[must_use]
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Domain`] when a thermostat temperature is not
    /// an integer, or [`ConsoleError::Io`] when the streams fail.
    pub fn run(&mut self, hub: &mut Hub) -> Result<(), ConsoleError> {
        while let Some(line) = self.ask(MENU)? {
            if self.execute(hub, Verb::parse(&line))?.is_break() {
                break;
            }
        }
        tracing::debug!("console closed");
        Ok(())
    }

    fn execute(&mut self, hub: &mut Hub, verb: Verb) -> Step {
        match verb {
            Verb::Add => self.add(hub),
            Verb::Remove => {
                let Some(id) = self.ask(prompt::REMOVE_ID)? else {
                    return STOP;
                };
                hub.remove_device(&id);
                NEXT
            }
            Verb::TurnOn => {
                let Some(id) = self.ask(prompt::TURN_ON_ID)? else {
                    return STOP;
                };
                if let Some(phrase) = hub.turn_on_device(&id) {
                    self.say(&phrase)?;
                }
                NEXT
            }
            Verb::TurnOff => {
                let Some(id) = self.ask(prompt::TURN_OFF_ID)? else {
                    return STOP;
                };
                if let Some(phrase) = hub.turn_off_device(&id) {
                    self.say(&phrase)?;
                }
                NEXT
            }
            Verb::Schedule => self.schedule(hub),
            Verb::Trigger => self.trigger(hub),
            Verb::Status => self.report(&hub.show_status()),
            Verb::Tasks => self.report(&hub.show_scheduled_tasks()),
            Verb::Triggers => self.report(&hub.show_triggers()),
            Verb::Exit => STOP,
            Verb::Unknown(verb) => {
                tracing::debug!(%verb, "unknown command");
                self.report(INVALID_COMMAND)
            }
        }
    }

    fn add(&mut self, hub: &mut Hub) -> Step {
        let Some(tag) = self.ask(prompt::DEVICE_TYPE)? else {
            return STOP;
        };
        let Some(id) = self.ask(prompt::DEVICE_ID)? else {
            return STOP;
        };
        let attribute = if DeviceFactory::needs_attribute(&tag) {
            let Some(raw) = self.ask(prompt::TEMPERATURE)? else {
                return STOP;
            };
            parse_temperature(&raw)?
        } else {
            0
        };
        hub.add_device(DeviceFactory::create(&tag, &id, attribute));
        NEXT
    }

    fn schedule(&mut self, hub: &mut Hub) -> Step {
        let Some(id) = self.ask(prompt::SCHEDULE_ID)? else {
            return STOP;
        };
        let Some(time) = self.ask(prompt::SCHEDULE_TIME)? else {
            return STOP;
        };
        let Some(command) = self.ask(prompt::SCHEDULE_COMMAND)? else {
            return STOP;
        };
        hub.set_schedule(&id, time, command);
        NEXT
    }

    fn trigger(&mut self, hub: &mut Hub) -> Step {
        let Some(condition) = self.ask(prompt::CONDITION)? else {
            return STOP;
        };
        let Some(action) = self.ask(prompt::ACTION)? else {
            return STOP;
        };
        hub.add_trigger(condition, action);
        NEXT
    }

    fn report(&mut self, line: &str) -> Step {
        self.say(line)?;
        NEXT
    }

    /// Print `prompt` (when enabled) and read the answer.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        if self.prompts {
            self.say(prompt)?;
        }
        self.read_line()
    }

    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next input line without its terminator, or `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD` rather than failing.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
