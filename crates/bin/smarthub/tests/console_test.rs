//! End-to-end tests for the smarthub binary.
//!
//! Each test spawns the built binary, pipes a scripted session into stdin,
//! and checks the exact stdout lines.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const MENU: &str = "Enter command (e.g., add, remove, turnOn, turnOff, schedule, trigger, status, tasks, triggers, exit):";

fn run_session(input: impl AsRef<[u8]>, prompts: bool) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_smarthub"))
        .env("SMARTHUB_CONFIG", "does-not-exist.toml")
        .env("SMARTHUB_PROMPTS", if prompts { "true" } else { "false" })
        .env_remove("RUST_LOG")
        .env_remove("SMARTHUB_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_ref())
        .expect("input should be written");

    child.wait_with_output().expect("binary should finish")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[test]
fn should_print_empty_reports() {
    let output = run_session("status\ntasks\ntriggers\nexit\n", false);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Status Report: \"\"",
            "Scheduled Tasks: \"[]\"",
            "Automated Triggers: \"[]\"",
        ]
    );
}

#[test]
fn should_run_full_session() {
    let script = "\
add
light
L1
add
thermostat
T1
72
turnOn
L1
schedule
L1
08:00
Turn On
trigger
temperature > 75
turnOff(1)
status
tasks
triggers
exit
";
    let output = run_session(script, false);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Light L1 is now On.",
            "Status Report: \"Light L1 is On. Thermostat T1 is Off and set to 72 degrees.\"",
            "Scheduled Tasks: \"[{device: L1, time: \"08:00\", command: \"Turn On\"}]\"",
            "Automated Triggers: \"[{condition: \"temperature > 75\", action: \"turnOff(1)\"}]\"",
        ]
    );
}

// ---------------------------------------------------------------------------
// Error paths
// ---------------------------------------------------------------------------

#[test]
fn should_print_invalid_command_and_keep_going() {
    let output = run_session("fly\nstatus\nexit\n", false);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Invalid command.", "Status Report: \"\""]
    );
}

#[test]
fn should_exit_normally_at_end_of_input() {
    let output = run_session("add\nlight\nL1\nstatus\n", false);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Status Report: \"Light L1 is Off.\""]);
}

#[test]
fn should_fail_when_temperature_is_not_numeric() {
    let output = run_session("add\nthermostat\nT1\nwarm\nstatus\nexit\n", false);

    assert!(!output.status.success());
    assert!(stdout_lines(&output).is_empty());
}

#[test]
fn should_survive_non_utf8_input() {
    let output = run_session(&b"trigger\ncond \xff\nact\ntriggers\nexit\n"[..], false);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["Automated Triggers: \"[{condition: \"cond \u{fffd}\", action: \"act\"}]\""]
    );
}

#[test]
fn should_register_device_with_empty_id() {
    let output = run_session("add\nlight\n\nstatus\nexit\n", false);

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["Status Report: \"Light  is Off.\""]);
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

#[test]
fn should_echo_prompts_by_default() {
    let output = run_session("remove\nL1\nexit\n", true);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![MENU, "Enter device ID to remove:", MENU]
    );
}
