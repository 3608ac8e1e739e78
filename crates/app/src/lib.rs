//! # smarthub-app
//!
//! Application layer — the in-memory hub and the console that drives it.
//!
//! ## Responsibilities
//! - [`hub::Hub`]: owns registered devices, scheduled tasks, and triggers and
//!   exposes the non-failing mutations the console calls
//! - [`trigger_manager::TriggerManager`]: append-only trigger store
//! - [`report`]: exact rendering of the status, task, and trigger reports
//! - [`command`]: maps an operator line to a [`command::Verb`]
//! - [`console::Console`]: line-oriented prompt/response loop over any
//!   `BufRead`/`Write` pair
//!
//! ## Dependency rule
//! Depends on `smarthub-domain` only. Never touches process-wide state; the
//! binary constructs the hub and hands it to the console.

pub mod command;
pub mod console;
pub mod error;
pub mod hub;
pub mod report;
pub mod trigger_manager;
