//! # smarthub-domain
//!
//! Pure domain model for the smarthub console simulator.
//!
//! ## Responsibilities
//! - Error conventions
//! - Define **Devices** (simulated lights, thermostats, door locks) and the
//!   factory that builds them from a raw type tag
//! - Define **Scheduled tasks** (stored device/time/command triples)
//! - Define **Triggers** (stored condition/action rule pairs)
//!
//! Tasks and triggers are data only. Nothing in this workspace fires a task
//! at its time or evaluates a trigger condition.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.

pub mod error;

pub mod device;
pub mod schedule;
pub mod trigger;
