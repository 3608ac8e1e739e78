//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

use std::num::ParseIntError;

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum SmartHubError {
    /// A thermostat temperature could not be parsed as an integer.
    #[error("invalid temperature {input:?}")]
    InvalidTemperature {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
