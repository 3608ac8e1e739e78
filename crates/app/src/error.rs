//! Application-layer error types.

use smarthub_domain::error::SmartHubError;

/// Errors that stop the console loop.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),

    /// A command hit a fatal domain error (a non-numeric temperature).
    #[error("command aborted")]
    Domain(#[from] SmartHubError),
}
