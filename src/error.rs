//! Error types for gdswitch.
//!
//! All errors in gdswitch are represented by [`SwitchError`], which covers
//! settings IO, `gdctl` failures, and modes that cannot be applied with the
//! monitors currently connected.
//!
//! Parsing `gdctl` output never fails: unrecognised text degrades to
//! [`Mode::Unknown`](crate::model::Mode::Unknown) instead of producing an error.

use crate::model::Mode;
use thiserror::Error;

/// All possible errors that can occur in gdswitch.
#[derive(Error, Debug)]
pub enum SwitchError {
    /// Could not determine the user's config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to read or write a file on disk.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Settings could not be serialized to TOML.
    #[error("Failed to write settings: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// `gdctl` could not be spawned or exited unsuccessfully.
    #[error("{command} failed: {reason}")]
    ToolError {
        /// The command line that was run.
        command: String,
        /// Spawn error, or exit status plus stderr.
        reason: String,
    },

    /// The requested mode needs a monitor kind that is not connected.
    #[error("Cannot apply mode '{0}'")]
    CannotApply(Mode),
}

/// Convenient Result type alias for gdswitch operations.
pub type Result<T> = std::result::Result<T, SwitchError>;
