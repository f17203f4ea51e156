//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// The text was not a valid "HH:MM" clock time.
    #[error("Invalid clock time '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Invalid duration: {0} minutes (must be greater than zero)")]
    InvalidDuration(i64),

    /// The day window must start strictly before it ends.
    #[error("Invalid day window: start {start} is not before end {end}")]
    InvalidWindow { start: String, end: String },

    #[error("Invalid step: {0} minutes (must be greater than zero)")]
    InvalidStep(i64),

    #[error("Invalid session length: {0} minutes (must be greater than zero)")]
    InvalidSessionLength(i64),
}

pub type Result<T> = std::result::Result<T, SlotError>;
