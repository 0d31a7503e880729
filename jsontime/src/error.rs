//! Timestamp parse errors.

use thiserror::Error;

/// Errors returned when a timestamp string cannot be parsed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The timestamp string is empty.
    #[error("timestamp is empty")]
    Empty,

    /// The string does not have the expected fixed-width shape.
    #[error("timestamp {input:?} does not match {expected}")]
    Pattern {
        input: String,
        expected: &'static str,
    },

    /// The shape is right but the fields do not form a real UTC time.
    #[error("timestamp {input:?} is not a valid calendar time: {reason}")]
    Calendar { input: String, reason: String },
}
