//! Extraction errors.

use std::io;
use std::path::PathBuf;

use epochstamp_jsontime::ParseError;
use thiserror::Error;

/// Errors returned while extracting a timestamp.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The contents are not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Format(#[from] serde_json::Error),

    /// A field on the path is missing or has the wrong type.
    #[error("field {path:?}: {reason}")]
    Schema { path: String, reason: String },

    /// The field value is not a valid timestamp.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ExtractError {
    /// Reports whether the input could not be read or decoded as JSON.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Format(_))
    }

    /// Reports whether the expected field was missing or mistyped.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }

    /// Reports whether the timestamp string was rejected.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Error returned for a malformed dotted field path.
#[derive(Debug, Error)]
#[error("invalid field path {0:?}: segments must be non-empty")]
pub struct FieldPathError(pub String);
