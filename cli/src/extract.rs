//! The read → parse → compute pipeline.

use std::path::Path;

use epochstamp_jsontime::{FractionPolicy, Micro, Unix, normalize};
use tracing::debug;

use crate::document::{Document, FieldPath};
use crate::error::ExtractError;

/// Extracts a UTC timestamp field from a JSON document as Unix seconds.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    /// Field holding the timestamp string.
    pub field: FieldPath,
    /// How fractional seconds are normalized before parsing.
    pub policy: FractionPolicy,
}

impl Extractor {
    /// Creates an extractor for `field` using `policy`.
    pub fn new(field: FieldPath, policy: FractionPolicy) -> Self {
        Self { field, policy }
    }

    /// Loads the file at `path` and extracts its timestamp.
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<Unix, ExtractError> {
        let doc = Document::load(path)?;
        self.extract_document(&doc)
    }

    /// Extracts the timestamp from an already loaded document.
    pub fn extract_document(&self, doc: &Document) -> Result<Unix, ExtractError> {
        let raw = doc.field_str(&self.field)?;
        debug!(field = %self.field, value = raw, "found timestamp");

        let ts = self.parse(raw)?;
        let unix = ts.round_to_unix();
        debug!(
            seconds = ts.epoch_seconds_f64(),
            rounded = unix.as_secs(),
            "computed epoch seconds"
        );
        Ok(unix)
    }

    /// Normalizes and parses a timestamp string.
    pub fn parse(&self, raw: &str) -> Result<Micro, ExtractError> {
        let normalized = normalize(raw, self.policy)?;
        debug!(policy = self.policy.as_str(), normalized = %normalized, "normalized timestamp");
        Ok(Micro::parse_normalized(&normalized)?)
    }
}
