//! Timestamp extraction from JSON documents.
//!
//! Loads a JSON file, looks up a string field (by default `version.time`),
//! parses it as a UTC timestamp and rounds it to Unix seconds.

pub mod document;
pub mod error;
pub mod extract;
pub mod output;

pub use document::{Document, FieldPath};
pub use error::{ExtractError, FieldPathError};
pub use extract::Extractor;
pub use output::write_epoch;
