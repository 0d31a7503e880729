//! JSON document loading and field lookup.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::error::{ExtractError, FieldPathError};

/// Default location of the timestamp in a resource version document.
pub const DEFAULT_FIELD_PATH: &str = "version.time";

/// A dotted path of object keys, e.g. `version.time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Parses a dotted path. Every segment must be non-empty.
    pub fn parse(s: &str) -> Result<Self, FieldPathError> {
        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(FieldPathError(s.to_string()));
        }
        Ok(Self(segments))
    }

    /// Returns the path segments in lookup order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl Default for FieldPath {
    fn default() -> Self {
        Self(DEFAULT_FIELD_PATH.split('.').map(str::to_string).collect())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A parsed JSON document.
#[derive(Debug, Clone)]
pub struct Document(Value);

impl Document {
    /// Reads and parses the JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = data.len(), "read document");
        Self::from_slice(&data)
    }

    /// Parses JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self, ExtractError> {
        Ok(Self(serde_json::from_slice(data)?))
    }

    /// Returns the root value.
    pub fn root(&self) -> &Value {
        &self.0
    }

    /// Walks `path` through nested objects.
    pub fn field(&self, path: &FieldPath) -> Result<&Value, ExtractError> {
        let mut current = &self.0;
        let mut walked: Vec<&str> = Vec::with_capacity(path.segments().len());

        for key in path.segments() {
            let obj = current.as_object().ok_or_else(|| ExtractError::Schema {
                path: display_path(&walked),
                reason: format!("expected object, found {}", json_type(current)),
            })?;
            walked.push(key.as_str());
            current = obj.get(key).ok_or_else(|| ExtractError::Schema {
                path: display_path(&walked),
                reason: "missing".to_string(),
            })?;
        }

        Ok(current)
    }

    /// Walks `path` and requires a string at the end.
    pub fn field_str(&self, path: &FieldPath) -> Result<&str, ExtractError> {
        let value = self.field(path)?;
        value.as_str().ok_or_else(|| ExtractError::Schema {
            path: path.to_string(),
            reason: format!("expected string, found {}", json_type(value)),
        })
    }
}

impl From<Value> for Document {
    fn from(v: Value) -> Self {
        Self(v)
    }
}

fn display_path(walked: &[&str]) -> String {
    if walked.is_empty() {
        "(root)".to_string()
    } else {
        walked.join(".")
    }
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
