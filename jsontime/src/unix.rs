//! Unix seconds timestamp type.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

/// A timestamp at whole Unix seconds.
///
/// Displays as the bare integer, which is what the extractor prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unix(DateTime<Utc>);

impl Unix {
    /// Creates a Unix from Unix seconds. Out-of-range values map to the epoch.
    pub fn from_secs(secs: i64) -> Self {
        Self(Utc.timestamp_opt(secs, 0).single().unwrap_or_default())
    }

    /// Returns the Unix seconds value.
    pub fn as_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns the underlying DateTime<Utc>.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Unix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.timestamp())
    }
}
