//! UTC timestamp with microsecond precision.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Timelike, Utc};
use std::fmt;

use crate::normalize::{NORMALIZED_PATTERN, NORMALIZED_RE};
use crate::{FractionPolicy, ParseError, Unix, normalize};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// A UTC instant with microsecond precision, written as
/// `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Micro(DateTime<Utc>);

impl Micro {
    /// Creates a new Micro from a DateTime<Utc>, dropping sub-microsecond digits.
    pub fn new(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(6))
    }

    /// Creates a Micro at a whole second.
    pub fn from_unix(u: Unix) -> Self {
        Self(u.datetime())
    }

    /// Parses `s` after normalizing it with `policy`.
    pub fn parse(s: &str, policy: FractionPolicy) -> Result<Self, ParseError> {
        let normalized = normalize(s, policy)?;
        Self::parse_normalized(&normalized)
    }

    /// Parses a string that must already be exactly
    /// `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
    pub fn parse_normalized(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if !NORMALIZED_RE.is_match(s) {
            return Err(ParseError::Pattern {
                input: s.to_string(),
                expected: NORMALIZED_PATTERN,
            });
        }

        let naive = NaiveDateTime::parse_from_str(s, FORMAT).map_err(|e| ParseError::Calendar {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        // chrono encodes second 60 as an overflowing nanosecond field.
        if naive.nanosecond() >= 1_000_000_000 {
            return Err(ParseError::Calendar {
                input: s.to_string(),
                reason: "leap seconds are not supported".to_string(),
            });
        }

        Ok(Self(naive.and_utc()))
    }

    /// Returns the underlying DateTime<Utc>.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the seconds elapsed since the Unix epoch, including the
    /// microsecond fraction.
    pub fn epoch_seconds_f64(&self) -> f64 {
        self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_micros()) / 1e6
    }

    /// Rounds to the nearest whole second, ties away from zero.
    ///
    /// Computed on the integer parts, so `.500000` always rounds up for
    /// instants after the epoch and down for instants before it.
    pub fn round_to_unix(&self) -> Unix {
        let secs = self.0.timestamp();
        let micros = self.0.timestamp_subsec_micros();
        // timestamp() floors, so for negative instants the fraction counts
        // up from the earlier second.
        let carry = if secs >= 0 {
            micros >= 500_000
        } else {
            micros > 500_000
        };
        Unix::from_secs(secs + i64::from(carry))
    }
}

impl fmt::Display for Micro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}
