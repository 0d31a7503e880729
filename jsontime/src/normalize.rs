//! Normalization of UTC timestamp strings to fixed microsecond width.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ParseError;

/// Length of a normalized timestamp: `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
pub const NORMALIZED_LEN: usize = 27;

/// Number of leading characters kept by [`FractionPolicy::Positional`].
const POSITIONAL_PREFIX: usize = 26;

pub(crate) const NORMALIZED_PATTERN: &str = "YYYY-MM-DDTHH:MM:SS.ffffffZ";
const TRUNCATE_PATTERN: &str = "YYYY-MM-DDTHH:MM:SS.ffffff[f...]Z";

static FRACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{6})([0-9]*)Z$")
        .expect("fraction pattern is valid")
});

pub(crate) static NORMALIZED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{6}Z$")
        .expect("normalized pattern is valid")
});

/// How a timestamp's fractional seconds are brought to exactly six digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractionPolicy {
    /// Requires at least six fractional digits and a trailing `Z`;
    /// digits past the sixth are dropped.
    #[default]
    Truncate,
    /// Requires exactly six fractional digits and a trailing `Z`.
    Exact,
    /// Keeps the first 26 characters and appends the last one, without
    /// looking at what they are. The result is still strictly parsed.
    Positional,
}

impl FractionPolicy {
    /// Returns the lowercase name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Exact => "exact",
            Self::Positional => "positional",
        }
    }
}

/// Normalizes `s` to the fixed-width form `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
///
/// Under [`FractionPolicy::Positional`] the output is not validated here;
/// [`Micro::parse_normalized`](crate::Micro::parse_normalized) rejects
/// anything that did not line up.
pub fn normalize(s: &str, policy: FractionPolicy) -> Result<Cow<'_, str>, ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    match policy {
        FractionPolicy::Positional => {
            let mut out: String = s.chars().take(POSITIONAL_PREFIX).collect();
            // Non-empty was checked above.
            out.extend(s.chars().last());
            Ok(Cow::Owned(out))
        }
        FractionPolicy::Truncate | FractionPolicy::Exact => {
            let caps = FRACTION_RE.captures(s).ok_or_else(|| ParseError::Pattern {
                input: s.to_string(),
                expected: match policy {
                    FractionPolicy::Exact => NORMALIZED_PATTERN,
                    _ => TRUNCATE_PATTERN,
                },
            })?;

            let extra = caps.get(2).map_or("", |m| m.as_str());
            if extra.is_empty() {
                return Ok(Cow::Borrowed(s));
            }
            if policy == FractionPolicy::Exact {
                return Err(ParseError::Pattern {
                    input: s.to_string(),
                    expected: NORMALIZED_PATTERN,
                });
            }

            let head = caps.get(1).map_or("", |m| m.as_str());
            Ok(Cow::Owned(format!("{head}Z")))
        }
    }
}
