//! UTC timestamp parsing and Unix epoch types.
//!
//! This crate provides:
//!
//! - [`Micro`]: a UTC instant with microsecond precision, written as
//!   `YYYY-MM-DDTHH:MM:SS.ffffffZ`
//! - [`Unix`]: Unix seconds timestamp
//! - [`FractionPolicy`]: how over-long fractional seconds are normalized
//!
//! # Example
//!
//! ```rust
//! use epochstamp_jsontime::{FractionPolicy, Micro};
//!
//! let ts = Micro::parse("2023-06-15T12:00:00.000000123Z", FractionPolicy::Truncate).unwrap();
//! assert_eq!(ts.to_string(), "2023-06-15T12:00:00.000000Z");
//! assert_eq!(ts.round_to_unix().as_secs(), 1686830400);
//! ```

mod error;
mod micro;
mod normalize;
mod unix;

pub use error::ParseError;
pub use micro::Micro;
pub use normalize::{FractionPolicy, NORMALIZED_LEN, normalize};
pub use unix::Unix;

#[cfg(test)]
mod tests;
