//! Output utilities.

use std::io::{self, Write};

use epochstamp_jsontime::Unix;

/// Writes `value` as a single decimal line and flushes.
pub fn write_epoch<W: Write>(mut w: W, value: Unix) -> io::Result<()> {
    writeln!(w, "{}", value.as_secs())?;
    w.flush()
}
