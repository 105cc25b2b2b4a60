//! Text report of structure sizes.
//!
//! One line per structure, `<name>\t<size>\n`, in table order.

use std::io::Write;

use crate::error::Result;
use crate::layout::struct_sizes;

/// Write the report to `out` and flush it.
///
/// # Errors
///
/// Returns `ProbeError::Io` if the writer rejects a line or the flush.
pub fn write_report<W: Write>(out: &mut W) -> Result<()> {
    for entry in struct_sizes() {
        writeln!(out, "{entry}")?;
    }
    out.flush()?;
    Ok(())
}

/// Render the report into a string.
#[must_use]
pub fn render_report() -> String {
    struct_sizes()
        .iter()
        .fold(String::new(), |mut text, entry| {
            text.push_str(&entry.to_string());
            text.push('\n');
            text
        })
}
