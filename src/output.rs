//! Console output formatting.
//!
//! The packager prints exactly one line on success. All console writes go
//! through handles passed in from the entrypoint so tests can capture
//! them.

use camino::Utf8Path;
use std::fmt::Display;
use std::io::Write;

/// Format the success line naming the produced archive.
#[must_use]
pub fn success_message(archive_path: &Utf8Path) -> String {
    format!("Successfully built {archive_path}")
}

/// Write a line to the given handle.
pub fn write_line(out: &mut dyn Write, message: impl Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort output; ignore write failures.
    }
}
