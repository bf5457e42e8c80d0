//! Plain-text rendering of a [`ScanReport`].
//!
//! Each readable file is printed as a `Contents of <path>:` header, its lines
//! verbatim, and a hyphen separator. Files that fail to decode get a single
//! `Error reading <path>: <error>` line. The report ends with the total.

use crate::types::{FileOutcome, ScanReport};
use std::io::{self, Write};

/// Number of hyphens in the line that follows each file's contents.
pub const SEPARATOR_WIDTH: usize = 50;

/// Formats the whole report into a string.
pub fn format_report(report: &ScanReport) -> String {
    let mut out = String::with_capacity(1024);
    for outcome in &report.files {
        out.push_str(&format_outcome(outcome));
    }
    out.push_str(&format!("Total lines: {}\n", report.total_lines));
    out
}

/// Formats a single file outcome, without the trailing total.
pub fn format_outcome(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Read(entry) => {
            let mut out = format!("Contents of {}:\n", entry.path.display());
            for line in &entry.lines {
                out.push_str(line);
            }
            // Also terminates a final line that has no newline of its own.
            out.push('\n');
            out.push_str(&"-".repeat(SEPARATOR_WIDTH));
            out.push_str("\n\n");
            out
        }
        FileOutcome::DecodeFailed { path, error } => {
            format!("Error reading {}: {}\n", path.display(), error)
        }
    }
}

/// Writes the formatted report to `out`.
pub fn write_report<W: Write>(report: &ScanReport, out: &mut W) -> io::Result<()> {
    out.write_all(format_report(report).as_bytes())
}
