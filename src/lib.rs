//! # Linecat
//!
//! `linecat` walks a directory tree, picks out web and Python sources by file
//! extension, and concatenates their contents together with a running line
//! count. Directories named `node_modules` are pruned at every depth before
//! the walker descends into them.
//!
//! A file whose bytes are not valid UTF-8 is reported and skipped. Every other
//! I/O failure aborts the scan with a [`ScanError`].
//!
//! The scan itself ([`scan`]) returns a [`ScanReport`]; rendering is separate
//! (see [`output`]). [`scan_to`] does both, which is what the `linecat` binary
//! runs against the current directory.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use linecat::{ScanBuilder, output, scan};
//!
//! let options = ScanBuilder::new(".")
//!     .extensions([".rs", ".toml"])
//!     .excluded_dirs(["target"])
//!     .build();
//!
//! let report = scan(options).expect("Failed to scan directory");
//!
//! print!("{}", output::format_report(&report));
//! for failure in report.failures() {
//!     eprintln!("not UTF-8: {}", failure.path().display());
//! }
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use engine::{read_outcome, scan, scan_to, split_lines};
pub use error::ScanError;
pub use options::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS, ScanBuilder, ScanOptions};
pub use types::{FileEntry, FileOutcome, ScanReport};
