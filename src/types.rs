use std::path::{Path, PathBuf};
use std::str::Utf8Error;

/// The result of reading one eligible file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file decoded as UTF-8 and was split into lines.
    Read(FileEntry),
    /// The file's bytes are not valid UTF-8. It contributes no lines.
    DecodeFailed {
        /// The full path to the file.
        path: PathBuf,
        /// Where decoding stopped.
        error: Utf8Error,
    },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Read(entry) => &entry.path,
            FileOutcome::DecodeFailed { path, .. } => path,
        }
    }

    /// Number of lines this file adds to the total.
    pub fn line_count(&self) -> u64 {
        match self {
            FileOutcome::Read(entry) => entry.line_count(),
            FileOutcome::DecodeFailed { .. } => 0,
        }
    }
}

/// A file that was read successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The directory path joined with the file name, e.g. `./src/app.js`.
    pub path: PathBuf,
    /// The file's text split on universal newlines.
    ///
    /// Every line but possibly the last ends in `\n`; `\r\n` and lone `\r`
    /// have already been translated.
    pub lines: Vec<String>,
}

impl FileEntry {
    pub fn line_count(&self) -> u64 {
        self.lines.len() as u64
    }
}

/// The complete result of a scan, in visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// One outcome per eligible file.
    pub files: Vec<FileOutcome>,
    /// Sum of [`FileOutcome::line_count`] over `files`.
    pub total_lines: u64,
}

impl ScanReport {
    pub(crate) fn push(mut self, outcome: FileOutcome) -> Self {
        self.total_lines += outcome.line_count();
        self.files.push(outcome);
        self
    }

    /// Outcomes for files that could not be decoded.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files
            .iter()
            .filter(|f| matches!(f, FileOutcome::DecodeFailed { .. }))
    }
}
