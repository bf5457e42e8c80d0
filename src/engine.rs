use crate::error::ScanError;
use crate::options::ScanOptions;
use crate::output::write_report;
use crate::types::{FileEntry, FileOutcome, ScanReport};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
    matcher: GlobSet,
}
impl Walker {
    fn new(options: &ScanOptions) -> Result<Self, ScanError> {
        if !options.root.is_dir() {
            return Err(ScanError::InvalidRoot(options.root.clone()));
        }
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(|a, b| {
                // A directory's own files come before anything beneath its subdirectories.
                a.is_dir()
                    .cmp(&b.is_dir())
                    .then_with(|| a.file_name().cmp(&b.file_name()))
            });
        let excluded: HashSet<OsString> =
            options.excluded_dirs.iter().map(OsString::from).collect();
        // Pruning here keeps the walker from ever listing an excluded subtree.
        builder.filter_entry(move |entry| !is_excluded_dir(entry, &excluded));
        Ok(Self {
            inner: builder.build(),
            matcher: extension_matcher(&options.extensions)?,
        })
    }
    fn eligible_files(self) -> impl Iterator<Item = Result<PathBuf, ScanError>> {
        let matcher = self.matcher;
        self.inner.filter_map(move |result| match result {
            Ok(entry) if is_eligible(&entry, &matcher) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(ScanError::Walk(e))),
        })
    }
}
fn extension_matcher(extensions: &[String]) -> Result<GlobSet, ScanError> {
    let mut builder = GlobSetBuilder::new();
    for ext in extensions {
        builder.add(Glob::new(&format!("*{}", ext))?);
    }
    Ok(builder.build()?)
}
fn is_excluded_dir(entry: &DirEntry, excluded: &HashSet<OsString>) -> bool {
    // The root is always walked, whatever its name.
    if entry.depth() == 0 || !excluded.contains(entry.file_name()) {
        return false;
    }
    if entry.file_type().is_some_and(|ft| ft.is_file()) {
        return false;
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Pruning excluded directory: {}", entry.path().display());
    true
}
fn is_eligible(entry: &DirEntry, matcher: &GlobSet) -> bool {
    if entry.depth() == 0 || !matcher.is_match(entry.file_name()) {
        return false;
    }
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        // Links are not followed during the walk. Any link that does not
        // resolve to a directory is read through, so a dangling one fails.
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}
/// Splits decoded text into lines using universal newlines.
///
/// `\r\n` and a lone `\r` both become `\n`. Every returned line ends in `\n`
/// except possibly the last one; empty input yields no lines.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            '\n' => {
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
fn read_file(path: PathBuf) -> Result<FileOutcome, ScanError> {
    let mut file = File::open(&path).map_err(|e| ScanError::io(&path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ScanError::io(&path, e))?;
    let outcome = match String::from_utf8(bytes) {
        Ok(text) => FileOutcome::Read(FileEntry {
            lines: split_lines(&text),
            path,
        }),
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Decode failure in {}: {}", path.display(), e);
            FileOutcome::DecodeFailed {
                error: e.utf8_error(),
                path,
            }
        }
    };
    Ok(outcome)
}
/// Reads one file the way [`scan`] does.
///
/// Invalid UTF-8 yields [`FileOutcome::DecodeFailed`]; any other I/O failure
/// is returned as an error.
pub fn read_outcome(path: impl AsRef<Path>) -> Result<FileOutcome, ScanError> {
    read_file(path.as_ref().to_path_buf())
}
/// Walks `options.root` and reads every eligible file, in visit order.
///
/// Excluded directories are pruned before descent. A file that is not valid
/// UTF-8 is recorded and skipped; every other failure aborts the scan.
pub fn scan(options: ScanOptions) -> Result<ScanReport, ScanError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting scan with root: {}", options.root.display());
    let walker = Walker::new(&options)?;
    let report = walker
        .eligible_files()
        .try_fold(ScanReport::default(), |report, path| {
            Ok::<_, ScanError>(report.push(read_file(path?)?))
        })?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Scan finished: {} files, {} lines",
        report.files.len(),
        report.total_lines
    );
    Ok(report)
}
/// Scans and renders the report to `out`, returning the total line count.
///
/// Nothing is written unless the scan completes.
pub fn scan_to<W: Write>(options: ScanOptions, out: &mut W) -> Result<u64, ScanError> {
    let report = scan(options)?;
    write_report(&report, out).map_err(ScanError::Output)?;
    out.flush().map_err(ScanError::Output)?;
    Ok(report.total_lines)
}
