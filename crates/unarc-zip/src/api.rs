//! High-level entry points for ZIP extraction.

use std::path::Path;

use crate::Result;
use crate::config::ExtractOptions;
use crate::extraction::ExtractionEngine;
use crate::report::ExtractionReport;

/// Extracts a ZIP archive into the destination directory.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or read, an entry name
/// resolves outside the destination root, or an unrecoverable destination
/// write occurs.
///
/// # Examples
///
/// ```no_run
/// use unarc_zip::ExtractOptions;
/// use unarc_zip::extract_zip;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_zip("dist.zip", "/tmp/out", &ExtractOptions::default())?;
/// println!("extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_zip<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    dest: Q,
    options: &ExtractOptions,
) -> Result<ExtractionReport> {
    ExtractionEngine::new(options.clone()).extract(archive.as_ref(), dest.as_ref())
}

/// Extracts only the entries whose name starts with `prefix`.
///
/// Materialized entries keep the exact relative layout they would have under
/// full extraction; `extract_zip_subtree(.., "lib/", ..)` produces
/// `dest/lib/...` paths.
///
/// # Errors
///
/// Same conditions as [`extract_zip`].
pub fn extract_zip_subtree<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    dest: Q,
    prefix: &str,
    options: &ExtractOptions,
) -> Result<ExtractionReport> {
    ExtractionEngine::new(options.clone()).extract_subtree(archive.as_ref(), dest.as_ref(), prefix)
}
