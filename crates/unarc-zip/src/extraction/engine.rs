//! The extraction engine: drives entries through selection, resolution,
//! overwrite policy, and materialization.

use std::path::Path;
use std::time::Instant;

use crate::ExtractError;
use crate::Result;
use crate::config::ExtractOptions;
use crate::extraction::materialize::Materializer;
use crate::extraction::materialize::MaterializeError;
use crate::extraction::materialize::Outcome;
use crate::reader::ZipReader;
use crate::report::ExtractionReport;
use crate::select::EntrySelector;
use crate::select::SelectAll;
use crate::types::DestDir;
use crate::types::SafePath;

/// Orchestrates one extraction run over an archive.
///
/// Entries are processed strictly one at a time in container order; later
/// entries may depend on directories created by earlier ones, and duplicate
/// names resolve to the later entry subject to the overwrite policy. The
/// engine exclusively owns the archive handle for the duration of a run and
/// assumes no other actor mutates the destination subtree meanwhile.
///
/// # Examples
///
/// ```no_run
/// use unarc_zip::ExtractOptions;
/// use unarc_zip::extraction::ExtractionEngine;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let engine = ExtractionEngine::new(ExtractOptions::default());
/// let report = engine.extract(Path::new("dist.zip"), Path::new("/tmp/out"))?;
/// println!("extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub struct ExtractionEngine {
    options: ExtractOptions,
    selector: Box<dyn EntrySelector>,
}

impl ExtractionEngine {
    /// Creates an engine that extracts every entry.
    #[must_use]
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            selector: Box::new(SelectAll),
        }
    }

    /// Creates an engine with a custom entry selector.
    #[must_use]
    pub fn with_selector(options: ExtractOptions, selector: Box<dyn EntrySelector>) -> Self {
        Self { options, selector }
    }

    /// Extracts the archive into the destination root.
    ///
    /// # Errors
    ///
    /// Fatal conditions abort the run: the archive cannot be opened or read
    /// (wrapped with the archive path), the selector fails (wrapped with the
    /// entry name), an entry resolves outside the destination root, or an
    /// unrecoverable destination write occurs. A destination that cannot be
    /// opened for a single entry is not fatal; it is logged and recorded as
    /// a warning on the report.
    pub fn extract(&self, archive: &Path, dest: &Path) -> Result<ExtractionReport> {
        self.run(archive, dest, None)
    }

    /// Extracts only entries whose name starts with `prefix`.
    ///
    /// Materialized entries keep the exact relative layout they would have
    /// under full extraction.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ExtractionEngine::extract`].
    pub fn extract_subtree(
        &self,
        archive: &Path,
        dest: &Path,
        prefix: &str,
    ) -> Result<ExtractionReport> {
        self.run(archive, dest, Some(prefix))
    }

    fn run(
        &self,
        archive: &Path,
        dest_root: &Path,
        prefix: Option<&str>,
    ) -> Result<ExtractionReport> {
        let start = Instant::now();
        log::debug!(
            "expanding {} into {}",
            archive.display(),
            dest_root.display()
        );

        let dest = DestDir::new(dest_root.to_path_buf())?;
        let mut reader = ZipReader::open(archive, self.options.encoding)?;
        let mut materializer = Materializer::new(&self.options);
        let mut report = ExtractionReport::new();

        for index in 0..reader.len() {
            let mut entry = reader.by_index(index)?;
            let meta = entry.meta().clone();

            let selected =
                self.selector
                    .is_selected(&meta.name, &meta)
                    .map_err(|e| ExtractError::Selection {
                        name: meta.name.clone(),
                        source: e,
                    })?;
            if !selected {
                report.entries_filtered += 1;
                continue;
            }

            if let Some(prefix) = prefix
                && !meta.name.starts_with(prefix)
            {
                report.entries_filtered += 1;
                continue;
            }

            let safe = SafePath::resolve(&meta.path, &dest)?;
            let dest_path = dest.join(&safe);

            match materializer.materialize(&dest_path, &meta, &mut entry) {
                Ok(Outcome::File { bytes }) => {
                    report.files_extracted += 1;
                    report.bytes_written += bytes;
                }
                Ok(Outcome::Directory) => report.directories_created += 1,
                Ok(Outcome::SkippedFresh) => report.files_skipped += 1,
                Ok(Outcome::Unwritable) => {
                    report.files_skipped += 1;
                    report.add_warning(format!(
                        "unable to expand to file {}",
                        dest_path.display()
                    ));
                }
                Err(MaterializeError::Source(e)) => {
                    return Err(ExtractError::Read {
                        path: archive.to_path_buf(),
                        source: zip::result::ZipError::Io(e),
                    });
                }
                Err(MaterializeError::Dest(e)) => return Err(ExtractError::Io(e)),
            }
            // The entry (and with it the content stream) drops here, read
            // or not, before the next entry is opened.
        }

        report.duration = start.elapsed();
        log::debug!("expand complete");
        Ok(report)
        // Dropping the reader releases the archive handle; close is
        // best-effort and cannot fail the completed run.
    }
}
