//! Per-archive extraction surface.

use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::config::ExtractOptions;
use crate::extraction::ExtractionEngine;
use crate::report::ExtractionReport;
use crate::select::EntrySelector;

/// A ZIP archive bound to extraction settings.
///
/// Configure once, then extract into one or more destinations.
///
/// # Examples
///
/// ```no_run
/// use unarc_zip::ExtractOptions;
/// use unarc_zip::Unzipper;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = Unzipper::new("dist.zip")
///     .options(ExtractOptions::default().with_overwrite(false))
///     .extract("/tmp/out")?;
/// # Ok(())
/// # }
/// ```
pub struct Unzipper {
    archive: PathBuf,
    options: ExtractOptions,
    selector: Option<Box<dyn EntrySelector>>,
}

impl Unzipper {
    /// Creates an unzipper for the given archive path.
    #[must_use]
    pub fn new<P: AsRef<Path>>(archive: P) -> Self {
        Self {
            archive: archive.as_ref().to_path_buf(),
            options: ExtractOptions::default(),
            selector: None,
        }
    }

    /// Path of the archive this unzipper reads.
    #[must_use]
    pub fn archive_path(&self) -> &Path {
        &self.archive
    }

    /// Sets the extraction options.
    #[must_use]
    pub fn options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets an entry selector applied before materialization.
    #[must_use]
    pub fn selector(mut self, selector: Box<dyn EntrySelector>) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Extracts the whole archive into `dest`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`crate::extract_zip`].
    pub fn extract<P: AsRef<Path>>(self, dest: P) -> Result<ExtractionReport> {
        let (engine, archive) = self.into_engine();
        engine.extract(&archive, dest.as_ref())
    }

    /// Extracts only entries whose name starts with `prefix` into `dest`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`crate::extract_zip`].
    pub fn extract_subtree<P: AsRef<Path>>(self, dest: P, prefix: &str) -> Result<ExtractionReport> {
        let (engine, archive) = self.into_engine();
        engine.extract_subtree(&archive, dest.as_ref(), prefix)
    }

    fn into_engine(self) -> (ExtractionEngine, PathBuf) {
        let engine = match self.selector {
            Some(selector) => ExtractionEngine::with_selector(self.options, selector),
            None => ExtractionEngine::new(self.options),
        };
        (engine, self.archive)
    }
}
