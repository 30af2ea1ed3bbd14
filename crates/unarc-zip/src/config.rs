//! Extraction request configuration.

use crate::permissions::ChmodStrategy;

/// How entry names and comments stored in the archive are interpreted.
///
/// ZIP entry names are byte strings; this setting decides how they become
/// filesystem paths. The default interprets names as UTF-8. The
/// [`NameEncoding::NATIVE_LABEL`] sentinel selects the host's own byte
/// interpretation instead of a fixed encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameEncoding {
    /// Interpret entry names as UTF-8 (invalid sequences are replaced).
    #[default]
    Utf8,
    /// Pass entry-name bytes through to the host platform unchanged.
    ///
    /// On Unix the raw bytes become the path verbatim; elsewhere this falls
    /// back to the archive reader's own decoding.
    Native,
}

impl NameEncoding {
    /// Configuration label selecting [`NameEncoding::Native`].
    pub const NATIVE_LABEL: &'static str = "native-encoding";

    /// Parses an encoding label from an external settings source.
    ///
    /// `"native-encoding"` selects [`NameEncoding::Native`]; every other
    /// label (including `"UTF8"` and `"UTF-8"`) selects [`NameEncoding::Utf8`],
    /// the only fixed encoding this engine supports.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == Self::NATIVE_LABEL {
            Self::Native
        } else {
            Self::Utf8
        }
    }
}

/// Options governing a single extraction run.
///
/// Constructed once per call and read-only during extraction.
///
/// # Examples
///
/// ```
/// use unarc_zip::config::ExtractOptions;
/// use unarc_zip::permissions::ChmodStrategy;
///
/// let options = ExtractOptions::default()
///     .with_overwrite(false)
///     .with_ignore_permissions(true)
///     .with_chmod_strategy(ChmodStrategy::Native);
/// assert!(!options.overwrite);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Replace existing destination files regardless of freshness.
    ///
    /// When `false`, a destination file whose modification time is at least
    /// as recent as the entry's is left untouched, making repeated
    /// extraction idempotent.
    pub overwrite: bool,

    /// Skip permission restoration entirely.
    pub ignore_permissions: bool,

    /// Mechanism used to apply entry permission modes.
    pub chmod_strategy: ChmodStrategy,

    /// Interpretation of entry names stored in the archive.
    pub encoding: NameEncoding,
}

impl Default for ExtractOptions {
    /// Overwrite on, permissions restored via the portable mechanism,
    /// entry names interpreted as UTF-8.
    fn default() -> Self {
        Self {
            overwrite: true,
            ignore_permissions: false,
            chmod_strategy: ChmodStrategy::Portable,
            encoding: NameEncoding::Utf8,
        }
    }
}

impl ExtractOptions {
    /// Sets the overwrite flag.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether permission restoration is skipped.
    #[must_use]
    pub fn with_ignore_permissions(mut self, ignore: bool) -> Self {
        self.ignore_permissions = ignore;
        self
    }

    /// Sets the permission application mechanism.
    #[must_use]
    pub fn with_chmod_strategy(mut self, strategy: ChmodStrategy) -> Self {
        self.chmod_strategy = strategy;
        self
    }

    /// Sets the entry-name encoding.
    #[must_use]
    pub fn with_encoding(mut self, encoding: NameEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}
