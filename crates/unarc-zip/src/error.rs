//! Error types for ZIP extraction operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::select::FilterError;

/// Result type alias using `ExtractError`.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur during ZIP extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The archive could not be opened or is not a readable ZIP container.
    #[error("failed to open archive {path}: {source}")]
    Open {
        /// Path of the archive that failed to open.
        path: PathBuf,
        /// Underlying container error.
        #[source]
        source: zip::result::ZipError,
    },

    /// I/O failure while iterating or reading archive entries.
    #[error("error while expanding {path}: {source}")]
    Read {
        /// Path of the archive being expanded.
        path: PathBuf,
        /// Underlying read error.
        #[source]
        source: zip::result::ZipError,
    },

    /// The selector collaborator failed while deciding inclusion.
    #[error("error verifying '{name}' for inclusion: {source}")]
    Selection {
        /// Name of the entry that was being verified.
        name: String,
        /// Filter failure reported by the selector.
        #[source]
        source: FilterError,
    },

    /// An entry name resolved outside the destination root.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The entry path that attempted traversal.
        path: PathBuf,
    },

    /// An entry name that cannot name a filesystem object.
    #[error("invalid entry name: {name}")]
    InvalidEntryName {
        /// The offending entry name, lossily decoded for display.
        name: String,
    },

    /// Unrecoverable I/O failure writing to the destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Returns the entry name this error is associated with, if any.
    #[must_use]
    pub fn entry_name(&self) -> Option<&str> {
        match self {
            Self::Selection { name, .. } | Self::InvalidEntryName { name } => Some(name),
            _ => None,
        }
    }

    /// Returns the archive path this error is associated with, if any.
    #[must_use]
    pub fn archive_path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => Some(path),
            _ => None,
        }
    }
}
