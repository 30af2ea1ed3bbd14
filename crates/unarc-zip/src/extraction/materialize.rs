//! Filesystem materialization of selected entries.
//!
//! Steps run in a fixed order, each a precondition for the next: overwrite
//! check, parent directory creation, directory creation or content copy,
//! modification-time restoration, permission restoration. Destinations that
//! cannot be opened are a recoverable per-entry condition; everything else
//! is fatal for the run.

use std::fs;
use std::fs::File;
use std::io::Read;
use std::io::{self};
use std::path::Path;

use filetime::FileTime;

use crate::config::ExtractOptions;
use crate::copy::CopyBuffer;
use crate::copy::CopyError;
use crate::copy::copy_with_buffer;
use crate::extraction::overwrite;
use crate::permissions;
use crate::reader::EntryMeta;

/// Per-entry result of a materialization attempt.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// A file entry was written.
    File {
        /// Content bytes written.
        bytes: u64,
    },
    /// A directory entry was created.
    Directory,
    /// The destination was already at least as fresh; nothing was touched.
    SkippedFresh,
    /// The destination could not be prepared or opened; the entry is
    /// skipped and the run continues.
    Unwritable,
}

/// A fatal materialization failure, attributed to the failing side.
#[derive(Debug)]
pub(crate) enum MaterializeError {
    /// Reading the entry's content stream from the archive failed.
    Source(io::Error),
    /// Unrecoverable failure writing to the destination.
    Dest(io::Error),
}

/// Performs filesystem mutation for one entry at a time.
///
/// Owns the copy buffer so repeated materializations within a run reuse one
/// allocation.
pub(crate) struct Materializer<'a> {
    options: &'a ExtractOptions,
    buffer: CopyBuffer,
}

impl<'a> Materializer<'a> {
    pub(crate) fn new(options: &'a ExtractOptions) -> Self {
        Self {
            options,
            buffer: CopyBuffer::new(),
        }
    }

    /// Materializes one entry at `dest_path`.
    ///
    /// A partial file left behind by a failed copy stays on disk; rollback
    /// is the caller's concern, not this engine's.
    pub(crate) fn materialize<R: Read>(
        &mut self,
        dest_path: &Path,
        meta: &EntryMeta,
        content: &mut R,
    ) -> Result<Outcome, MaterializeError> {
        if !overwrite::should_write(dest_path, meta.mtime, self.options.overwrite) {
            return Ok(Outcome::SkippedFresh);
        }

        // Archives do not always carry explicit directory entries, so every
        // entry gets its ancestor chain created here.
        if let Some(parent) = dest_path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            log::warn!("unable to expand to file {}: {e}", dest_path.display());
            return Ok(Outcome::Unwritable);
        }

        if meta.is_dir {
            if let Err(e) = fs::create_dir_all(dest_path) {
                log::warn!("unable to expand to file {}: {e}", dest_path.display());
                return Ok(Outcome::Unwritable);
            }
            restore_mtime(dest_path, meta.mtime);
            return Ok(Outcome::Directory);
        }

        let bytes = {
            let mut out = match File::create(dest_path) {
                Ok(out) => out,
                Err(e) => {
                    log::warn!("unable to expand to file {}: {e}", dest_path.display());
                    return Ok(Outcome::Unwritable);
                }
            };

            match copy_with_buffer(content, &mut out, &mut self.buffer) {
                Ok(bytes) => bytes,
                Err(CopyError::Read(e)) => return Err(MaterializeError::Source(e)),
                Err(CopyError::Write(e)) => return Err(MaterializeError::Dest(e)),
            }
            // `out` is released here on every path, including the error
            // returns above.
        };

        restore_mtime(dest_path, meta.mtime);

        if !self.options.ignore_permissions
            && let Some(mode) = meta.unix_mode
        {
            permissions::chmod(dest_path, mode, self.options.chmod_strategy)
                .map_err(MaterializeError::Dest)?;
        }

        Ok(Outcome::File { bytes })
    }
}

/// Best-effort modification-time restoration.
fn restore_mtime(path: &Path, mtime: Option<FileTime>) {
    if let Some(mtime) = mtime
        && let Err(e) = filetime::set_file_mtime(path, mtime)
    {
        log::debug!(
            "could not set modification time on {}: {e}",
            path.display()
        );
    }
}
