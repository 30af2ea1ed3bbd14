//! Content copy loop with a reusable stack buffer.
//!
//! The copy loop reports which side of the transfer failed so callers can
//! distinguish an archive read error (fatal for the whole run) from a
//! destination write error (handled by the materializer's failure policy).

use std::io::Read;
use std::io::Write;
use std::io::{self};

/// Buffer size for the copy loop (64KB, typical filesystem block multiple).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// A copy failure attributed to one side of the transfer.
#[derive(Debug)]
pub(crate) enum CopyError {
    /// Reading the entry's content stream failed.
    Read(io::Error),
    /// Writing to the destination failed.
    Write(io::Error),
}

/// Stack-allocated buffer reused across copy operations in one run.
#[derive(Debug)]
pub struct CopyBuffer {
    #[allow(clippy::large_stack_arrays)]
    buf: [u8; COPY_BUFFER_SIZE],
}

impl CopyBuffer {
    /// Creates a new zero-initialized copy buffer.
    #[inline]
    #[must_use]
    #[allow(clippy::large_stack_arrays)]
    pub fn new() -> Self {
        Self {
            buf: [0u8; COPY_BUFFER_SIZE],
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        COPY_BUFFER_SIZE
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the full content stream into the writer, returning bytes written.
///
/// Interrupted reads are retried. The byte counter uses checked arithmetic so
/// a hostile stream cannot wrap it.
pub(crate) fn copy_with_buffer<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, CopyError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(CopyError::Write)?;

        total = total.checked_add(bytes_read as u64).ok_or_else(|| {
            CopyError::Read(io::Error::new(
                io::ErrorKind::InvalidData,
                "extracted byte count overflow",
            ))
        })?;
    }

    Ok(total)
}
