//! ZIP container access and the typed entry model.
//!
//! [`ZipReader`] wraps the `zip` crate's archive handle and presents each
//! entry as strongly typed metadata plus a lazily-consumed content stream.
//! No content bytes are decompressed until the stream is read, so entries
//! excluded by the selector cost no decompression work.

use std::fs::File;
use std::io::Read;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use filetime::FileTime;

use crate::ExtractError;
use crate::Result;
use crate::config::NameEncoding;

/// Metadata for one archive entry.
///
/// Immutable view sourced from the ZIP central directory. A mode of `0` in
/// the container means "no mode recorded" and is normalized to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    /// Entry name as stored in the archive, decoded for matching and display.
    pub name: String,

    /// Entry name as a relative filesystem path, decoded per the configured
    /// encoding. Not yet validated against the destination root.
    pub path: PathBuf,

    /// Whether the entry denotes a directory.
    pub is_dir: bool,

    /// Uncompressed size in bytes.
    pub size: u64,

    /// Modification time, when the container records one.
    pub mtime: Option<FileTime>,

    /// POSIX mode bits, when the container records them.
    pub unix_mode: Option<u32>,
}

impl EntryMeta {
    /// Returns `true` if the entry denotes a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        !self.is_dir
    }
}

/// Open ZIP archive yielding entries in container order.
///
/// The underlying file handle is exclusively owned for the lifetime of the
/// reader and released on drop. Closing is best-effort by contract: a close
/// failure at that point is not observable and never fails an extraction
/// that already read all its entries.
pub struct ZipReader {
    archive: zip::ZipArchive<File>,
    path: PathBuf,
    encoding: NameEncoding,
}

impl ZipReader {
    /// Opens a ZIP archive with the given entry-name encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Open`] when the file is missing or is not a
    /// readable ZIP container.
    pub fn open(path: &Path, encoding: NameEncoding) -> Result<Self> {
        let file = File::open(path).map_err(|e| ExtractError::Open {
            path: path.to_path_buf(),
            source: zip::result::ZipError::Io(e),
        })?;
        let archive = zip::ZipArchive::new(file).map_err(|e| ExtractError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            archive,
            path: path.to_path_buf(),
            encoding,
        })
    }

    /// Number of entries in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Returns `true` if the archive holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Path the archive was opened from.
    #[must_use]
    pub fn archive_path(&self) -> &Path {
        &self.path
    }

    /// Returns the entry at `index` in container order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Read`] naming the archive path when the entry
    /// record cannot be read.
    pub fn by_index(&mut self, index: usize) -> Result<ZipEntry<'_>> {
        let encoding = self.encoding;
        let file = match self.archive.by_index(index) {
            Ok(file) => file,
            Err(e) => {
                return Err(ExtractError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        let meta = entry_meta(&file, encoding);
        Ok(ZipEntry { meta, file })
    }
}

/// One archive entry: typed metadata plus its content stream.
///
/// The stream borrows the reader, so an entry lives at most until the next
/// entry is requested; dropping it releases the stream deterministically.
pub struct ZipEntry<'a> {
    meta: EntryMeta,
    file: zip::read::ZipFile<'a, File>,
}

impl ZipEntry<'_> {
    /// Read-only metadata view of this entry.
    #[must_use]
    pub fn meta(&self) -> &EntryMeta {
        &self.meta
    }
}

impl Read for ZipEntry<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

/// Builds the metadata view for a container entry.
fn entry_meta(file: &zip::read::ZipFile<'_, File>, encoding: NameEncoding) -> EntryMeta {
    let (name, path) = decode_name(file, encoding);
    EntryMeta {
        name,
        path,
        is_dir: file.is_dir(),
        size: file.size(),
        mtime: file
            .last_modified()
            .map(|dt| FileTime::from_unix_time(datetime_to_unix(&dt), 0)),
        unix_mode: file.unix_mode().filter(|mode| *mode != 0),
    }
}

/// Decodes an entry name according to the configured encoding.
#[cfg(unix)]
fn decode_name(file: &zip::read::ZipFile<'_, File>, encoding: NameEncoding) -> (String, PathBuf) {
    let raw = file.name_raw();
    let name = String::from_utf8_lossy(raw).into_owned();
    let path = match encoding {
        NameEncoding::Utf8 => PathBuf::from(&name),
        NameEncoding::Native => {
            use std::ffi::OsString;
            use std::os::unix::ffi::OsStringExt;
            PathBuf::from(OsString::from_vec(raw.to_vec()))
        }
    };
    (name, path)
}

/// Decodes an entry name according to the configured encoding.
#[cfg(not(unix))]
fn decode_name(file: &zip::read::ZipFile<'_, File>, encoding: NameEncoding) -> (String, PathBuf) {
    let name = match encoding {
        NameEncoding::Utf8 => String::from_utf8_lossy(file.name_raw()).into_owned(),
        // No byte-level path type to pass raw bytes through; use the
        // container's own decoding.
        NameEncoding::Native => file.name().to_string(),
    };
    let path = PathBuf::from(&name);
    (name, path)
}

/// Converts an MS-DOS date-time to seconds since the Unix epoch.
///
/// Exact civil-calendar arithmetic; valid across the whole DOS range
/// (1980..=2107).
fn datetime_to_unix(dt: &zip::DateTime) -> i64 {
    let year = i64::from(dt.year());
    let month = i64::from(dt.month());
    let day = i64::from(dt.day());

    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    let days = era * 146_097 + doe - 719_468;

    days * 86_400
        + i64::from(dt.hour()) * 3_600
        + i64::from(dt.minute()) * 60
        + i64::from(dt.second())
}
