//! Test utilities for building in-memory ZIP fixtures.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Fixed timestamp recorded on fixture entries unless overridden
/// (2020-01-01 00:00:00).
#[must_use]
pub fn default_mtime() -> zip::DateTime {
    zip::DateTime::from_date_and_time(2020, 1, 1, 0, 0, 0).unwrap()
}

/// Builder for ZIP test archives with files, modes, timestamps, and
/// directories.
///
/// Entries are stored uncompressed with a fixed default timestamp so tests
/// stay deterministic.
///
/// # Examples
///
/// ```
/// use unarc_zip::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_file("file.txt", b"content")
///     .add_directory("dir/")
///     .build();
/// ```
pub struct ZipTestBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn base_options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .last_modified_time(default_mtime())
    }

    /// Adds a regular file with mode 0o644 and the default timestamp.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_entry(path, data, Self::base_options().unix_permissions(0o644))
    }

    /// Adds a regular file with a custom mode.
    #[must_use]
    pub fn add_file_with_mode(self, path: &str, data: &[u8], mode: u32) -> Self {
        self.add_entry(path, data, Self::base_options().unix_permissions(mode))
    }

    /// Adds a regular file with a custom modification time.
    #[must_use]
    pub fn add_file_with_mtime(self, path: &str, data: &[u8], mtime: zip::DateTime) -> Self {
        self.add_entry(
            path,
            data,
            Self::base_options()
                .unix_permissions(0o644)
                .last_modified_time(mtime),
        )
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = Self::base_options().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    fn add_entry(mut self, path: &str, data: &[u8], options: SimpleFileOptions) -> Self {
        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Builds and returns the ZIP archive bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_produces_archive() {
        let data = ZipTestBuilder::new()
            .add_file("file.txt", b"content")
            .add_directory("dir/")
            .build();
        assert!(!data.is_empty());
    }

    #[test]
    fn test_builder_entries_readable() {
        let data = ZipTestBuilder::new()
            .add_file_with_mode("bin/run", b"#!", 0o755)
            .build();
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
        assert_eq!(archive.len(), 1);
        let entry = archive.by_index(0).unwrap();
        assert_eq!(entry.name(), "bin/run");
        assert_eq!(entry.unix_mode().map(|m| m & 0o7777), Some(0o755));
    }
}
