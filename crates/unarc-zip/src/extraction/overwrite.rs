//! Overwrite policy: whether an existing destination file is replaced.

use filetime::FileTime;
use std::fs;
use std::path::Path;

/// Decides whether extraction should write to `dest`.
///
/// With `overwrite` set, the answer is always yes. Otherwise a destination
/// whose on-disk modification time is at least as recent as the entry's is
/// left untouched, which makes repeated extraction idempotent and cheap for
/// unchanged trees. An entry with no recorded modification time never
/// replaces an existing destination.
///
/// A missing or unreadable destination is always written.
#[must_use]
pub fn should_write(dest: &Path, entry_mtime: Option<FileTime>, overwrite: bool) -> bool {
    if overwrite {
        return true;
    }

    let Ok(metadata) = fs::metadata(dest) else {
        return true;
    };

    let disk_mtime = FileTime::from_last_modification_time(&metadata);
    entry_mtime.is_some_and(|entry| disk_mtime < entry)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ENTRY_TIME: i64 = 1_000_000_000;

    fn existing_file(temp: &TempDir, disk_mtime: i64) -> std::path::PathBuf {
        let path = temp.path().join("existing.txt");
        fs::write(&path, "on disk").unwrap();
        filetime::set_file_mtime(&path, FileTime::from_unix_time(disk_mtime, 0)).unwrap();
        path
    }

    #[test]
    fn test_overwrite_flag_always_writes() {
        let temp = TempDir::new().unwrap();
        let path = existing_file(&temp, ENTRY_TIME + 100);
        assert!(should_write(
            &path,
            Some(FileTime::from_unix_time(ENTRY_TIME, 0)),
            true
        ));
    }

    #[test]
    fn test_missing_destination_writes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.txt");
        assert!(should_write(
            &path,
            Some(FileTime::from_unix_time(ENTRY_TIME, 0)),
            false
        ));
    }

    #[test]
    fn test_fresher_destination_skipped() {
        let temp = TempDir::new().unwrap();
        let path = existing_file(&temp, ENTRY_TIME + 100);
        assert!(!should_write(
            &path,
            Some(FileTime::from_unix_time(ENTRY_TIME, 0)),
            false
        ));
    }

    #[test]
    fn test_equal_timestamps_skipped() {
        let temp = TempDir::new().unwrap();
        let path = existing_file(&temp, ENTRY_TIME);
        assert!(!should_write(
            &path,
            Some(FileTime::from_unix_time(ENTRY_TIME, 0)),
            false
        ));
    }

    #[test]
    fn test_stale_destination_written() {
        let temp = TempDir::new().unwrap();
        let path = existing_file(&temp, ENTRY_TIME - 100);
        assert!(should_write(
            &path,
            Some(FileTime::from_unix_time(ENTRY_TIME, 0)),
            false
        ));
    }

    #[test]
    fn test_unknown_entry_time_never_replaces() {
        let temp = TempDir::new().unwrap();
        let path = existing_file(&temp, ENTRY_TIME);
        assert!(!should_write(&path, None, false));

        let missing = temp.path().join("missing.txt");
        assert!(should_write(&missing, None, false));
    }
}
