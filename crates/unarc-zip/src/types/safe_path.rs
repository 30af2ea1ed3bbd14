//! Resolved, traversal-checked entry path.

use crate::ExtractError;
use crate::Result;
use std::borrow::Cow;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use super::DestDir;

/// An entry path resolved against the destination root.
///
/// Entry names come from untrusted archive input, so a `SafePath` can only
/// be constructed through [`SafePath::resolve`], which guarantees the path:
/// - contains no null bytes
/// - is relative (absolute entry names are rejected)
/// - contains no `..` components
/// - is normalized (`.` components removed)
/// - stays within the destination root once joined, even when an existing
///   parent directory is a symlink pointing elsewhere
///
/// # Examples
///
/// ```no_run
/// use unarc_zip::types::DestDir;
/// use unarc_zip::types::SafePath;
/// use std::path::Path;
/// use std::path::PathBuf;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new(PathBuf::from("/tmp/out"))?;
/// let safe = SafePath::resolve(Path::new("lib/core.so"), &dest)?;
///
/// assert!(SafePath::resolve(Path::new("../etc/passwd"), &dest).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Resolves an entry path against the destination root.
    ///
    /// # Errors
    ///
    /// - [`ExtractError::InvalidEntryName`] when the name contains null bytes
    /// - [`ExtractError::PathTraversal`] for `..` components, absolute names,
    ///   or a resolved path that leaves the destination root
    pub fn resolve(path: &Path, dest: &DestDir) -> Result<Self> {
        if has_null_bytes(path) {
            return Err(ExtractError::InvalidEntryName {
                name: path.to_string_lossy().into_owned(),
            });
        }

        if path.is_absolute() {
            return Err(ExtractError::PathTraversal {
                path: path.to_path_buf(),
            });
        }

        // Single pass: reject traversal components and strip `.` segments.
        let mut normalized = PathBuf::new();
        let mut needs_normalization = false;

        for component in path.components() {
            match component {
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(ExtractError::PathTraversal {
                        path: path.to_path_buf(),
                    });
                }
                Component::Normal(_) => normalized.push(component),
                Component::CurDir => needs_normalization = true,
            }
        }

        let final_path = if needs_normalization {
            Cow::Owned(normalized)
        } else {
            Cow::Borrowed(path)
        };

        let resolved = dest.as_path().join(final_path.as_ref());

        // An already-extracted parent may be a symlink leading outside the
        // root; canonicalize it before trusting the joined path.
        if let Some(parent) = resolved.parent() {
            match parent.canonicalize() {
                Ok(canonical_parent) => {
                    if !canonical_parent.starts_with(dest.as_path()) {
                        return Err(ExtractError::PathTraversal {
                            path: path.to_path_buf(),
                        });
                    }
                }
                // Parent not materialized yet; the prefix check below covers it.
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(ExtractError::Io(std::io::Error::new(
                        e.kind(),
                        format!("failed to canonicalize parent: {e}"),
                    )));
                }
            }
        }

        if !resolved.starts_with(dest.as_path()) {
            return Err(ExtractError::PathTraversal {
                path: path.to_path_buf(),
            });
        }

        Ok(Self(final_path.into_owned()))
    }

    /// Returns the resolved path relative to the destination root.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

/// Checks if a path contains null bytes.
#[cfg(unix)]
fn has_null_bytes(path: &Path) -> bool {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().contains(&b'\0')
}

/// Checks if a path contains null bytes.
#[cfg(not(unix))]
fn has_null_bytes(path: &Path) -> bool {
    path.to_str().is_none_or(|s| s.contains('\0'))
}
