//! Permission restoration for extracted files.
//!
//! ZIP entries may carry POSIX mode bits in their external attributes. This
//! module applies them to extracted files through one of two mechanisms,
//! selected by configuration.

use std::io;
use std::path::Path;

/// Permission bits relevant to `chmod` (type bits stripped).
const MODE_MASK: u32 = 0o7777;

/// Mechanism used to apply a permission mode to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChmodStrategy {
    /// Apply permissions through the standard library.
    #[default]
    Portable,
    /// Apply permissions with a direct `chmod(2)` call.
    Native,
}

/// Applies `mode` to `path` using the selected strategy.
///
/// The mode is masked to its permission bits; ZIP external attributes carry
/// the full `st_mode` including file-type bits. On non-Unix platforms this
/// is a no-op.
///
/// # Errors
///
/// Returns the underlying I/O error when the permission change fails.
#[cfg(unix)]
pub fn chmod(path: &Path, mode: u32, strategy: ChmodStrategy) -> io::Result<()> {
    let mode = mode & MODE_MASK;
    match strategy {
        ChmodStrategy::Portable => {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        }
        ChmodStrategy::Native => {
            use std::ffi::CString;
            use std::os::unix::ffi::OsStrExt;

            let path_cstring = CString::new(path.as_os_str().as_bytes()).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidInput, "path contains null byte")
            })?;

            // SAFETY: chmod() is safe to call with a valid C string. The
            // pointer is valid for the duration of the call and the string
            // is not modified.
            #[allow(unsafe_code)]
            let result = unsafe { libc::chmod(path_cstring.as_ptr(), mode as libc::mode_t) };

            if result == 0 {
                Ok(())
            } else {
                Err(io::Error::last_os_error())
            }
        }
    }
}

/// Applies `mode` to `path` using the selected strategy (no-op off Unix).
#[cfg(not(unix))]
pub fn chmod(_path: &Path, _mode: u32, _strategy: ChmodStrategy) -> io::Result<()> {
    Ok(())
}
