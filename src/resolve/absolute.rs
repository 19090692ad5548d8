use std::io;
use std::path::{Path, PathBuf};

use crate::error::PathError;

/// Resolve a possibly-relative path against the current working directory.
///
/// Wraps the platform's native facility, which requires the target to
/// exist: a missing or inaccessible path is a [`PathError::Resolution`].
///
/// Known platform inconsistency: on POSIX the facility is `realpath(3)`,
/// so the result is also free of symlinks; on Windows the expansion keeps
/// symlinks intact. Callers must not rely on either behavior.
pub fn to_absolute(path: &str) -> Result<String, PathError> {
    let resolved = native_absolute(Path::new(path)).map_err(|source| PathError::Resolution {
        path: path.to_owned(),
        source,
    })?;

    resolved
        .into_os_string()
        .into_string()
        .map_err(|_| PathError::Encoding)
}

#[cfg(not(windows))]
fn native_absolute(path: &Path) -> io::Result<PathBuf> {
    std::fs::canonicalize(path)
}

#[cfg(windows)]
fn native_absolute(path: &Path) -> io::Result<PathBuf> {
    // std::path::absolute never touches the filesystem, so probe the
    // target explicitly to match the existence requirement of realpath.
    let resolved = std::path::absolute(path)?;
    std::fs::metadata(&resolved)?;
    Ok(resolved)
}
