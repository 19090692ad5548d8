use std::io;

use thiserror::Error;

use crate::path::MAX_PATH_LEN;

/// A path exceeded the module-wide maximum length. Reported instead of
/// truncating; a truncated path is worse than no path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("path of {len} bytes exceeds the maximum of {MAX_PATH_LEN}")]
pub struct CapacityError {
    pub len: usize,
}

/// Errors raised while resolving the executable location and derived paths.
///
/// All of these are unrecoverable by convention: there is no retry or
/// fallback once the platform's primary facility has failed, because the
/// bootstrap cannot continue without knowing its own location. Callers are
/// expected to abort startup with the rendered message.
#[derive(Error, Debug)]
pub enum PathError {
    /// The native platform query failed or returned a result that does not
    /// fit the fixed query buffer.
    #[error("platform query for the executable path failed: {0}")]
    PlatformQuery(String),

    /// Conversion to an absolute path failed. The underlying facility
    /// requires the target to exist, so this usually means the path does
    /// not name an existing, accessible file.
    #[error("cannot resolve '{path}' to an absolute path")]
    Resolution {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Terminal failure of the top-level executable resolution flow.
    #[error("unable to determine the executable's absolute location")]
    ExecutableResolution(#[source] Box<PathError>),

    /// A platform facility produced a path that is not valid UTF-8.
    #[error("platform returned a path that is not valid UTF-8")]
    Encoding,

    /// A path exceeded the maximum supported length.
    #[error(transparent)]
    Capacity(#[from] CapacityError),
}
