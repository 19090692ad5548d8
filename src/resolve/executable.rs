use tracing::debug;

use crate::error::PathError;
use crate::resolve::{Locator, native_locator, to_absolute};

/// Resolve the absolute path of the running executable.
///
/// `argv0` is the program-invocation string, consulted only on platforms
/// without a native executable query. The result is always made absolute:
/// a path like `./app` would poison every search path derived from it the
/// moment the working directory changes.
///
/// A failure here is terminal; the bootstrap cannot continue without
/// knowing its own location.
pub fn executable_path(argv0: &str) -> Result<String, PathError> {
    let raw = native_locator().locate(argv0)?;

    let execfile = to_absolute(raw.as_str())
        .map_err(|err| PathError::ExecutableResolution(Box::new(err)))?;

    debug!("executable is {}", execfile);
    Ok(execfile)
}
