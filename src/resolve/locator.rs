use crate::error::PathError;
use crate::path::PathBuffer;

/// Discovery of the raw, possibly relative, path of the running executable
/// through the platform's native facility. One implementation exists per
/// platform family and is selected at build time by [`native_locator`];
/// the shared make-absolute step lives in
/// [`executable_path`](crate::resolve::executable_path).
pub trait Locator {
    /// The platform's best answer for the running executable's path.
    /// `argv0` is the program-invocation string; it is only consulted on
    /// platforms without a native query.
    fn locate(&self, argv0: &str) -> Result<PathBuffer, PathError>;
}

/// The locator for the compilation target.
pub fn native_locator() -> impl Locator {
    #[cfg(windows)]
    {
        ModuleQuery
    }

    #[cfg(target_vendor = "apple")]
    {
        DyldQuery
    }

    #[cfg(all(unix, not(target_vendor = "apple")))]
    {
        InvocationArg
    }
}

/// Windows: ask the loader for the module's file path.
#[cfg(windows)]
pub struct ModuleQuery;

#[cfg(windows)]
impl Locator for ModuleQuery {
    fn locate(&self, _argv0: &str) -> Result<PathBuffer, PathError> {
        use crate::path::{basename, dirname, join};

        let wide = wide_module_path()?;
        let long = utf8(&wide)?;

        // Legacy 8.3 workaround: the short form of the directory is
        // representable in any local byte encoding, but its shortened
        // basename breaks later lookups, so the long-form basename is
        // substituted back in. Filesystems without short names keep the
        // long form unchanged.
        let path = match wide_short_path(&wide) {
            Some(short_wide) => {
                let short = utf8(&short_wide)?;
                join(&dirname(&short), basename(&long))
            }
            None => long,
        };

        Ok(PathBuffer::try_from(path)?)
    }
}

#[cfg(windows)]
fn wide_module_path() -> Result<Vec<u16>, PathError> {
    use winapi::um::libloaderapi::GetModuleFileNameW;

    use crate::path::MAX_PATH_LEN;

    let mut buf = vec![0u16; MAX_PATH_LEN];
    let len = unsafe {
        GetModuleFileNameW(std::ptr::null_mut(), buf.as_mut_ptr(), buf.len() as u32)
    } as usize;

    if len == 0 {
        return Err(PathError::PlatformQuery(format!(
            "GetModuleFileNameW failed: {}",
            std::io::Error::last_os_error()
        )));
    }
    if len >= buf.len() {
        return Err(PathError::PlatformQuery(
            "module path exceeds the maximum path length".to_string(),
        ));
    }

    buf.truncate(len);
    Ok(buf)
}

#[cfg(windows)]
fn wide_short_path(wide: &[u16]) -> Option<Vec<u16>> {
    use winapi::um::fileapi::GetShortPathNameW;

    use crate::path::MAX_PATH_LEN;

    let mut input = wide.to_vec();
    input.push(0);

    let mut buf = vec![0u16; MAX_PATH_LEN];
    let len =
        unsafe { GetShortPathNameW(input.as_ptr(), buf.as_mut_ptr(), buf.len() as u32) } as usize;

    if len == 0 || len >= buf.len() {
        return None;
    }

    buf.truncate(len);
    Some(buf)
}

#[cfg(windows)]
fn utf8(wide: &[u16]) -> Result<String, PathError> {
    String::from_utf16(wide).map_err(|_| PathError::Encoding)
}

/// Apple: ask dyld for the executable path.
#[cfg(target_vendor = "apple")]
pub struct DyldQuery;

#[cfg(target_vendor = "apple")]
impl Locator for DyldQuery {
    fn locate(&self, _argv0: &str) -> Result<PathBuffer, PathError> {
        use crate::path::MAX_PATH_LEN;

        let mut buf = vec![0u8; MAX_PATH_LEN];
        let mut size = buf.len() as u32;
        let rc = unsafe {
            // SAFETY: buf outlives the call and size matches its length.
            libc::_NSGetExecutablePath(buf.as_mut_ptr() as *mut libc::c_char, &mut size)
        };
        if rc != 0 {
            return Err(PathError::PlatformQuery(format!(
                "_NSGetExecutablePath needs a buffer of {} bytes",
                size
            )));
        }

        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        let path = std::str::from_utf8(&buf[..end]).map_err(|_| PathError::Encoding)?;
        Ok(PathBuffer::try_from(path)?)
    }
}

/// Other POSIX: no native query exists, so the program-invocation string
/// is taken as the starting point and made absolute afterwards.
#[cfg(all(unix, not(target_vendor = "apple")))]
pub struct InvocationArg;

#[cfg(all(unix, not(target_vendor = "apple")))]
impl Locator for InvocationArg {
    fn locate(&self, argv0: &str) -> Result<PathBuffer, PathError> {
        Ok(PathBuffer::try_from(argv0)?)
    }
}
