use tracing::debug;

use crate::path::dirname;

/// Archive files sit next to the executable with this extension.
const ARCHIVE_EXT: &str = "pkg";

/// Length of the conventional executable suffix on Windows (`exe`).
const EXE_SUFFIX_LEN: usize = 3;

/// Directory containing the executable. The installation layout is
/// resolved relative to this directory, not to a user's home.
pub fn home_path(executable_path: &str) -> String {
    let homepath = dirname(executable_path);
    debug!("homepath is {}", homepath);
    homepath
}

/// Path of the data archive co-located with the executable, such as
/// `path/myapp.pkg` for `path/myapp.exe`. Where executables carry a fixed
/// suffix the archive extension overwrites it; elsewhere the extension is
/// appended. The two behaviors are independently specified, not one
/// rewrite rule.
#[cfg(windows)]
pub fn archive_path(executable_path: &str) -> String {
    replace_suffix(executable_path)
}

/// Path of the data archive co-located with the executable, such as
/// `path/myapp.pkg` for `path/myapp`. See the Windows variant for the
/// suffix asymmetry.
#[cfg(not(windows))]
pub fn archive_path(executable_path: &str) -> String {
    append_suffix(executable_path)
}

#[cfg_attr(not(windows), allow(dead_code))]
pub(super) fn replace_suffix(executable_path: &str) -> String {
    let mut archivefile = executable_path.to_owned();
    archivefile.truncate(archivefile.len().saturating_sub(EXE_SUFFIX_LEN));
    archivefile.push_str(ARCHIVE_EXT);
    archivefile
}

#[cfg_attr(windows, allow(dead_code))]
pub(super) fn append_suffix(executable_path: &str) -> String {
    format!("{}.{}", executable_path, ARCHIVE_EXT)
}
