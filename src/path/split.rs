/// Native path separator.
#[cfg(windows)]
pub const SEP: char = '\\';
#[cfg(not(windows))]
pub const SEP: char = '/';

/// Marker returned by [`dirname`] for paths with no directory part.
const CURDIR: &str = ".";

#[cfg(windows)]
fn is_sep(c: char) -> bool {
    // Windows accepts both separators in file names.
    c == '\\' || c == '/'
}

#[cfg(not(windows))]
fn is_sep(c: char) -> bool {
    c == '/'
}

/// Everything before the last separator, following the POSIX `dirname`
/// contract: trailing separators are stripped before searching, runs of
/// separators count as one, a path without any separator yields `"."`,
/// and the result never ends with a separator unless it is the root
/// itself.
pub fn dirname(path: &str) -> String {
    let trimmed = path.trim_end_matches(SEP);
    if trimmed.is_empty() {
        return if path.is_empty() {
            CURDIR.to_string()
        } else {
            SEP.to_string()
        };
    }

    match trimmed.rfind(SEP) {
        Some(idx) => {
            let dir = trimmed[..idx].trim_end_matches(SEP);
            if dir.is_empty() {
                SEP.to_string()
            } else {
                dir.to_string()
            }
        }
        None => CURDIR.to_string(),
    }
}

/// Everything after the last separator, or the whole string if there is
/// none. Trailing separators are ignored.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_sep);

    match trimmed.rfind(is_sep) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
