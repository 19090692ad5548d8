use super::*;
use crate::error::PathError;

#[test]
fn test_absolute_path_has_no_relative_prefix() {
    let resolved = to_absolute(".").unwrap();
    assert!(resolved.starts_with('/'));
    assert!(!resolved.starts_with("./"));
}

#[test]
fn test_absolute_is_idempotent_on_resolved_paths() {
    let first = to_absolute(".").unwrap();
    let second = to_absolute(&first).unwrap();
    assert_eq!(first, second);
}

// Apple filesystems reject file names that are not valid UTF-8.
#[cfg(not(target_vendor = "apple"))]
#[test]
fn test_non_utf8_result_is_an_encoding_error() {
    use std::ffi::OsStr;
    use std::fs;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::fs::symlink;

    let base = std::env::temp_dir().join("bootpath-encoding-test");
    let _ = fs::remove_dir_all(&base);
    let dir = base.join(OsStr::from_bytes(b"dir-\xff"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("target"), b"").unwrap();

    // The input is valid UTF-8; resolving the link lands in the
    // non-UTF-8 directory.
    let link = base.join("link");
    symlink(dir.join("target"), &link).unwrap();

    let err = to_absolute(link.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, PathError::Encoding));

    let _ = fs::remove_dir_all(&base);
}

#[test]
fn test_missing_target_is_a_resolution_error() {
    let err = to_absolute("/no/such/dir/bootpath-missing").unwrap_err();
    match err {
        PathError::Resolution { path, .. } => assert_eq!(path, "/no/such/dir/bootpath-missing"),
        other => panic!("expected resolution error, got {:?}", other),
    }
}
