use super::derived;
use super::*;
use crate::path::dirname;

#[test]
fn test_home_path_is_dirname_of_executable() {
    assert_eq!(home_path("/opt/app/myapp"), "/opt/app");
    assert_eq!(home_path("/opt/app/myapp"), dirname("/opt/app/myapp"));
}

#[test]
fn test_archive_path_appends_extension() {
    assert_eq!(archive_path("/opt/app/myapp"), "/opt/app/myapp.pkg");
}

#[test]
fn test_suffix_replacement_overwrites_executable_suffix() {
    assert_eq!(
        derived::replace_suffix("/opt/app/myapp.exe"),
        "/opt/app/myapp.pkg"
    );
}

#[test]
fn test_suffix_append_keeps_basename() {
    assert_eq!(derived::append_suffix("/opt/app/myapp"), "/opt/app/myapp.pkg");
}
