use super::*;

#[test]
fn test_dirname_strips_last_component() {
    assert_eq!(dirname("/opt/app/myapp"), "/opt/app");
    assert_eq!(dirname("a/b/c"), "a/b");
}

#[test]
fn test_dirname_ignores_trailing_separator() {
    assert_eq!(dirname("/opt/app/myapp/"), "/opt/app");
    assert_eq!(dirname("a/b/"), "a");
}

#[test]
fn test_dirname_without_separator_is_curdir() {
    assert_eq!(dirname("app"), ".");
    assert_eq!(dirname(""), ".");
    assert_eq!(dirname("app/"), ".");
}

#[test]
fn test_dirname_of_root_children_is_root() {
    assert_eq!(dirname("/myapp"), "/");
    assert_eq!(dirname("/"), "/");
}

#[test]
fn test_dirname_collapses_separator_runs() {
    assert_eq!(dirname("a//b"), "a");
    assert_eq!(dirname("a//b//"), "a");
    assert_eq!(dirname("//myapp"), "/");
}

#[test]
fn test_basename_returns_last_component() {
    assert_eq!(basename("a/b/c"), "c");
    assert_eq!(basename("/opt/app/myapp"), "myapp");
}

#[test]
fn test_basename_ignores_trailing_separator() {
    assert_eq!(basename("a/b/c/"), "c");
    assert_eq!(basename("a/b//"), "b");
}

#[test]
fn test_basename_without_separator_is_whole_string() {
    assert_eq!(basename("myapp"), "myapp");
}
