//! Integration tests for directory listing

use crate::modules::filesys::{assert_file_info, listing_by_name, TestEnvironment};
use localfs::{FileSystem, FileType, FsError, Uri};

#[test]
fn test_list_exact_entries() {
    let env = TestEnvironment::new();
    env.create_test_file("dir/a", b"aaaa");
    env.create_test_file("dir/b", b"bb");

    let entries = env.fs().list_directory(&env.uri("dir")).unwrap();
    assert_eq!(entries.len(), 2);

    let by_name = listing_by_name(&entries);
    let names: Vec<&str> = by_name.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_file_info(&by_name["a"], FileType::File, 4);
    assert_file_info(&by_name["b"], FileType::File, 2);
}

#[test]
fn test_list_never_contains_dot_entries() {
    let env = TestEnvironment::new();
    env.create_test_file("dir/.hidden", b"h");
    env.create_test_directory("dir/child");

    let entries = env.fs().list_directory(&env.uri("dir")).unwrap();
    let by_name = listing_by_name(&entries);
    assert!(!by_name.contains_key("."));
    assert!(!by_name.contains_key(".."));
    assert!(by_name.contains_key(".hidden"));
    assert_eq!(by_name["child"].file_type, FileType::Directory);
}

#[test]
fn test_list_empty_directory() {
    let env = TestEnvironment::new();
    env.create_test_directory("empty");

    let entries = env.fs().list_directory(&env.uri("empty")).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_entry_paths_have_single_separator() {
    let env = TestEnvironment::new();
    env.create_test_file("dir/a", b"a");

    let plain = env.uri("dir");
    let trailing = Uri::local(format!("{}/", plain.name));

    for parent in [&plain, &trailing] {
        let entries = env.fs().list_directory(parent).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path.name, format!("{}/a", plain.name));
    }
}

#[test]
fn test_list_missing_directory_fails() {
    let env = TestEnvironment::new();
    let result = env.fs().list_directory(&env.uri("missing"));
    assert!(matches!(result, Err(FsError::ListDirectory { .. })));
}

#[test]
fn test_list_file_fails() {
    let env = TestEnvironment::new();
    env.create_test_file("plain.txt", b"x");

    let result = env.fs().list_directory(&env.uri("plain.txt"));
    assert!(matches!(result, Err(FsError::ListDirectory { .. })));
}

#[test]
fn test_recursive_listing_excludes_root() {
    let env = TestEnvironment::new();
    env.create_test_file("a/b/c.txt", b"c");

    let entries = env.fs().list_directory_recursive(&env.root_uri()).unwrap();
    let by_name = listing_by_name(&entries);
    assert_eq!(entries.len(), 3);
    assert_eq!(by_name["a"].file_type, FileType::Directory);
    assert_eq!(by_name["b"].file_type, FileType::Directory);
    assert_file_info(&by_name["c.txt"], FileType::File, 1);
}

#[cfg(target_os = "linux")]
#[test]
fn test_list_non_utf8_name_reports_real_metadata() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let env = TestEnvironment::new();
    env.create_test_directory("dir");
    let raw = OsStr::from_bytes(b"bad\xffname");
    std::fs::write(env.temp_path("dir").join(raw), b"12345").unwrap();

    let entries = env.fs().list_directory(&env.uri("dir")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path.name, format!("{}/bad\u{fffd}name", env.uri("dir").name));
    assert_file_info(&entries[0], FileType::File, 5);
}

#[cfg(unix)]
#[test]
fn test_recursive_listing_lists_but_skips_symlinked_dirs() {
    let env = TestEnvironment::new();
    env.create_test_file("a/inner.txt", b"in");
    std::os::unix::fs::symlink(env.temp_path("a"), env.temp_path("a/loop")).unwrap();

    let entries = env.fs().list_directory_recursive(&env.root_uri()).unwrap();
    let by_name = listing_by_name(&entries);
    assert_eq!(entries.len(), 3);
    assert_eq!(by_name["loop"].file_type, FileType::Directory);
    assert_file_info(&by_name["inner.txt"], FileType::File, 2);
}
