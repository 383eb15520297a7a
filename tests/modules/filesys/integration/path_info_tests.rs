//! Integration tests for path metadata lookup

use crate::modules::filesys::{assert_file_info, assert_non_existent, TestEnvironment};
use localfs::{FileSystem, FileType, Uri};

#[test]
fn test_missing_paths_are_non_existent() {
    let env = TestEnvironment::new();
    env.create_test_file("plain.txt", b"x");

    let missing = [
        env.uri("absent"),
        env.uri("absent/child.txt"),
        // a file cannot have children
        env.uri("plain.txt/child"),
        Uri::local(""),
    ];

    for uri in &missing {
        let info = env.fs().get_path_info(uri);
        assert_non_existent(&info);
        assert_eq!(&info.path, uri);
    }
}

#[test]
fn test_file_size_is_reported() {
    let env = TestEnvironment::new();
    env.create_test_file("sized.bin", &[7u8; 1234]);

    let info = env.fs().get_path_info(&env.uri("sized.bin"));
    assert_file_info(&info, FileType::File, 1234);
    assert!(info.is_file());
}

#[test]
fn test_empty_file_is_file_not_missing() {
    let env = TestEnvironment::new();
    env.create_test_file("empty", b"");

    let info = env.fs().get_path_info(&env.uri("empty"));
    assert_file_info(&info, FileType::File, 0);
}

#[test]
fn test_directory_is_classified() {
    let env = TestEnvironment::new();
    env.create_test_directory("dir");

    let info = env.fs().get_path_info(&env.uri("dir"));
    assert_eq!(info.file_type, FileType::Directory);
    assert!(info.is_dir());
}

#[test]
fn test_parsed_file_uri_is_resolved_by_name() {
    let env = TestEnvironment::new();
    let path = env.create_test_file("scheme.txt", b"abc");

    let uri = Uri::parse(&format!("file://{}", path.display()));
    let info = env.fs().get_path_info(&uri);
    assert_file_info(&info, FileType::File, 3);
}
