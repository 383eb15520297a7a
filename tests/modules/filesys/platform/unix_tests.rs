//! Unix-specific filesystem tests

use crate::modules::filesys::{assert_file_exists, assert_file_not_exists, TestEnvironment};
use localfs::{FileSystem, FsError, Uri};

fn fd_is_open(fd: libc::c_int) -> bool {
    // SAFETY: F_GETFD only queries descriptor flags
    unsafe { libc::fcntl(fd, libc::F_GETFD) != -1 }
}

#[test]
fn test_stdout_survives_stream_close() {
    let env = TestEnvironment::new();

    let mut out = env.fs().open(&Uri::local("stdout"), "w", false).unwrap().unwrap();
    out.write(b"localfs stdout alias\n").unwrap();
    drop(out);

    assert!(fd_is_open(libc::STDOUT_FILENO));
    {
        use std::io::Write;
        let mut stdout = std::io::stdout();
        stdout.write_all(b"stdout still writable\n").unwrap();
        stdout.flush().unwrap();
    }
}

#[test]
fn test_stdin_survives_stream_close() {
    let env = TestEnvironment::new();

    let first = env.fs().open(&Uri::local("stdin"), "r", false).unwrap();
    drop(first);
    let second = env.fs().open(&Uri::local("stdin"), "r", false).unwrap();
    drop(second);

    assert!(fd_is_open(libc::STDIN_FILENO));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_rejected_by_device_is_error() {
    let env = TestEnvironment::new();

    let mut out = env.fs().open(&Uri::local("/dev/full"), "w", false).unwrap().unwrap();
    let result = out.write(&[0u8; 8192]);
    assert!(
        matches!(result, Err(FsError::Io(_)) | Err(FsError::IncompleteWrite { .. })),
        "a write the device refuses must surface as an error"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_larger_than_single_syscall_completes() {
    // Linux moves at most 0x7ffff000 bytes per write(2)
    const LEN: usize = 0x7fff_f000 + 64 * 1024;
    let env = TestEnvironment::new();

    let mut out = env.fs().open(&Uri::local("/dev/null"), "w", false).unwrap().unwrap();
    let payload = vec![0u8; LEN];
    out.write(&payload).unwrap();
}

#[test]
fn test_delete_does_not_follow_symlinks() {
    let env = TestEnvironment::new();
    let outside = env.create_test_file("outside/precious.txt", b"keep");
    env.create_test_directory("tree");
    std::os::unix::fs::symlink(env.temp_path("outside"), env.temp_path("tree/link")).unwrap();

    env.fs().delete_directory(&env.uri("tree")).unwrap();

    assert_file_not_exists(env.temp_path("tree"));
    assert_file_exists(&outside);
}

#[test]
fn test_delete_symlink_root_removes_link_only() {
    let env = TestEnvironment::new();
    let target = env.create_test_file("real/data.txt", b"data");
    std::os::unix::fs::symlink(env.temp_path("real"), env.temp_path("alias")).unwrap();

    env.fs().delete_directory(&env.uri("alias")).unwrap();

    assert!(std::fs::symlink_metadata(env.temp_path("alias")).is_err());
    assert_file_exists(&target);
}

#[test]
fn test_created_directory_respects_configured_mode() {
    use localfs::LocalFsConfig;
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnvironment::with_config(LocalFsConfig {
        dir_mode: 0o700,
        ..Default::default()
    });
    env.fs().create_directory(&env.uri("private")).unwrap();

    let mode = std::fs::metadata(env.temp_path("private"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o077, 0);
}
