//! Windows directory operations

use std::ffi::{OsStr, OsString};
use std::io;
use std::os::windows::ffi::{OsStrExt, OsStringExt};
use std::path::Path;

use winapi::shared::winerror::ERROR_NO_MORE_FILES;
use winapi::um::fileapi::{CreateDirectoryW, FindClose, FindFirstFileW, FindNextFileW};
use winapi::um::handleapi::INVALID_HANDLE_VALUE;
use winapi::um::minwinbase::WIN32_FIND_DATAW;

use super::DirectoryBackend;

/// `FindFirstFileW`/`FindNextFileW` enumeration and `CreateDirectoryW`
#[derive(Debug, Clone, Copy, Default)]
pub struct FindFileBackend;

fn to_wide(path: &Path) -> Vec<u16> {
    OsStr::new(path)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

fn entry_name(data: &WIN32_FIND_DATAW) -> OsString {
    let len = data
        .cFileName
        .iter()
        .position(|&c| c == 0)
        .unwrap_or(data.cFileName.len());
    OsString::from_wide(&data.cFileName[..len])
}

impl DirectoryBackend for FindFileBackend {
    fn entry_names(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let pattern = to_wide(&dir.join("*"));
        // SAFETY: WIN32_FIND_DATAW is plain data; all-zero is a valid value
        let mut data: WIN32_FIND_DATAW = unsafe { std::mem::zeroed() };

        let handle = unsafe { FindFirstFileW(pattern.as_ptr(), &mut data) };
        if handle == INVALID_HANDLE_VALUE {
            return Err(io::Error::last_os_error());
        }

        let mut names = Vec::new();
        let status = loop {
            let name = entry_name(&data);
            if name != "." && name != ".." {
                names.push(name);
            }
            if unsafe { FindNextFileW(handle, &mut data) } == 0 {
                break io::Error::last_os_error();
            }
        };

        unsafe {
            FindClose(handle);
        }

        if status.raw_os_error() != Some(ERROR_NO_MORE_FILES as i32) {
            return Err(status);
        }
        Ok(names)
    }

    fn make_dir(&self, path: &Path, _mode: u32) -> io::Result<()> {
        let wide_path = to_wide(path);
        unsafe {
            if CreateDirectoryW(wide_path.as_ptr(), std::ptr::null_mut()) == 0 {
                return Err(io::Error::last_os_error());
            }
        }
        Ok(())
    }
}
