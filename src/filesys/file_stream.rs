//! Seekable stream over a native file handle

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Stdin, Stdout, Write};

use tracing::warn;

use super::error::{FsError, Result};
use super::stream::{SeekStream, Stream};

/// Native handle wrapped by a [`FileStream`].
///
/// `Owned` handles are closed with the stream. The standard stream variants
/// are borrowed from the process and are never closed.
pub enum NativeHandle {
    Owned(File),
    Stdin(Stdin),
    Stdout(Stdout),
}

impl NativeHandle {
    pub fn owns_handle(&self) -> bool {
        matches!(self, NativeHandle::Owned(_))
    }
}

fn not_seekable() -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, "standard streams are not seekable")
}

impl Read for NativeHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            NativeHandle::Owned(file) => file.read(buf),
            NativeHandle::Stdin(stdin) => stdin.read(buf),
            NativeHandle::Stdout(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdout is write-only",
            )),
        }
    }
}

impl Write for NativeHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            NativeHandle::Owned(file) => file.write(buf),
            // stdout is line buffered by std and may report a partial count
            // for data it has merely queued, so hand it the whole buffer
            NativeHandle::Stdout(stdout) => stdout.write_all(buf).map(|()| buf.len()),
            NativeHandle::Stdin(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "stdin is read-only",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            NativeHandle::Owned(file) => file.flush(),
            NativeHandle::Stdout(stdout) => stdout.flush(),
            NativeHandle::Stdin(_) => Ok(()),
        }
    }
}

impl Seek for NativeHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            NativeHandle::Owned(file) => file.seek(pos),
            _ => Err(not_seekable()),
        }
    }
}

/// Stream over exactly one native handle.
///
/// The handle slot empties on the first [`close`](FileStream::close); later
/// closes do nothing and later I/O fails with [`FsError::StreamClosed`].
pub struct FileStream {
    handle: Option<NativeHandle>,
    eof: bool,
}

impl FileStream {
    pub fn new(handle: NativeHandle) -> Self {
        Self {
            handle: Some(handle),
            eof: false,
        }
    }

    pub fn from_file(file: File) -> Self {
        Self::new(NativeHandle::Owned(file))
    }

    pub fn stdin() -> Self {
        Self::new(NativeHandle::Stdin(io::stdin()))
    }

    pub fn stdout() -> Self {
        Self::new(NativeHandle::Stdout(io::stdout()))
    }

    /// Whether closing this stream releases the underlying handle
    pub fn owns_handle(&self) -> bool {
        self.handle.as_ref().is_some_and(NativeHandle::owns_handle)
    }

    pub fn is_closed(&self) -> bool {
        self.handle.is_none()
    }

    /// Release the handle. Borrowed standard streams are flushed and left open.
    pub fn close(&mut self) -> Result<()> {
        match self.handle.take() {
            Some(NativeHandle::Stdout(mut stdout)) => stdout.flush()?,
            Some(NativeHandle::Owned(file)) => drop(file),
            Some(NativeHandle::Stdin(_)) | None => {}
        }
        Ok(())
    }

    fn handle_mut(&mut self) -> Result<&mut NativeHandle> {
        self.handle.as_mut().ok_or(FsError::StreamClosed)
    }
}

impl Stream for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let handle = self.handle.as_mut().ok_or(FsError::StreamClosed)?;
        let mut filled = 0;
        while filled < buf.len() {
            match handle.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.eof = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(filled)
    }

    fn write(&mut self, buf: &[u8]) -> Result<()> {
        let handle = self.handle_mut()?;
        let mut written = 0;
        while written < buf.len() {
            match handle.write(&buf[written..]) {
                Ok(0) => {
                    return Err(FsError::IncompleteWrite {
                        written,
                        expected: buf.len(),
                    })
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

impl SeekStream for FileStream {
    fn seek(&mut self, pos: u64) -> Result<()> {
        self.handle_mut()?.seek(SeekFrom::Start(pos))?;
        self.eof = false;
        Ok(())
    }

    fn tell(&mut self) -> Result<u64> {
        Ok(self.handle_mut()?.stream_position()?)
    }

    fn at_end(&self) -> bool {
        self.eof
    }
}

impl Drop for FileStream {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("Failed to close file stream: {}", e);
        }
    }
}
