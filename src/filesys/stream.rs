//! Byte stream interfaces shared by every filesystem backend

use super::error::Result;
use super::get_instance;
use super::uri::Uri;

/// A byte-oriented stream
pub trait Stream: Send {
    /// Read up to `buf.len()` bytes. A count smaller than requested means
    /// end of data was reached; callers handle partial reads.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Write the entire buffer or fail. A short write is an error.
    fn write(&mut self, buf: &[u8]) -> Result<()>;
}

/// A stream supporting absolute positioning
pub trait SeekStream: Stream {
    /// Seek to `pos` bytes from the start of the stream
    fn seek(&mut self, pos: u64) -> Result<()>;

    /// Current byte offset
    fn tell(&mut self) -> Result<u64>;

    /// True once a prior read has observed end of data
    fn at_end(&self) -> bool;
}

/// Open a stream on whichever backend serves `uri`
pub fn create(uri: &str, mode: &str, allow_null: bool) -> Result<Option<Box<dyn SeekStream>>> {
    let uri = Uri::parse(uri);
    let fs = get_instance(&uri)?;
    fs.open(&uri, mode, allow_null)
}

/// Open a stream for reading on whichever backend serves `uri`
pub fn create_for_read(uri: &str, allow_null: bool) -> Result<Option<Box<dyn SeekStream>>> {
    let uri = Uri::parse(uri);
    let fs = get_instance(&uri)?;
    fs.open_for_read(&uri, allow_null)
}
