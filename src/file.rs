use std::cell::RefCell;

use log::debug;

use crate::{FileError, FileHandle, FileMode, Result};

/// An in-memory random-access file.
///
/// A `File` owns a single byte buffer. Handles returned by [`File::open`]
/// borrow the file and operate directly on that buffer, so every handle and
/// every direct length change observe the same bytes.
#[derive(Debug, Clone, Default)]
pub struct File {
    data: RefCell<Vec<u8>>,
}

impl File {
    /// Creates a new empty file.
    pub fn new() -> Self { Self::default() }

    /// Returns the current length of the file in bytes.
    pub fn len(&self) -> u64 { self.data.borrow().len() as u64 }

    pub fn is_empty(&self) -> bool { self.data.borrow().is_empty() }

    /// Resizes the file to exactly `len` bytes.
    ///
    /// Growing pads the file with zero bytes. Shrinking discards the tail for
    /// good: growing again afterwards yields zeros, not the old data.
    ///
    /// # Errors
    ///
    /// Returns `FileError::Range` if `len` is negative or too large to
    /// allocate. The file is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let file = memfile::File::from(vec![1, 2, 3, 4]);
    /// file.set_length(2).unwrap();
    /// file.set_length(4).unwrap();
    /// assert_eq!(file.to_vec(), [1, 2, 0, 0]);
    /// ```
    pub fn set_length(&self, len: i64) -> Result<()> {
        let len = to_usize(len, "length")?;
        self.resize(len)
    }

    /// Empties the file. Same as `set_length(0)`.
    pub fn clear(&self) {
        let mut data = self.data.borrow_mut();
        debug!("clearing file of length {}", data.len());
        data.clear();
    }

    /// Opens a handle on this file.
    ///
    /// Opening in [`FileMode::Write`] empties the file first. Append modes
    /// start at the current end of the file; all others start at 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use memfile::{File, FileMode};
    ///
    /// let file = File::new();
    /// file.set_length(10).unwrap();
    ///
    /// let handle = file.open(FileMode::WriteAppend);
    /// assert_eq!(handle.position(), 10);
    ///
    /// file.open(FileMode::Write);
    /// assert_eq!(file.len(), 0);
    /// ```
    pub fn open(&self, mode: FileMode) -> FileHandle<'_> {
        if mode.truncates_on_open() {
            self.clear();
        }

        let position = if mode.starts_at_end() { self.size() } else { 0 };
        debug!("opened {mode} handle at {position}, length {}", self.len());
        FileHandle::new(self, mode, position)
    }

    /// Returns a copy of the current contents.
    pub fn to_vec(&self) -> Vec<u8> { self.data.borrow().clone() }

    pub(crate) fn size(&self) -> usize { self.data.borrow().len() }

    pub(crate) fn resize(&self, len: usize) -> Result<()> {
        let mut data = self.data.borrow_mut();
        debug!("resizing file from {} to {len}", data.len());
        if len > data.len() {
            let additional = len - data.len();
            data.try_reserve(additional)
                .map_err(|err| FileError::Range(format!("cannot grow file to {len}: {err}")))?;
        }
        data.truncate(len);
        data.resize(len, 0);
        Ok(())
    }

    /// Writes data to the file at the specified offset, growing it if needed.
    /// A gap between the old end and `offset` is zero-filled.
    pub(crate) fn write_at(&self, offset: usize, buf: &[u8]) {
        if buf.is_empty() {
            return;
        }

        let mut data = self.data.borrow_mut();
        let end_pos = offset + buf.len();

        if end_pos > data.len() {
            data.resize(end_pos, 0);
        }

        data[offset..end_pos].copy_from_slice(buf);
    }

    /// Reads up to `len` bytes starting at `offset`.
    pub(crate) fn read_at(&self, offset: usize, len: usize) -> Vec<u8> {
        let data = self.data.borrow();
        if offset >= data.len() {
            return Vec::new();
        }

        let end_pos = offset.saturating_add(len).min(data.len());
        data[offset..end_pos].to_vec()
    }
}

impl From<Vec<u8>> for File {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: RefCell::new(data),
        }
    }
}

impl From<&[u8]> for File {
    fn from(data: &[u8]) -> Self { Self::from(data.to_vec()) }
}

/// Converts a signed count or position into an index, rejecting negatives.
pub(crate) fn to_usize(value: i64, what: &str) -> Result<usize> {
    if value < 0 {
        return Err(FileError::Range(format!("{what} cannot be negative: {value}")));
    }
    usize::try_from(value).map_err(|_| FileError::Range(format!("{what} is too large: {value}")))
}
