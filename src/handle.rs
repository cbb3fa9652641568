use log::trace;

use crate::{File, FileError, FileMode, Result, file::to_usize};

/// A cursor over a [`File`], created by [`File::open`].
///
/// The handle borrows its file and keeps only its mode and position. Reads
/// and writes go straight to the file's buffer, so changes made through
/// other handles or through [`File::set_length`] are visible on the next
/// call.
#[derive(Debug)]
pub struct FileHandle<'a> {
    file: &'a File,
    mode: FileMode,
    position: usize,
}

impl<'a> FileHandle<'a> {
    pub(crate) fn new(file: &'a File, mode: FileMode, position: usize) -> Self {
        Self {
            file,
            mode,
            position,
        }
    }

    /// The mode this handle was opened with.
    pub fn mode(&self) -> FileMode { self.mode }

    /// The offset the next read or write starts at.
    pub fn position(&self) -> u64 { self.position as u64 }

    /// The file this handle operates on.
    pub fn file(&self) -> &'a File { self.file }

    /// Reads up to `num` bytes from the current position.
    ///
    /// Returns fewer bytes than requested when the file ends first. The
    /// position advances by the number of bytes returned.
    ///
    /// # Errors
    ///
    /// Returns `FileError::IllegalState` if the handle is not readable.
    /// Returns `FileError::Range` if `num` is negative.
    /// Returns `FileError::Eof` if the position is at or past the end of the
    /// file, even when `num` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use memfile::{File, FileError, FileMode};
    ///
    /// let file = File::from(vec![1, 2, 3]);
    /// let mut handle = file.open(FileMode::Read);
    ///
    /// assert_eq!(handle.read(2).unwrap(), [1, 2]);
    /// assert_eq!(handle.read(10).unwrap(), [3]);
    /// assert_eq!(handle.read(1), Err(FileError::Eof));
    /// ```
    pub fn read(&mut self, num: i64) -> Result<Vec<u8>> {
        if !self.mode.is_readable() {
            return Err(FileError::IllegalState(format!(
                "cannot read from a handle opened in {} mode",
                self.mode
            )));
        }

        let num = to_usize(num, "read count")?;

        if self.position >= self.len() {
            return Err(FileError::Eof);
        }

        let bytes = self.file.read_at(self.position, num);
        self.position += bytes.len();
        trace!("read {} bytes, position now {}", bytes.len(), self.position);
        Ok(bytes)
    }

    /// Writes `data` at the current position and advances past it.
    ///
    /// Bytes after the written range are left as they were, so writing into
    /// the middle of a file overlays it instead of cutting it short. The file
    /// only grows when the write runs past its end. Writing an empty slice
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `FileError::IllegalState` if the handle is not writable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use memfile::{File, FileMode};
    ///
    /// let file = File::new();
    /// file.set_length(4).unwrap();
    ///
    /// let mut handle = file.open(FileMode::ReadWrite);
    /// handle.write(&[7, 7]).unwrap();
    /// assert_eq!(file.to_vec(), [7, 7, 0, 0]);
    /// ```
    pub fn write(&mut self, data: &[u8]) -> Result<()> {
        if !self.mode.is_writable() {
            return Err(FileError::IllegalState(format!(
                "cannot write to a handle opened in {} mode",
                self.mode
            )));
        }

        if data.is_empty() {
            return Ok(());
        }

        self.file.write_at(self.position, data);
        self.position += data.len();
        trace!("wrote {} bytes, position now {}", data.len(), self.position);
        Ok(())
    }

    /// Cuts the file at the current position, discarding everything after it.
    ///
    /// # Errors
    ///
    /// Returns `FileError::IllegalState` unless the handle was opened in a
    /// writable mode.
    pub fn truncate(&mut self) -> Result<()> {
        if !self.mode.can_truncate() {
            return Err(FileError::IllegalState(format!(
                "cannot truncate through a handle opened in {} mode",
                self.mode
            )));
        }

        trace!("truncating at {}", self.position);
        self.file.resize(self.position)
    }

    /// Moves the cursor to `num`.
    ///
    /// Seeking to exactly the end of the file is allowed; a read from there
    /// fails with `FileError::Eof`.
    ///
    /// # Errors
    ///
    /// Returns `FileError::Range` if `num` is negative or past the current
    /// end of the file.
    pub fn seek(&mut self, num: i64) -> Result<()> {
        let target = to_usize(num, "seek position")?;
        let len = self.len();
        if target > len {
            return Err(FileError::Range(format!(
                "cannot seek to {target} in a file of length {len}"
            )));
        }

        self.position = target;
        trace!("seeked to {target}");
        Ok(())
    }

    fn len(&self) -> usize { self.file.size() }
}
