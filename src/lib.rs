//! An in-memory random-access file.
//!
//! A [`File`] is a single growable byte buffer. [`File::open`] hands out
//! [`FileHandle`]s that read, write, seek and truncate through a cursor,
//! with capabilities fixed by the [`FileMode`] they were opened with.
//! Nothing touches the disk, which makes the types handy in tests and
//! virtual filesystems.
//!
//! All handles of a file share its buffer. There is no snapshotting: a
//! length change made through [`File::set_length`] or through another
//! handle is seen by every handle on its next call.
//!
//! # Examples
//!
//! ```rust
//! use memfile::{File, FileError, FileMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let file = File::new();
//!     file.set_length(10)?;
//!
//!     let mut handle = file.open(FileMode::ReadWrite);
//!     handle.write(&[5, 3, 2, 1, 1])?;
//!     assert_eq!(file.len(), 10);
//!
//!     handle.seek(7)?;
//!     handle.write(&[5, 3, 2, 1, 1])?;
//!     assert_eq!(file.len(), 12);
//!
//!     let mut reader = file.open(FileMode::Read);
//!     assert_eq!(reader.read(12)?, [5, 3, 2, 1, 1, 0, 0, 5, 3, 2, 1, 1]);
//!     assert_eq!(reader.read(1), Err(FileError::Eof));
//!
//!     Ok(())
//! }
//! ```
//!
//! Handles also implement the `std::io` and `tokio::io` traits:
//!
//! ```rust
//! use memfile::{File, FileMode};
//! use tokio::io::{AsyncReadExt, AsyncWriteExt};
//!
//! # tokio_test::block_on(async {
//! let file = File::new();
//! file.open(FileMode::Write).write_all(b"hello").await.unwrap();
//!
//! let mut content = String::new();
//! file.open(FileMode::Read).read_to_string(&mut content).await.unwrap();
//! assert_eq!(content, "hello");
//! # });
//! ```

pub use error::FileError;
pub use file::File;
pub use handle::FileHandle;
pub use mode::FileMode;

pub mod error;
mod file;
mod handle;
mod io;
mod mode;

pub type Result<T> = std::result::Result<T, FileError>;
