use std::{fmt, io};

/// Errors that can occur when working with an in-memory file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    /// A read was attempted with no bytes left before the end of the file.
    Eof,
    /// The handle's open mode does not allow the requested operation.
    IllegalState(String),
    /// A length, count or position argument is out of bounds.
    Range(String),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Eof => write!(f, "End of file"),
            FileError::IllegalState(msg) => {
                write!(f, "Illegal state: {msg}")
            }
            FileError::Range(msg) => {
                write!(f, "Out of range: {msg}")
            }
        }
    }
}

impl std::error::Error for FileError {}

impl From<FileError> for io::Error {
    fn from(err: FileError) -> Self {
        let kind = match err {
            FileError::Eof => io::ErrorKind::UnexpectedEof,
            FileError::IllegalState(_) => io::ErrorKind::PermissionDenied,
            FileError::Range(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}
