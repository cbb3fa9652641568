//! `std::io` and `tokio::io` implementations for [`FileHandle`], so a handle
//! can be passed to code that expects a real file.
//!
//! Capability checks still apply: writing through a read-only handle fails
//! with `PermissionDenied`. Reaching the end of the file is reported the
//! usual way, as a read of 0 bytes.

use std::{
    io::{self, Read, Seek, SeekFrom, Write},
    pin::Pin,
    task::{Context, Poll},
};

use tokio::io::{AsyncRead, AsyncSeek, AsyncWrite, ReadBuf};

use crate::{FileError, FileHandle};

impl FileHandle<'_> {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let num = i64::try_from(buf.len()).unwrap_or(i64::MAX);
        match FileHandle::read(self, num) {
            Ok(bytes) => {
                buf[..bytes.len()].copy_from_slice(&bytes);
                Ok(bytes.len())
            }
            Err(FileError::Eof) => Ok(0),
            Err(err) => Err(err.into()),
        }
    }

    fn seek_to(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => i64::try_from(offset).ok(),
            SeekFrom::End(offset) => i64::try_from(self.file().len())
                .ok()
                .and_then(|len| len.checked_add(offset)),
            SeekFrom::Current(offset) => i64::try_from(self.position())
                .ok()
                .and_then(|position| position.checked_add(offset)),
        };

        let target = target
            .ok_or_else(|| FileError::Range(format!("seek target overflows: {pos:?}")))?;
        FileHandle::seek(self, target)?;
        Ok(self.position())
    }
}

impl Read for FileHandle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { self.read_into(buf) }
}

impl Write for FileHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        FileHandle::write(self, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl Seek for FileHandle<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> { self.seek_to(pos) }
}

impl AsyncRead for FileHandle<'_> {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        let result = this
            .read_into(buf.initialize_unfilled())
            .map(|n| buf.advance(n));
        Poll::Ready(result)
    }
}

impl AsyncWrite for FileHandle<'_> {
    fn poll_write(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(Write::write(self.get_mut(), buf))
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

impl AsyncSeek for FileHandle<'_> {
    fn start_seek(self: Pin<&mut Self>, position: SeekFrom) -> io::Result<()> {
        self.get_mut().seek_to(position).map(|_| ())
    }

    fn poll_complete(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<u64>> {
        Poll::Ready(Ok(self.position()))
    }
}


#[cfg(test)]
mod async_tests {
    use std::io::{self, SeekFrom};

    use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

    use crate::{File, FileMode};

    #[tokio::test]
    async fn test_round_trip() -> io::Result<()> {
        let file = File::new();

        let mut writer = file.open(FileMode::Write);
        writer.write_all(b"hello").await?;
        writer.flush().await?;

        let mut appender = file.open(FileMode::WriteAppend);
        appender.write_all(b" world").await?;

        let mut reader = file.open(FileMode::Read);
        let mut content = Vec::new();
        reader.read_to_end(&mut content).await?;
        assert_eq!(content, b"hello world");

        assert_eq!(AsyncSeekExt::seek(&mut reader, SeekFrom::Start(6)).await?, 6);
        let mut word = String::new();
        reader.read_to_string(&mut word).await?;
        assert_eq!(word, "world");
        Ok(())
    }

    #[tokio::test]
    async fn test_write_denied() {
        let file = File::new();
        let mut handle = file.open(FileMode::Append);
        let err = handle.write_all(b"data").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(file.len(), 0);
    }

    #[tokio::test]
    async fn test_seek_past_end_denied() {
        let file = File::from(vec![0; 4]);
        let mut handle = file.open(FileMode::ReadWrite);
        let err = AsyncSeekExt::seek(&mut handle, SeekFrom::End(1)).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(handle.position(), 0);
    }
}
