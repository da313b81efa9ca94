//! Whole-file loading with a size guard and a streaming fallback.

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use crate::{Error, Result};

/// Chunk size used when the file size is not known up front.
pub const READ_CHUNK_SIZE: usize = 1024;

/// Load a file fully into memory.
///
/// Files that report a size of zero (including special files whose size
/// is unknown) are read in [`READ_CHUNK_SIZE`] chunks until end-of-stream.
/// Files with a known size are read into a buffer of exactly that size;
/// the returned buffer holds whatever was actually read.
///
/// A missing file is reported as [`Error::NotFound`]; every other open or
/// read failure is [`Error::Io`].
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    // Size is advisory: a failed stat falls back to the streaming path.
    let size = file.metadata().map(|m| m.len()).unwrap_or(0);
    let len = addressable_len::<usize>(size)?;

    let data = if len == 0 {
        log::debug!("Reading {:?} in {}-byte chunks", path, READ_CHUNK_SIZE);
        read_chunked(&mut file)?
    } else {
        log::debug!("Reading {:?} ({} bytes)", path, len);
        read_sized(&mut file, len)?
    };

    log::debug!("Loaded {} bytes from {:?}", data.len(), path);
    Ok(data)
}

/// Narrow a 64-bit file size to an in-memory length type, failing if it
/// does not round-trip. File reads narrow to `usize`.
pub fn addressable_len<T: TryFrom<u64>>(size: u64) -> Result<T> {
    T::try_from(size).map_err(|_| Error::Capacity { size })
}

/// Read until end-of-stream in fixed-size chunks.
pub fn read_chunked<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => data.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(data)
}

/// Read at most `len` bytes into a buffer allocated for exactly `len`.
///
/// The result is shorter than `len` if the stream ends early.
pub fn read_sized<R: Read>(reader: &mut R, len: usize) -> io::Result<Vec<u8>> {
    let mut data = Vec::with_capacity(len);
    reader.take(len as u64).read_to_end(&mut data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::tempdir;

    /// Reader that yields a fixed number of bytes per call, then an error.
    struct FailingReader {
        remaining: usize,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(ErrorKind::Other, "device gone"));
            }
            let n = self.remaining.min(buf.len()).min(100);
            buf[..n].fill(b'x');
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn test_read_file_known_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs_write(&path, b"alpha\nbeta\n");

        let data = read_file(&path).unwrap();
        assert_eq!(data, b"alpha\nbeta\n");
    }

    #[test]
    fn test_read_file_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs_write(&path, b"");

        let data = read_file(&path).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_read_file_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        match read_file(&path) {
            Err(Error::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_file_directory_is_io_error() {
        let dir = tempdir().unwrap();

        // Opening succeeds on unix but reading a directory fails.
        let result = read_file(dir.path());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_read_chunked_spans_many_chunks() {
        let input: Vec<u8> = (0..READ_CHUNK_SIZE * 3 + 17).map(|i| i as u8).collect();
        let mut cursor = Cursor::new(input.clone());

        let data = read_chunked(&mut cursor).unwrap();
        assert_eq!(data, input);
    }

    #[test]
    fn test_read_chunked_surfaces_errors() {
        let mut reader = FailingReader { remaining: 250 };
        let err = read_chunked(&mut reader).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn test_read_sized_short_stream() {
        let mut cursor = Cursor::new(b"abc".to_vec());
        let data = read_sized(&mut cursor, 10).unwrap();
        assert_eq!(data, b"abc");
    }

    #[test]
    fn test_read_sized_stops_at_len() {
        let mut cursor = Cursor::new(b"abcdef".to_vec());
        let data = read_sized(&mut cursor, 4).unwrap();
        assert_eq!(data, b"abcd");
    }

    #[test]
    fn test_addressable_len_roundtrip() {
        assert_eq!(addressable_len::<usize>(0).unwrap(), 0);
        assert_eq!(addressable_len::<usize>(4096).unwrap(), 4096);
        assert_eq!(addressable_len::<u32>(u64::from(u32::MAX)).unwrap(), u32::MAX);
    }

    #[test]
    fn test_addressable_len_overflow() {
        // Same check a 32-bit target applies to `usize`.
        let size = u64::from(u32::MAX) + 1;
        assert!(matches!(
            addressable_len::<u32>(size),
            Err(Error::Capacity { size: s }) if s == size
        ));
        assert_eq!(Error::Capacity { size }.status(), crate::Status::Failure);
    }

    fn fs_write(path: &Path, data: &[u8]) {
        let mut file = File::create(path).unwrap();
        file.write_all(data).unwrap();
    }
}
