//! Cache file reader with memory-mapping support.

use memmap2::Mmap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use super::format::*;
use crate::{Error, Result};

enum Backing {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Backing {
    fn bytes(&self) -> &[u8] {
        match self {
            Backing::Mapped(mmap) => &mmap[..],
            Backing::Owned(data) => data.as_slice(),
        }
    }
}

/// Random-access reader over a cache file.
///
/// Record `i` starts at `1 + i * stride`, where the stride is the header
/// byte. Its first byte is the token length, followed by the padded body.
pub struct CacheReader {
    data: Backing,
    width: usize,
    count: usize,
}

impl CacheReader {
    /// Open and validate a cache file.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;

        if file.metadata()?.len() == 0 {
            return Err(Error::EmptyCache);
        }

        let mmap = unsafe { Mmap::map(&file)? };
        Self::new(Backing::Mapped(mmap))
    }

    /// Wrap an in-memory cache image.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::new(Backing::Owned(data))
    }

    fn new(data: Backing) -> Result<Self> {
        let bytes = data.bytes();
        let header = *bytes.first().ok_or(Error::EmptyCache)?;
        let width = width_from_header(header)?;
        let stride = width + LENGTH_FIELD_SIZE;

        let body = &bytes[HEADER_SIZE..];
        if body.len() % stride != 0 {
            return Err(Error::TruncatedCache {
                len: body.len(),
                stride,
            });
        }

        for (index, record) in body.chunks_exact(stride).enumerate() {
            let len = record[0];
            if len as usize > width {
                return Err(Error::CorruptRecord { index, len, width });
            }
        }

        let count = body.len() / stride;
        Ok(Self { data, width, count })
    }

    /// Record body width `W`.
    pub fn record_width(&self) -> usize {
        self.width
    }

    /// Bytes per record, equal to the header byte.
    pub fn stride(&self) -> usize {
        self.width + LENGTH_FIELD_SIZE
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when the cache holds only a header.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the token stored in record `index`, without padding.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.count {
            return None;
        }

        let start = HEADER_SIZE + index * self.stride();
        let bytes = self.data.bytes();
        let len = bytes[start] as usize;
        let body = start + LENGTH_FIELD_SIZE;
        Some(&bytes[body..body + len])
    }

    /// Iterate over all tokens in file order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.count).filter_map(move |i| self.get(i))
    }

    /// Copy every token out of the cache.
    pub fn to_tokens(&self) -> Vec<Vec<u8>> {
        self.iter().map(<[u8]>::to_vec).collect()
    }

    /// The raw file image.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.bytes()
    }
}
