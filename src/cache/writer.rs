//! Cache file writer.

use std::io::{BufWriter, Write};

use super::format::*;
use crate::{Error, Result};

/// Longest token length in a single pass; zero for an empty set.
pub fn max_width<T: AsRef<[u8]>>(tokens: &[T]) -> usize {
    tokens
        .iter()
        .map(|t| t.as_ref().len())
        .max()
        .unwrap_or(0)
}

/// Buffered writer for fixed-width cache files.
///
/// Output is a header byte (`W + 1`) followed by one record per token:
/// a length byte and the token bytes zero-padded to `W`.
pub struct CacheWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> CacheWriter<W> {
    /// Create a new writer over `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            out: BufWriter::new(inner),
        }
    }

    /// Write the header and all records, in order, then flush.
    ///
    /// Consumes the writer, so a file holds exactly one header. Returns the
    /// underlying writer; flush errors surface here.
    pub fn write<T: AsRef<[u8]>>(mut self, tokens: &[T]) -> Result<W> {
        let width = max_width(tokens);
        let header = header_byte(width)?;

        let template = vec![0u8; width];
        let mut record = vec![0u8; width];

        self.out.write_all(&[header])?;

        for token in tokens {
            let bytes = token.as_ref();
            let len = length_byte(bytes.len())?;

            record.copy_from_slice(&template);
            record[..bytes.len()].copy_from_slice(bytes);

            self.out.write_all(&[len])?;
            self.out.write_all(&record)?;
        }

        log::debug!(
            "Encoded {} records of width {} (header {})",
            tokens.len(),
            width,
            header
        );

        self.out
            .into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }
}

/// Encode tokens into an in-memory cache image.
pub fn encode<T: AsRef<[u8]>>(tokens: &[T]) -> Result<Vec<u8>> {
    let width = max_width(tokens);
    CacheWriter::new(Vec::with_capacity(file_size(width, tokens.len()))).write(tokens)
}
