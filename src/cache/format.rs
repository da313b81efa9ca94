//! Cache file format constants and single-byte field encoding.

use crate::{Error, Result};

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 1;

/// Size of each record's length field in bytes.
pub const LENGTH_FIELD_SIZE: usize = 1;

/// Widest record body whose stride (`width + 1`) still fits the header byte.
pub const MAX_RECORD_WIDTH: usize = u8::MAX as usize - LENGTH_FIELD_SIZE;

/// Encode the header byte for a record body width `W`.
///
/// The header stores the stride a reader advances per record: the length
/// byte plus `W` body bytes.
pub fn header_byte(width: usize) -> Result<u8> {
    if width > MAX_RECORD_WIDTH {
        return Err(Error::RecordWidthOverflow { width });
    }
    Ok((width + LENGTH_FIELD_SIZE) as u8)
}

/// Decode the record body width from a header byte.
pub fn width_from_header(header: u8) -> Result<usize> {
    match header {
        0 => Err(Error::InvalidHeader(header)),
        h => Ok(h as usize - LENGTH_FIELD_SIZE),
    }
}

/// Encode a token's length byte.
pub fn length_byte(len: usize) -> Result<u8> {
    u8::try_from(len).map_err(|_| Error::TokenTooLong { len })
}

/// Total file size for `count` records of body width `width`.
pub fn file_size(width: usize, count: usize) -> usize {
    HEADER_SIZE + count * (width + LENGTH_FIELD_SIZE)
}
