//! Error types for wordcache.

use std::path::PathBuf;

use thiserror::Error;

use crate::status::Status;

/// Error type for wordcache operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist
    #[error("no such file: {}", .0.display())]
    NotFound(PathBuf),

    /// File size cannot be addressed in memory on this platform
    #[error("file too large to load: {size} bytes")]
    Capacity { size: u64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Token length does not fit the single-byte length field
    #[error("token length {len} does not fit a length byte")]
    TokenTooLong { len: usize },

    /// Record width does not fit the single-byte header
    #[error("record width {width} does not fit the header byte")]
    RecordWidthOverflow { width: usize },

    /// Cache header byte is not a valid stride
    #[error("invalid cache header byte: {0}")]
    InvalidHeader(u8),

    /// Cache body is not a whole number of records
    #[error("truncated cache: {len} bytes is not a whole number of {stride}-byte records")]
    TruncatedCache { len: usize, stride: usize },

    /// Record length byte is wider than the record body
    #[error("corrupt record {index}: length {len} exceeds width {width}")]
    CorruptRecord { index: usize, len: u8, width: usize },

    /// Cache file holds no header or no records
    #[error("cache is empty")]
    EmptyCache,

    /// Malformed duration string
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// Duration does not fit a signed 64-bit nanosecond count
    #[error("duration out of range: {0}")]
    DurationOverflow(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Map this error onto the integer status taxonomy.
    pub fn status(&self) -> Status {
        match self {
            Error::NotFound(_) => Status::NotFound,
            _ => Status::Failure,
        }
    }
}

/// Result type alias for wordcache operations.
pub type Result<T> = std::result::Result<T, Error>;
