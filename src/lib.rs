//! Wordcache - wordlist filtering and fixed-width binary cache files.
//!
//! This crate turns a newline-delimited wordlist into a compact cache file
//! that can be indexed directly: every record has the same width, so the
//! `n`th token lives at a computable offset.
//!
//! # Features
//!
//! - **Validation**: lines of 1-85 bytes in the `'0'..='z'` range survive
//! - **Normalization**: a lowercase first letter is upper-cased
//! - **Fixed-width records**: length byte + zero-padded body, input order
//! - **Atomic output**: the cache is replaced only after a complete write
//! - **Memory-mapped reading**: random access to any record
//! - **Duration parsing**: `"1h30m"` to signed nanoseconds
//!
//! # Quick Start
//!
//! ```ignore
//! use wordcache::{generate_cache_file, CacheReader};
//! use std::path::Path;
//!
//! let report = generate_cache_file(Path::new("wordlist.txt"), Path::new("words.db"))?;
//! println!("{} tokens, width {}", report.tokens, report.record_width);
//!
//! let reader = CacheReader::open(Path::new("words.db"))?;
//! for token in reader.iter() {
//!     println!("{}", String::from_utf8_lossy(token));
//! }
//! ```
//!
//! # Status Codes
//!
//! Hosts that want integer results instead of typed errors can call
//! [`generate_cache_file_status`] and [`parse_duration_status`]:
//!
//! - `0`: success
//! - `1`: I/O, write, or parse failure
//! - `2`: input file not found

mod error;
mod status;

pub mod cache;
pub mod config;
pub mod duration;
pub mod fileread;
pub mod generate;
pub mod phrase;
pub mod token;

// Re-export core types
pub use error::{Error, Result};
pub use status::Status;

pub use cache::{CacheReader, CacheWriter};
pub use config::WordlistConfig;
pub use duration::{parse_duration, parse_duration_secs, parse_duration_status};
pub use generate::{generate_cache_file, generate_cache_file_status, GenerationReport};
pub use phrase::{open_or_generate, PhraseGenerator};
pub use token::{is_valid, normalize, Token, MAX_TOKEN_LEN};
