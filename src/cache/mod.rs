//! Fixed-width binary cache file format.
//!
//! # File Structure
//!
//! ```text
//! +----------------------+
//! | HEADER      1 byte   |  W + 1 (bytes per record)
//! +----------------------+
//! | RECORD 0    W+1 bytes|  length L, then L token bytes, then W - L zeros
//! +----------------------+
//! | RECORD 1    W+1 bytes|
//! +----------------------+
//! |      ...             |
//! +----------------------+
//! ```
//!
//! `W` is the longest token in the file. Records appear in input order.

mod format;
mod reader;
mod writer;

#[cfg(test)]
mod tests;

pub use format::*;
pub use reader::CacheReader;
pub use writer::{encode, max_width, CacheWriter};
