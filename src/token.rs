//! Token validation and normalization.
//!
//! A raw line qualifies as a token when it is 1 to [`MAX_TOKEN_LEN`] bytes
//! long and every byte lies in `'0'..='z'`. That single range admits digits,
//! letters, and the few symbols sorted between them (`:;<=>?@[\]^_` and
//! backtick), and excludes control characters, spaces, and non-ASCII bytes.

use std::fmt;

/// Longest accepted token, in bytes.
pub const MAX_TOKEN_LEN: usize = 85;

/// Lowest accepted byte.
pub const MIN_TOKEN_BYTE: u8 = b'0';

/// Highest accepted byte.
pub const MAX_TOKEN_BYTE: u8 = b'z';

/// Check whether a raw line qualifies as a token.
pub fn is_valid(line: &[u8]) -> bool {
    if line.is_empty() || line.len() > MAX_TOKEN_LEN {
        return false;
    }

    line.iter()
        .all(|b| (MIN_TOKEN_BYTE..=MAX_TOKEN_BYTE).contains(b))
}

/// Upper-case the first byte in place if it is a lowercase ASCII letter.
///
/// The remaining bytes are left untouched.
pub fn normalize(token: &mut [u8]) {
    if let Some(first) = token.first_mut() {
        first.make_ascii_uppercase();
    }
}

/// A validated, normalized token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(Vec<u8>);

impl Token {
    /// Validate and normalize a raw line.
    ///
    /// Returns `None` if the line does not qualify.
    pub fn parse(line: &[u8]) -> Option<Self> {
        if !is_valid(line) {
            return None;
        }

        let mut bytes = line.to_vec();
        normalize(&mut bytes);
        Some(Self(bytes))
    }

    /// Normalized token bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes, 1 to [`MAX_TOKEN_LEN`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed token.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take ownership of the token bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Valid tokens are ASCII by construction.
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Split a buffer on `\n` and keep the lines that qualify, in input order.
pub fn filter_lines(data: &[u8]) -> Vec<Token> {
    data.split(|&b| b == b'\n').filter_map(Token::parse).collect()
}
