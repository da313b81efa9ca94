//! Write-read tests for the cache format.
//!
//! These cover the properties a consumer relies on: header stride, record
//! order, and the exact decoded token sequence.

use super::format::*;
use super::reader::CacheReader;
use super::writer::encode;
use crate::token::{filter_lines, Token, MAX_TOKEN_LEN};

/// Helper to filter raw input and load the encoded image back.
fn build_and_read(input: &[u8]) -> (Vec<Token>, CacheReader) {
    let tokens = filter_lines(input);
    let data = encode(&tokens).expect("Failed to encode tokens");
    let reader = CacheReader::from_bytes(data).expect("Failed to read cache");
    (tokens, reader)
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_mixed_input_layout() {
    let long = "x".repeat(86);
    let input = format!("abc\nDEF\n1\n{}\n", long);
    let (tokens, reader) = build_and_read(input.as_bytes());

    assert_eq!(tokens.len(), 3);
    assert_eq!(reader.len(), 3);
    assert_eq!(reader.record_width(), 3);

    let data = reader.as_bytes();
    assert_eq!(data[0], 4);
    // Only the first byte is case-normalized.
    assert_eq!(&data[1..5], &[3, b'A', b'b', b'c']);
    assert_eq!(&data[5..9], &[3, b'D', b'E', b'F']);
    assert_eq!(&data[9..13], &[1, b'1', 0, 0]);
    assert_eq!(data.len(), 13);
}

#[test]
fn test_every_record_has_same_stride() {
    let (_, reader) = build_and_read(b"a\nbb\nccc\ndddd\n");
    let data = reader.as_bytes();

    assert_eq!(data.len(), file_size(4, 4));
    for i in 0..reader.len() {
        let start = HEADER_SIZE + i * reader.stride();
        let len = data[start] as usize;
        let body = &data[start + 1..start + reader.stride()];
        assert_eq!(len, i + 1);
        assert!(body[len..].iter().all(|&b| b == 0));
    }
}

#[test]
fn test_no_survivors_writes_header_only() {
    let (tokens, reader) = build_and_read(b"\n\nhas space\n\xff\xfe\n");
    assert!(tokens.is_empty());
    assert!(reader.is_empty());
    assert_eq!(reader.as_bytes(), &[1]);
}

#[test]
fn test_max_length_token_retained() {
    let exact = "q".repeat(MAX_TOKEN_LEN);
    let over = "r".repeat(MAX_TOKEN_LEN + 1);
    let input = format!("{}\n{}\n", over, exact);
    let (_, reader) = build_and_read(input.as_bytes());

    assert_eq!(reader.len(), 1);
    assert_eq!(reader.record_width(), MAX_TOKEN_LEN);
    assert_eq!(reader.as_bytes()[0] as usize, MAX_TOKEN_LEN + 1);
    assert_eq!(reader.get(0).unwrap()[0], b'Q');
}

// ============================================================================
// Ordering and Round-trip Tests
// ============================================================================

#[test]
fn test_order_preserved_across_rejections() {
    let input = b"zulu\n\n!!!\nyankee\nwith space\n\nxray\n\x01\nwhiskey";
    let (_, reader) = build_and_read(input);

    let decoded: Vec<&[u8]> = reader.iter().collect();
    assert_eq!(
        decoded,
        vec![&b"Zulu"[..], &b"Yankee"[..], &b"Xray"[..], &b"Whiskey"[..]]
    );
}

#[test]
fn test_decode_reproduces_normalized_tokens() {
    let input = b"apple\nBanana\n42\ncherry_pie\n@handle\n";
    let (tokens, reader) = build_and_read(input);

    let expected: Vec<Vec<u8>> = tokens.into_iter().map(Token::into_bytes).collect();
    assert_eq!(reader.to_tokens(), expected);
}

#[test]
fn test_trailing_newline_does_not_add_record() {
    let (_, with) = build_and_read(b"one\ntwo\n");
    let (_, without) = build_and_read(b"one\ntwo");
    assert_eq!(with.as_bytes(), without.as_bytes());
}
