//! Human-readable duration parsing ("300ms", "1h30m").

use crate::status::Status;
use crate::{Error, Result};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Accepted units and the spelling handed to humantime.
const UNITS: [(&str, &str); 8] = [
    ("ns", "ns"),
    ("us", "us"),
    ("\u{b5}s", "us"),
    ("\u{3bc}s", "us"),
    ("ms", "ms"),
    ("s", "s"),
    ("m", "m"),
    ("h", "h"),
];

/// Parse a duration string into a signed count of nanoseconds.
///
/// Accepts an optional leading `+` or `-`, the bare literal `0`, or a
/// run of magnitude+unit parts with no whitespace, such as `1h30m` or
/// `1.5h`. Units are `ns`, `us` (or `µs`), `ms`, `s`, `m`, and `h`.
pub fn parse_duration(text: &str) -> Result<i64> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if body == "0" {
        return Ok(0);
    }

    let canonical = canonicalize(text, body)?;
    let duration = humantime::parse_duration(&canonical)
        .map_err(|e| Error::InvalidDuration(format!("{:?}: {}", text, e)))?;

    let nanos = i64::try_from(duration.as_nanos())
        .map_err(|_| Error::DurationOverflow(text.to_string()))?;

    Ok(if negative { -nanos } else { nanos })
}

/// Check `body` against the magnitude+unit grammar and rewrite it with
/// humantime unit spellings.
fn canonicalize(text: &str, body: &str) -> Result<String> {
    let invalid = || Error::InvalidDuration(format!("{:?}", text));

    if body.is_empty() {
        return Err(invalid());
    }

    let mut out = String::with_capacity(body.len() + 2);
    let mut rest = body;

    while !rest.is_empty() {
        let (int, after) = rest.split_at(digits_end(rest));
        let (frac, after) = match after.strip_prefix('.') {
            Some(after) => {
                let (frac, after) = after.split_at(digits_end(after));
                (frac, after)
            }
            None => ("", after),
        };
        if int.is_empty() && frac.is_empty() {
            return Err(invalid());
        }

        let unit_end = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, tail) = after.split_at(unit_end);
        let unit = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, canonical)| *canonical)
            .ok_or_else(invalid)?;

        out.push_str(if int.is_empty() { "0" } else { int });
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
        out.push_str(unit);
        rest = tail;
    }

    Ok(out)
}

fn digits_end(s: &str) -> usize {
    s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len())
}

/// Parse a duration and report the outcome as `(nanoseconds, status)`.
///
/// Any failure yields `(0, Status::Failure)`.
pub fn parse_duration_status(text: &str) -> (i64, Status) {
    match parse_duration(text) {
        Ok(nanos) => (nanos, Status::Ok),
        Err(e) => {
            log::debug!("Rejected duration: {}", e);
            (0, Status::Failure)
        }
    }
}

/// Parse a duration into whole seconds.
///
/// A bare integer is taken as a number of seconds; anything else is parsed
/// with [`parse_duration`] and truncated toward zero.
pub fn parse_duration_secs(text: &str) -> Result<i64> {
    if let Ok(secs) = text.parse::<i64>() {
        return Ok(secs);
    }

    parse_duration(text).map(|nanos| nanos / NANOS_PER_SEC)
}
