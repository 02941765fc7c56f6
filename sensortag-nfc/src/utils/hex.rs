//! Lowercase hex helpers used to build record text.
//!
//! Record text lives in a fixed working capacity; encoders here check that
//! capacity up front and report an error instead of truncating, since a cut
//! hex string would end on half a byte.

use std::fmt::Write;

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Hex-encode `bytes` into a string that may hold at most `max_chars`
/// characters.
pub fn bytes_to_hex_bounded(bytes: &[u8], max_chars: usize, what: &'static str) -> Result<String> {
    let needed = bytes.len() * 2;
    if needed > max_chars {
        return Err(Error::CapacityExceeded {
            what,
            limit: max_chars / 2,
            actual: bytes.len(),
        });
    }
    Ok(bytes_to_hex(bytes))
}

/// Concatenate 32-bit words as lowercase hex, each zero-padded to eight
/// digits.
///
/// Example: `&[0xab, 0x1]` -> `"000000ab00000001"`
pub fn words_to_hex(words: &[u32]) -> String {
    let mut s = String::with_capacity(words.len() * 8);
    for w in words {
        let _ = write!(&mut s, "{:08x}", w);
    }
    s
}

/// True when `s` is non-empty, even-length and only `0-9a-f`.
pub fn is_lower_hex(s: &str) -> bool {
    !s.is_empty()
        && s.len() % 2 == 0
        && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Parse a hex string (either case) back into bytes.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(Error::Format(format!("odd-length hex text '{}'", s)));
    }

    s.as_bytes()
        .chunks(2)
        .map(|pair| {
            let hi = nibble(pair[0]);
            let lo = nibble(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                _ => Err(Error::Format(format!(
                    "invalid hex pair '{}'",
                    String::from_utf8_lossy(pair)
                ))),
            }
        })
        .collect()
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
