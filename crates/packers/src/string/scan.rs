//! UTF-8 boundary scanner
//!
//! Finds where a packed string ends inside a buffer that has no length
//! prefix. The scan walks the buffer one character at a time and stops at the
//! first offset where the next character fails to decode: an invalid lead
//! byte, a bad or missing continuation byte, an overlong form, a surrogate, or
//! a sequence cut off by the end of the buffer.
//!
//! A decode failure is a stopping condition, never an error. Callers get back
//! the offset of the last good character boundary.

/// Width of the UTF-8 sequence introduced by `lead`, or 0 if `lead` cannot
/// start a sequence (continuation bytes, `0xC0`/`0xC1`, `0xF5..=0xFF`).
const fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decode the character starting at `offset`, if there is a complete and
/// valid one.
fn char_at(data: &[u8], offset: usize) -> Option<&str> {
    let width = sequence_width(*data.get(offset)?);
    if width == 0 {
        return None;
    }
    let chunk = data.get(offset..offset + width)?;
    std::str::from_utf8(chunk).ok()
}

/// Length in bytes of the longest valid UTF-8 prefix of `data`.
pub fn valid_utf8_prefix_len(data: &[u8]) -> usize {
    let mut offset = 0;
    while let Some(ch) = char_at(data, offset) {
        offset += ch.len();
    }
    offset
}

/// Greedily decode the front of `data`.
///
/// Returns the decoded prefix and the number of bytes it occupies. The
/// remainder is `&data[consumed..]`.
pub fn decode_utf8_prefix(data: &[u8]) -> (String, usize) {
    let mut decoded = String::new();
    let mut offset = 0;
    while let Some(ch) = char_at(data, offset) {
        decoded.push_str(ch);
        offset += ch.len();
    }
    (decoded, offset)
}
