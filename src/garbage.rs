//! Noise rejection for raw word-list entries.
//!
//! Word lists scraped from the wild carry OCR debris, numeric suffixes and
//! keyboard smashes. A candidate is garbage when any of these hold:
//!
//! 1. one character repeats 3 or more times in a row (`"aaab"`)
//! 2. one two-character unit repeats 4 or more times in a row (`"abababab"`)
//! 3. one three-character unit repeats 4 or more times in a row
//! 4. some character falls outside `a..=z`
//!
//! The repeated unit never contains whitespace. Input is expected to be
//! lowercased already.

/// Minimum consecutive copies of a single character that count as garbage.
pub const SINGLE_REPEATS: usize = 3;
/// Minimum consecutive copies of a two- or three-character unit that count as garbage.
pub const UNIT_REPEATS: usize = 4;

/// Returns true if `s` looks like noise rather than a word.
pub fn is_garbage(s: &str) -> bool {
    let bytes = s.as_bytes();
    has_repeated_run(bytes, 1, SINGLE_REPEATS)
        || has_repeated_run(bytes, 2, UNIT_REPEATS)
        || has_repeated_run(bytes, 3, UNIT_REPEATS)
        || has_non_letter(bytes)
}

/// Returns true if some `unit_len`-byte unit of non-whitespace occurs at
/// least `min_repeats` times back to back.
pub fn has_repeated_run(bytes: &[u8], unit_len: usize, min_repeats: usize) -> bool {
    if unit_len == 0 || min_repeats == 0 {
        return false;
    }
    let span = unit_len * min_repeats;
    if bytes.len() < span {
        return false;
    }

    (0..=bytes.len() - span).any(|start| {
        let unit = &bytes[start..start + unit_len];
        if unit.iter().any(u8::is_ascii_whitespace) {
            return false;
        }
        (1..min_repeats).all(|k| {
            let at = start + k * unit_len;
            &bytes[at..at + unit_len] == unit
        })
    })
}

/// Returns true if any byte is outside `a..=z`. Multi-byte characters always qualify.
#[inline]
pub fn has_non_letter(bytes: &[u8]) -> bool {
    bytes.iter().any(|b| !b.is_ascii_lowercase())
}
