//! Letter slots and per-phrase letter counts.
//!
//! Every lowercase Latin letter maps to a fixed slot in `0..26`. A
//! [`FrequencyVector`] holds one counter per slot; a slot is zero exactly when
//! its letter does not occur in the source string.

use crate::ALPHABET_LEN;

/// Map a lowercase ASCII letter to its slot.
///
/// Returns `None` for anything outside `a..=z`.
#[inline]
pub fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// Inverse of [`letter_index`].
#[inline]
pub fn index_letter(slot: usize) -> Option<u8> {
    if slot < ALPHABET_LEN {
        Some(b'a' + slot as u8)
    } else {
        None
    }
}

/// Occurrence counts for each of the 26 letters.
///
/// Slots hold true counts: `"banana"` stores 3 in the `a` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrequencyVector([u32; ALPHABET_LEN]);

impl FrequencyVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the letters of `s`. Bytes that are not lowercase letters are ignored.
    pub fn count(s: &str) -> Self {
        let mut counts = Self::new();
        counts.fill(s);
        counts
    }

    /// Overwrite every slot with the counts for `s`.
    pub fn fill(&mut self, s: &str) {
        self.clear();
        for &b in s.as_bytes() {
            if let Some(i) = letter_index(b) {
                self.0[i] += 1;
            }
        }
    }

    pub fn clear(&mut self) {
        self.0 = [0; ALPHABET_LEN];
    }

    /// Count stored in slot `i`; zero for out-of-range slots.
    #[inline]
    pub fn slot(&self, i: usize) -> u32 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Count for a letter; zero for non-letters.
    pub fn get(&self, letter: u8) -> u32 {
        letter_index(letter).map_or(0, |i| self.0[i])
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.get(letter) > 0
    }

    /// Sum of all slots.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Iterate `(slot, count)` pairs for every slot.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl From<&str> for FrequencyVector {
    fn from(s: &str) -> Self {
        Self::count(s)
    }
}

