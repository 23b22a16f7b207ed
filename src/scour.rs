//! Letter-set constraints compiled into a phrase predicate.
//!
//! A [`Scour`] is built from two letter sets:
//! - MUST: every one of these letters has to appear in the phrase
//! - MAY: the only letters the phrase is allowed to contain
//!
//! MAY is normally a superset of MUST; [`Scour::from_letters`] takes care of
//! that for callers that collect the two sets separately.

use crate::letters::{letter_index, FrequencyVector};
use crate::phrase::Phrase;

/// A compiled must-contain / may-contain filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scour {
    required: Vec<usize>,
    allowed: FrequencyVector,
}

impl Scour {
    /// Compile the filter. Bytes outside `a..=z` are ignored.
    ///
    /// An empty `may` set forbids every letter.
    pub fn new(must: &[u8], may: &[u8]) -> Self {
        let mut required: Vec<usize> = must.iter().filter_map(|&b| slot_of(b)).collect();
        required.sort_unstable();
        required.dedup();

        let mut letters = String::with_capacity(may.len());
        for &b in may {
            if slot_of(b).is_some() {
                letters.push(b as char);
            }
        }

        Self {
            required,
            allowed: FrequencyVector::count(&letters),
        }
    }

    /// Compile from user-supplied letter strings: both are lowercased and the
    /// MUST letters are added to the MAY set.
    pub fn from_letters(must: &str, may: &str) -> Self {
        let must = must.to_lowercase();
        let mut may = may.to_lowercase();
        may.push_str(&must);
        Self::new(must.as_bytes(), may.as_bytes())
    }

    /// Returns true if `phrase` holds every required letter and nothing outside the allowed set.
    pub fn accepts(&self, phrase: &Phrase) -> bool {
        if phrase.is_reset() {
            return false;
        }
        let counts = phrase.counts();

        if self.required.iter().any(|&i| counts.slot(i) == 0) {
            return false;
        }

        !counts
            .iter()
            .any(|(i, c)| c > 0 && self.allowed.slot(i) == 0)
    }

    /// Letter slots the phrase must contain, sorted.
    pub fn required(&self) -> &[usize] {
        &self.required
    }

    /// Allowed-letter bitmap; a zero slot marks a forbidden letter.
    pub fn allowed(&self) -> &FrequencyVector {
        &self.allowed
    }

    /// True when neither set names a letter.
    pub fn is_unconstrained(&self) -> bool {
        self.required.is_empty() && self.allowed.is_zero()
    }
}

/// The default hook: every phrase passes.
pub fn accept_all(_phrase: &Phrase) -> bool {
    true
}

fn slot_of(b: u8) -> Option<usize> {
    let slot = letter_index(b);
    if slot.is_none() {
        log::warn!("ignoring non-letter constraint byte {:?}", b as char);
    }
    slot
}
