//! Phrases and the pool that recycles them.
//!
//! Building a lexicon touches hundreds of thousands of candidates and keeps
//! only a handful, so rejected phrases go back to a [`PhrasePool`] instead of
//! being dropped. `release` takes the phrase by value: once a phrase is back in
//! the pool nothing outside it can still reach it.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;

use crate::letters::FrequencyVector;

static GLOBAL_POOL: Lazy<PhrasePool> = Lazy::new(PhrasePool::new);

/// A candidate word together with its letter counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    display: String,
    counts: FrequencyVector,
    zeroed: bool,
}

impl Phrase {
    /// Build a standalone phrase without going through a pool.
    pub fn new(s: &str) -> Self {
        let mut phrase = Self::blank();
        phrase.set(s);
        phrase
    }

    fn blank() -> Self {
        Self {
            display: String::new(),
            counts: FrequencyVector::new(),
            zeroed: true,
        }
    }

    /// Populate the phrase from `s`, discarding whatever it held before.
    pub fn set(&mut self, s: &str) {
        if !self.zeroed {
            self.reset();
        }
        self.zeroed = false;
        self.display.push_str(s);
        self.counts.fill(s);
    }

    /// Clear the display string and zero the counts. Keeps the string's allocation.
    pub fn reset(&mut self) {
        self.display.clear();
        self.counts.clear();
        self.zeroed = true;
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn counts(&self) -> &FrequencyVector {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    /// True until the phrase is populated, and again after `reset`.
    pub fn is_reset(&self) -> bool {
        self.zeroed
    }

    pub fn into_display(self) -> String {
        self.display
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Thread-safe free list of [`Phrase`] instances.
///
/// There is no upper bound on the number of idle phrases. Phrases that end up
/// in a lexicon are never returned.
#[derive(Debug, Default)]
pub struct PhrasePool {
    free: Mutex<Vec<Phrase>>,
    allocated: AtomicUsize,
}

impl PhrasePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide pool.
    pub fn global() -> &'static PhrasePool {
        &GLOBAL_POOL
    }

    /// Take a reset phrase, allocating one if the pool is empty.
    pub fn acquire(&self) -> Phrase {
        let recycled = self
            .free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();

        recycled.unwrap_or_else(|| {
            let n = self.allocated.fetch_add(1, Ordering::Relaxed) + 1;
            log::trace!("phrase pool grew to {} allocations", n);
            Phrase::blank()
        })
    }

    /// Take a phrase and populate it from `s`.
    pub fn acquire_with(&self, s: &str) -> Phrase {
        let mut phrase = self.acquire();
        phrase.set(s);
        phrase
    }

    /// Reset `phrase` and keep it for a later `acquire`.
    pub fn release(&self, mut phrase: Phrase) {
        phrase.reset();
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(phrase);
    }

    /// Number of phrases waiting to be reused.
    pub fn idle(&self) -> usize {
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of phrases this pool has ever allocated.
    pub fn allocated(&self) -> usize {
        self.allocated.load(Ordering::Relaxed)
    }
}
