//! # Lexicon Scour
//!
//! A multithreaded word-list filter for letter-constraint word puzzles.
//!
//! Raw word lists are normalized, stripped of garbage entries, and run through
//! a [`Scour`] predicate that keeps only words containing every MUST letter and
//! no letter outside the MAY set. Builds run either in parallel across a rayon
//! pool or linearly on the calling thread.

pub mod error;
pub mod garbage;
pub mod letters;
pub mod lexicon;
pub mod phrase;
pub mod scour;

pub use error::{LexiconError, Result};
pub use garbage::is_garbage;
pub use letters::{letter_index, FrequencyVector};
pub use lexicon::{BuildOptions, BuildStats, Lexicon, LexiconBuilder, Strategy};
pub use phrase::{Phrase, PhrasePool};
pub use scour::{accept_all, Scour};

/// Number of letters tracked per phrase
pub const ALPHABET_LEN: usize = 26;

/// Lines starting with this byte are comments
pub const COMMENT: u8 = b'#';

/// Default minimum word length
pub const DEFAULT_MIN_LEN: usize = 6;

/// Word length for Wordle
pub const WORDLE_LEN: usize = 5;
