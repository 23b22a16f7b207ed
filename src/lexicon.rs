//! Lexicon construction from raw word lists.
//!
//! Every line goes through the same pipeline: skip blanks and `#` comments,
//! keep only the text before the first whitespace, check the length bounds,
//! lowercase, reject garbage, then run the caller's filter on a pooled
//! [`Phrase`]. Survivors are collected into a [`Lexicon`].
//!
//! Two strategies run that pipeline:
//! - [`Strategy::Linear`] does everything on the calling thread and keeps input order.
//! - [`Strategy::Parallel`] reads on the calling thread, fans the garbage and
//!   filter checks out over a rayon pool, and has a single collector thread
//!   receive accepted phrases over a rendezvous channel. Order follows
//!   completion, not input.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use rayon::prelude::*;

use crate::error::{LexiconError, Result};
use crate::garbage::is_garbage;
use crate::phrase::{Phrase, PhrasePool};
use crate::{COMMENT, DEFAULT_MIN_LEN, WORDLE_LEN};

/// Accepted phrases from one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    phrases: Vec<Phrase>,
}

impl Lexicon {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, phrase: Phrase) {
        self.phrases.push(phrase);
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Phrase> {
        self.phrases.iter()
    }

    /// Display strings in lexicon order.
    pub fn displays(&self) -> impl Iterator<Item = &str> + '_ {
        self.phrases.iter().map(Phrase::display)
    }

    pub fn into_displays(self) -> Vec<String> {
        self.phrases.into_iter().map(Phrase::into_display).collect()
    }

    /// Display strings sorted alphabetically, for order-independent comparison.
    pub fn sorted_displays(&self) -> Vec<String> {
        let mut out: Vec<String> = self.displays().map(str::to_owned).collect();
        out.sort_unstable();
        out
    }

    pub fn contains(&self, display: &str) -> bool {
        self.displays().any(|d| d == display)
    }
}

impl FromIterator<Phrase> for Lexicon {
    fn from_iter<I: IntoIterator<Item = Phrase>>(iter: I) -> Self {
        Self {
            phrases: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Lexicon {
    type Item = Phrase;
    type IntoIter = std::vec::IntoIter<Phrase>;

    fn into_iter(self) -> Self::IntoIter {
        self.phrases.into_iter()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Phrase;
    type IntoIter = std::slice::Iter<'a, Phrase>;

    fn into_iter(self) -> Self::IntoIter {
        self.phrases.iter()
    }
}

/// How a build schedules its per-candidate work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Fan out across worker threads; result order is unspecified.
    #[default]
    Parallel,
    /// Single-threaded; result order matches input order.
    Linear,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "parallel" | "standard" => Ok(Strategy::Parallel),
            "linear" => Ok(Strategy::Linear),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Parallel => f.write_str("parallel"),
            Strategy::Linear => f.write_str("linear"),
        }
    }
}

/// Knobs for a single build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Shortest accepted token, inclusive.
    pub min_len: usize,
    /// Longest accepted token, inclusive. Zero means no upper bound.
    pub max_len: usize,
    pub strategy: Strategy,
    /// The source is pre-vetted; skip garbage detection.
    pub clean: bool,
    /// Skip garbage detection regardless of `clean`.
    pub verbose: bool,
    /// Worker count for a dedicated pool. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: 0,
            strategy: Strategy::default(),
            clean: false,
            verbose: false,
            threads: None,
        }
    }
}

impl BuildOptions {
    /// Five-letter words only.
    pub fn wordle() -> Self {
        Self {
            min_len: WORDLE_LEN,
            max_len: WORDLE_LEN,
            ..Self::default()
        }
    }

    pub fn with_lengths(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn skips_garbage_check(&self) -> bool {
        self.clean || self.verbose
    }

    /// Whether a token of `len` bytes is within the length bounds.
    pub fn fits(&self, len: usize) -> bool {
        len >= self.min_len && (self.max_len == 0 || len <= self.max_len)
    }
}

/// Line and candidate counts from one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub lines: usize,
    /// Blank, comment, and empty-token lines.
    pub skipped: usize,
    pub malformed: usize,
    pub out_of_range: usize,
    pub garbage: usize,
    /// Candidates the filter turned down.
    pub rejected: usize,
    pub accepted: usize,
}

#[derive(Default)]
struct Tally {
    garbage: AtomicUsize,
    rejected: AtomicUsize,
}

/// Builds [`Lexicon`]s according to a set of [`BuildOptions`].
#[derive(Debug, Clone)]
pub struct LexiconBuilder<'p> {
    options: BuildOptions,
    pool: &'p PhrasePool,
}

impl LexiconBuilder<'static> {
    /// A builder drawing phrases from the process-wide pool.
    pub fn new(options: BuildOptions) -> Self {
        Self::with_pool(options, PhrasePool::global())
    }
}

impl<'p> LexiconBuilder<'p> {
    pub fn with_pool(options: BuildOptions, pool: &'p PhrasePool) -> Self {
        Self { options, pool }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Open `path` and build from its lines.
    pub fn build_from_path<F>(&self, path: impl AsRef<Path>, filter: F) -> Result<Lexicon>
    where
        F: Fn(&Phrase) -> bool + Sync,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexiconError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.build(BufReader::new(file), filter)
    }

    /// Build from an in-memory word list.
    pub fn build_from_bytes<F>(&self, bytes: &[u8], filter: F) -> Result<Lexicon>
    where
        F: Fn(&Phrase) -> bool + Sync,
    {
        self.build(bytes, filter)
    }

    /// Build from a pre-vetted, in-memory word list; garbage detection is skipped.
    pub fn build_from_embedded<F>(&self, bytes: &[u8], filter: F) -> Result<Lexicon>
    where
        F: Fn(&Phrase) -> bool + Sync,
    {
        let options = self.options.clone().with_clean(true);
        LexiconBuilder::with_pool(options, self.pool).build(bytes, filter)
    }

    pub fn build<R, F>(&self, reader: R, filter: F) -> Result<Lexicon>
    where
        R: BufRead,
        F: Fn(&Phrase) -> bool + Sync,
    {
        self.build_with_stats(reader, filter).map(|(lexicon, _)| lexicon)
    }

    /// Build and report what happened to every line.
    ///
    /// A read error aborts the build; no partial lexicon is returned.
    pub fn build_with_stats<R, F>(&self, reader: R, filter: F) -> Result<(Lexicon, BuildStats)>
    where
        R: BufRead,
        F: Fn(&Phrase) -> bool + Sync,
    {
        let tally = Tally::default();
        let mut stats = BuildStats::default();

        let lexicon = match self.options.strategy {
            Strategy::Linear => self.build_linear(reader, &filter, &tally, &mut stats)?,
            Strategy::Parallel => self.build_parallel(reader, &filter, &tally, &mut stats)?,
        };

        stats.garbage = tally.garbage.into_inner();
        stats.rejected = tally.rejected.into_inner();
        stats.accepted = lexicon.len();
        log::debug!("{} build finished: {:?}", self.options.strategy, stats);

        Ok((lexicon, stats))
    }

    fn build_linear<R, F>(
        &self,
        reader: R,
        filter: &F,
        tally: &Tally,
        stats: &mut BuildStats,
    ) -> Result<Lexicon>
    where
        R: BufRead,
        F: Fn(&Phrase) -> bool + Sync,
    {
        let mut lexicon = Lexicon::new();
        self.scan(reader, stats, |token| {
            if let Some(phrase) = self.admit(&token, filter, tally) {
                lexicon.push(phrase);
            }
        })?;
        Ok(lexicon)
    }

    fn build_parallel<R, F>(
        &self,
        reader: R,
        filter: &F,
        tally: &Tally,
        stats: &mut BuildStats,
    ) -> Result<Lexicon>
    where
        R: BufRead,
        F: Fn(&Phrase) -> bool + Sync,
    {
        let mut tokens = Vec::new();
        self.scan(reader, stats, |token| tokens.push(token))?;

        let workers = match self.options.threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };

        let (tx, rx) = crossbeam_channel::bounded::<Phrase>(0);
        let collector = thread::Builder::new()
            .name("lexicon-collector".into())
            .spawn(move || {
                let mut lexicon = Lexicon::new();
                for phrase in rx {
                    lexicon.push(phrase);
                }
                lexicon
            })
            .map_err(LexiconError::Spawn)?;

        let fan_out = || {
            tokens.par_iter().for_each_with(tx.clone(), |tx, token| {
                if let Some(phrase) = self.admit(token, filter, tally) {
                    // Only fails once the collector is gone; join reports that below.
                    let _ = tx.send(phrase);
                }
            })
        };
        match &workers {
            Some(pool) => pool.install(fan_out),
            None => fan_out(),
        }
        drop(tx);

        collector.join().map_err(|_| LexiconError::CollectorPanicked)
    }

    /// Garbage check, then the caller's filter. Rejected phrases go back to the pool.
    fn admit<F>(&self, token: &str, filter: &F, tally: &Tally) -> Option<Phrase>
    where
        F: Fn(&Phrase) -> bool + Sync,
    {
        if !self.options.skips_garbage_check() && is_garbage(token) {
            tally.garbage.fetch_add(1, Ordering::Relaxed);
            return None;
        }

        let phrase = self.pool.acquire_with(token);
        if filter(&phrase) {
            Some(phrase)
        } else {
            self.pool.release(phrase);
            tally.rejected.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    /// Split `reader` into lines and hand each lowercased, length-qualified token to `emit`.
    fn scan<R, E>(&self, reader: R, stats: &mut BuildStats, mut emit: E) -> Result<()>
    where
        R: BufRead,
        E: FnMut(String),
    {
        for (n, line) in reader.split(b'\n').enumerate() {
            let mut line = line?;
            stats.lines += 1;

            if line.last() == Some(&b'\r') {
                line.pop();
            }
            if line.first().map_or(true, |&b| b == COMMENT) {
                stats.skipped += 1;
                continue;
            }

            let line = match String::from_utf8(line) {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("skipping malformed line {}: {}", n + 1, e);
                    stats.malformed += 1;
                    continue;
                }
            };

            // drop trailing annotations
            let token = line.split(char::is_whitespace).next().unwrap_or_default();
            if token.is_empty() {
                stats.skipped += 1;
                continue;
            }
            if !self.options.fits(token.len()) {
                stats.out_of_range += 1;
                continue;
            }

            emit(token.to_lowercase());
        }
        Ok(())
    }
}
