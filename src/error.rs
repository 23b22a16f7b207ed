//! Errors raised while building a lexicon.

use std::io;
use std::path::PathBuf;

/// Failures that stop a build. Rejected candidates are not errors.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("unable to open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading word list: {0}")]
    Read(#[from] io::Error),

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to spawn collector thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("lexicon collector thread panicked")]
    CollectorPanicked,
}

pub type Result<T> = std::result::Result<T, LexiconError>;
