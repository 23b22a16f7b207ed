//! Lexicon Scour CLI
//!
//! Prints every word in a word list that contains all of the `--must` letters
//! and nothing outside `--must` plus `--may`.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use lexicon_scour::{BuildOptions, LexiconBuilder, Scour, Strategy, DEFAULT_MIN_LEN};

/// Filter a word list by required and permitted letters
#[derive(Parser, Debug)]
#[command(name = "scour")]
#[command(version)]
#[command(about = "Filter a word list by required and permitted letters")]
struct Cli {
    /// Use a different dictionary source
    #[arg(long, default_value = "./en_full.txt")]
    file: PathBuf,

    /// List of letters that MUST be in the output
    #[arg(long, default_value = "")]
    must: String,

    /// List of NON-MUST letters that may also be in the output
    #[arg(long, default_value = "")]
    may: String,

    /// Minimum length a word must be to be output
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    size: usize,

    /// Maximum length a word can be to be output (0 for no limit)
    #[arg(long, default_value_t = 0)]
    max: usize,

    /// Presets size=5 max=5
    #[arg(long)]
    wordle: bool,

    /// Skip garbage detection and lose your mind with bad results
    #[arg(long)]
    verbose: bool,

    /// Treat the source as pre-vetted and skip garbage detection
    #[arg(long)]
    clean: bool,

    /// Build on a single thread, keeping dictionary order
    #[arg(long)]
    linear: bool,

    /// Worker threads for the parallel build (default: one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Sort output alphabetically
    #[arg(long)]
    sorted: bool,

    /// Log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    log_level: u8,
}

impl Cli {
    fn build_options(&self) -> BuildOptions {
        let (min_len, max_len) = if self.wordle {
            (lexicon_scour::WORDLE_LEN, lexicon_scour::WORDLE_LEN)
        } else {
            (self.size, self.max)
        };
        let strategy = if self.linear {
            Strategy::Linear
        } else {
            Strategy::Parallel
        };

        BuildOptions::default()
            .with_lengths(min_len, max_len)
            .with_strategy(strategy)
            .with_clean(self.clean)
            .with_verbose(self.verbose)
            .with_threads(self.threads)
    }
}

fn init_logging(level: u8) {
    let default = match level {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(default);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if cli.must.is_empty() && cli.may.is_empty() {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    let scour = Scour::from_letters(&cli.must, &cli.may);
    let builder = LexiconBuilder::new(cli.build_options());
    log::info!(
        "scouring {} ({} build)",
        cli.file.display(),
        builder.options().strategy
    );

    let lexicon = match builder.build_from_path(&cli.file, |p| scour.accepts(p)) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let words: Vec<String> = if cli.sorted {
        lexicon.sorted_displays()
    } else {
        lexicon.into_displays()
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for word in &words {
        if writeln!(out, "{}", word).is_err() {
            // stdout closed (e.g. piped into `head`)
            return ExitCode::SUCCESS;
        }
    }
    let _ = out.flush();

    ExitCode::SUCCESS
}
