use std::io::{self, BufReader, Read, Write};

use lexicon_scour::{
    accept_all, BuildOptions, LexiconBuilder, LexiconError, PhrasePool, Scour, Strategy,
};

const WORDS: &str = "\
# sample word list
zebra
apple 12 annotated
mango

Kiwi
aaardvark
banana\tfruit
eat
teeter
seated
haha1
";

fn options(min_len: usize, max_len: usize, strategy: Strategy) -> BuildOptions {
    BuildOptions::default()
        .with_lengths(min_len, max_len)
        .with_strategy(strategy)
}

fn displays(strategy: Strategy, min_len: usize, max_len: usize) -> Vec<String> {
    LexiconBuilder::new(options(min_len, max_len, strategy))
        .build_from_bytes(WORDS.as_bytes(), accept_all)
        .unwrap()
        .into_displays()
}

#[test]
fn test_linear_preserves_input_order() {
    let lexicon = LexiconBuilder::new(options(5, 0, Strategy::Linear))
        .build_from_bytes(b"zebra\napple\nmango\n", accept_all)
        .unwrap();
    assert_eq!(lexicon.into_displays(), vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_linear_full_pipeline() {
    assert_eq!(
        displays(Strategy::Linear, 3, 0),
        vec!["zebra", "apple", "mango", "kiwi", "banana", "eat", "teeter", "seated"]
    );
}

#[test]
fn test_parallel_matches_linear_as_set() {
    for (min_len, max_len) in [(1, 0), (3, 5), (5, 5), (6, 0)] {
        let mut linear = displays(Strategy::Linear, min_len, max_len);
        let mut parallel = displays(Strategy::Parallel, min_len, max_len);
        linear.sort();
        parallel.sort();
        assert_eq!(linear, parallel, "bounds {}..={}", min_len, max_len);
    }
}

#[test]
fn test_length_bounds_inclusive() {
    let words = b"planet\nplane\nplanets\n";

    let min6 = LexiconBuilder::new(options(6, 0, Strategy::Linear))
        .build_from_bytes(words, accept_all)
        .unwrap();
    assert_eq!(min6.into_displays(), vec!["planet", "planets"]);

    let max5 = LexiconBuilder::new(options(1, 5, Strategy::Linear))
        .build_from_bytes(words, accept_all)
        .unwrap();
    assert_eq!(max5.into_displays(), vec!["plane"]);
}

#[test]
fn test_wordle_preset() {
    let lexicon = LexiconBuilder::new(BuildOptions::wordle().with_strategy(Strategy::Linear))
        .build_from_bytes(WORDS.as_bytes(), accept_all)
        .unwrap();
    assert_eq!(lexicon.into_displays(), vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_comments_and_blanks_never_included() {
    let input = b"#comment\n\n#another\n  \nreal\n\r\n";
    for strategy in [Strategy::Linear, Strategy::Parallel] {
        let (lexicon, stats) = LexiconBuilder::new(options(0, 0, strategy))
            .build_with_stats(&input[..], accept_all)
            .unwrap();
        assert_eq!(lexicon.into_displays(), vec!["real"]);
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.skipped, 5);
    }
}

#[test]
fn test_crlf_lines() {
    let lexicon = LexiconBuilder::new(options(1, 0, Strategy::Linear))
        .build_from_bytes(b"alpha\r\nbeta\r\n", accept_all)
        .unwrap();
    assert_eq!(lexicon.into_displays(), vec!["alpha", "beta"]);
}

#[test]
fn test_garbage_skipped_unless_verbose_or_clean() {
    let input = b"hello\nhmmm\nword2\n";

    let filtered = LexiconBuilder::new(options(1, 0, Strategy::Linear))
        .build_from_bytes(input, accept_all)
        .unwrap();
    assert_eq!(filtered.into_displays(), vec!["hello"]);

    let verbose = LexiconBuilder::new(options(1, 0, Strategy::Linear).with_verbose(true))
        .build_from_bytes(input, accept_all)
        .unwrap();
    assert_eq!(verbose.into_displays(), vec!["hello", "hmmm", "word2"]);

    let clean = LexiconBuilder::new(options(1, 0, Strategy::Linear).with_clean(true))
        .build_from_bytes(input, accept_all)
        .unwrap();
    assert_eq!(clean.len(), 3);

    let embedded = LexiconBuilder::new(options(1, 0, Strategy::Linear))
        .build_from_embedded(input, accept_all)
        .unwrap();
    assert_eq!(embedded.len(), 3);
}

#[test]
fn test_scour_filter() {
    let scour = Scour::from_letters("e", "at");
    for strategy in [Strategy::Linear, Strategy::Parallel] {
        let lexicon = LexiconBuilder::new(options(3, 0, strategy))
            .build_from_bytes(b"ate\nsea\ntab\neat\ntea\ntaut\n", |p| scour.accepts(p))
            .unwrap();
        assert_eq!(lexicon.sorted_displays(), vec!["ate", "eat", "tea"]);
    }
}

#[test]
fn test_rejected_phrases_return_to_pool() {
    let pool = PhrasePool::new();
    let builder = LexiconBuilder::with_pool(options(1, 0, Strategy::Linear), &pool);
    let scour = Scour::from_letters("z", "");

    let (lexicon, stats) = builder
        .build_with_stats(&b"zz\napple\nmango\nzebra\n"[..], |p| scour.accepts(p))
        .unwrap();

    assert_eq!(lexicon.into_displays(), vec!["zz"]);
    assert_eq!(stats.rejected, 3);
    assert_eq!(stats.accepted, 1);
    assert_eq!(pool.allocated(), 2);
    assert_eq!(pool.idle(), 1);
}

#[test]
fn test_stats() {
    let (_, stats) = LexiconBuilder::new(options(4, 6, Strategy::Parallel))
        .build_with_stats(WORDS.as_bytes(), accept_all)
        .unwrap();

    assert_eq!(stats.lines, 12);
    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.out_of_range, 2);
    assert_eq!(stats.garbage, 1);
    assert_eq!(stats.rejected, 0);
    assert_eq!(stats.accepted, 7);
}

#[test]
fn test_dedicated_thread_pool() {
    let mut expected = displays(Strategy::Linear, 3, 0);
    expected.sort();

    let lexicon = LexiconBuilder::new(options(3, 0, Strategy::Parallel).with_threads(Some(2)))
        .build_from_bytes(WORDS.as_bytes(), accept_all)
        .unwrap();
    assert_eq!(lexicon.sorted_displays(), expected);
}

#[test]
fn test_idempotent_builds() {
    for strategy in [Strategy::Linear, Strategy::Parallel] {
        let first = LexiconBuilder::new(options(3, 0, strategy))
            .build_from_bytes(WORDS.as_bytes(), accept_all)
            .unwrap();
        let second = LexiconBuilder::new(options(3, 0, strategy))
            .build_from_bytes(WORDS.as_bytes(), accept_all)
            .unwrap();
        assert_eq!(first.sorted_displays(), second.sorted_displays());
    }
}

#[test]
fn test_malformed_lines_skipped() {
    let input = b"valid\n\xff\xfebroken\nother\n";
    let (lexicon, stats) = LexiconBuilder::new(options(1, 0, Strategy::Linear))
        .build_with_stats(&input[..], accept_all)
        .unwrap();
    assert_eq!(lexicon.into_displays(), vec!["valid", "other"]);
    assert_eq!(stats.malformed, 1);
}

#[test]
fn test_build_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WORDS.as_bytes()).unwrap();
    file.flush().unwrap();

    let lexicon = LexiconBuilder::new(options(3, 0, Strategy::Linear))
        .build_from_path(file.path(), accept_all)
        .unwrap();
    assert_eq!(lexicon.into_displays(), displays(Strategy::Linear, 3, 0));
}

#[test]
fn test_missing_source_is_an_error() {
    let err = LexiconBuilder::new(BuildOptions::default())
        .build_from_path("/definitely/not/here/words.txt", accept_all)
        .unwrap_err();
    assert!(matches!(err, LexiconError::Open { .. }));
    assert!(err.to_string().contains("words.txt"));
}

struct FailingReader {
    served: bool,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served {
            return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        }
        self.served = true;
        let data = b"alpha\nbravo\n";
        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

#[test]
fn test_read_error_aborts_build() {
    for strategy in [Strategy::Linear, Strategy::Parallel] {
        let reader = BufReader::new(FailingReader { served: false });
        let result = LexiconBuilder::new(options(1, 0, strategy)).build(reader, accept_all);
        assert!(matches!(result, Err(LexiconError::Read(_))));
    }
}

#[test]
fn test_empty_source() {
    for strategy in [Strategy::Linear, Strategy::Parallel] {
        let lexicon = LexiconBuilder::new(options(1, 0, strategy))
            .build_from_bytes(b"", accept_all)
            .unwrap();
        assert!(lexicon.is_empty());
    }
}

#[test]
fn test_strategy_parse() {
    assert_eq!("linear".parse::<Strategy>(), Ok(Strategy::Linear));
    assert_eq!("Parallel".parse::<Strategy>(), Ok(Strategy::Parallel));
    assert_eq!("standard".parse::<Strategy>(), Ok(Strategy::Parallel));
    assert!("sideways".parse::<Strategy>().is_err());
    assert_eq!(Strategy::Linear.to_string(), "linear");
}
