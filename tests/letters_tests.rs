use lexicon_scour::letters::index_letter;
use lexicon_scour::{letter_index, FrequencyVector, ALPHABET_LEN};

#[test]
fn test_letter_index_covers_alphabet() {
    let slots: Vec<usize> = (b'a'..=b'z').filter_map(letter_index).collect();
    assert_eq!(slots, (0..ALPHABET_LEN).collect::<Vec<_>>());
}

#[test]
fn test_letter_index_rejects_non_letters() {
    for b in [b'A', b'Z', b'0', b' ', b'#', b'{', b'`', 0xC3] {
        assert_eq!(letter_index(b), None, "byte {:#x}", b);
    }
}

#[test]
fn test_index_letter_round_trip() {
    for slot in 0..ALPHABET_LEN {
        let letter = index_letter(slot).unwrap();
        assert_eq!(letter_index(letter), Some(slot));
    }
    assert_eq!(index_letter(ALPHABET_LEN), None);
}

#[test]
fn test_true_counts() {
    let v = FrequencyVector::count("banana");
    assert_eq!(v.get(b'a'), 3);
    assert_eq!(v.get(b'n'), 2);
    assert_eq!(v.get(b'b'), 1);
    assert_eq!(v.get(b'z'), 0);
    assert_eq!(v.total(), 6);
}

#[test]
fn test_zero_iff_absent() {
    let v = FrequencyVector::from("puzzle");
    for letter in b'a'..=b'z' {
        assert_eq!(v.contains(letter), b"puzzle".contains(&letter));
    }
}

#[test]
fn test_fill_overwrites_previous_counts() {
    let mut v = FrequencyVector::count("zzz");
    v.fill("abc");
    assert_eq!(v.get(b'z'), 0);
    assert_eq!(v.total(), 3);

    v.clear();
    assert!(v.is_zero());
}

#[test]
fn test_non_letters_ignored() {
    let v = FrequencyVector::count("a-b 1c");
    assert_eq!(v.total(), 3);
    assert_eq!(v.slot(ALPHABET_LEN), 0);
}
