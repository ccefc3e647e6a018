// tests/tally_normalize.rs
use word_tally::{TallyError, WordCount, WordsStatistics};

mod common;
use common::create_statistics;

#[test]
fn upper_and_lower_case_merge() {
    let mut stats = create_statistics();
    stats.add_word(Some("ABC")).unwrap();
    stats.add_word(Some("abc")).unwrap();
    assert_eq!(stats.get_statistics(), vec![WordCount::new("abc", 2)]);
}

#[test]
fn cyrillic_capital_folds_to_lower() {
    let mut stats = create_statistics();
    stats.add_word(Some("Б")).unwrap();
    assert_eq!(stats.get_statistics(), vec![WordCount::new("б", 1)]);
}

#[test]
fn long_word_merges_with_its_ten_char_prefix() {
    let mut stats = create_statistics();
    stats.add_word(Some("12345678901234567890")).unwrap();
    stats.add_word(Some("1234567890")).unwrap();
    assert_eq!(stats.get_statistics(), vec![WordCount::new("1234567890", 2)]);
}

#[test]
fn eleven_characters_are_cut_to_ten() {
    let mut stats = create_statistics();
    stats.add_word(Some("12345678901")).unwrap();
    assert_eq!(stats.get_statistics(), vec![WordCount::new("1234567890", 1)]);
}

#[test]
fn absent_word_raises_invalid_argument() {
    let mut stats = create_statistics();
    assert_eq!(stats.add_word(None), Err(TallyError::InvalidArgument));
    assert!(stats.get_statistics().is_empty());
}

#[test]
fn empty_string_is_ignored() {
    let mut stats = create_statistics();
    stats.add_word(Some("")).unwrap();
    assert!(stats.get_statistics().is_empty());
}

#[test]
fn spaces_only_are_ignored() {
    let mut stats = create_statistics();
    stats.add_word(Some("  ")).unwrap();
    assert!(stats.get_statistics().is_empty());
}

#[test]
fn tabs_and_newlines_are_ignored() {
    let mut stats = create_statistics();
    stats.add_word(Some("\n\t \n\t")).unwrap();
    assert!(stats.get_statistics().is_empty());
}

#[test]
fn leading_spaces_before_content_are_kept() {
    let mut stats = create_statistics();
    stats.add_word(Some("          123")).unwrap();
    assert_eq!(stats.get_statistics(), vec![WordCount::new("          ", 1)]);
}

#[test]
fn interior_whitespace_is_part_of_the_word() {
    let mut stats = create_statistics();
    stats.add_word(Some("a b")).unwrap();
    assert_eq!(stats.get_statistics(), vec![WordCount::new("a b", 1)]);
}
