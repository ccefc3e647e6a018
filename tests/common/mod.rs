// tests/common/mod.rs
use word_tally::{WordTally, WordsStatistics};

/// Factory driven by the suite so another `WordsStatistics` backend can be
/// swapped in at one place.
pub fn create_statistics() -> impl WordsStatistics {
    WordTally::new()
}
