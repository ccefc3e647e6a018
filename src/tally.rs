// src/tally.rs
use std::cmp::Reverse;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::normalize::normalize;

/// One row of a statistics report: a normalized word and its tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self { word: word.into(), count }
    }
}

/// Capability interface for word-frequency accumulators.
///
/// `WordTally` is the in-memory implementation; harnesses and tests drive
/// the trait so alternative backends slot in unchanged.
pub trait WordsStatistics {
    /// Records one occurrence of `word`.
    ///
    /// `None` is rejected with [`TallyError::InvalidArgument`]. Empty and
    /// whitespace-only strings are dropped silently; everything else is
    /// normalized (see [`crate::normalize::normalize`]) and counted.
    fn add_word(&mut self, word: Option<&str>) -> Result<()>;

    /// Materializes the current report: count descending, equal counts in
    /// the order their word was first seen.
    ///
    /// Every call builds a fresh snapshot; later additions never mutate a
    /// previously returned report.
    fn get_statistics(&self) -> Vec<WordCount>;
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    count: usize,
    /// Position in first-seen order; secondary sort key for reports.
    rank: usize,
}

/// Hash-map backed word-frequency tally.
///
/// Adds are amortized O(1); a report is O(n log n) in the number of
/// distinct words. Instances are fully independent and hold no global
/// state.
#[derive(Debug, Default)]
pub struct WordTally {
    counts: HashMap<String, Slot>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct normalized words seen so far.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl WordsStatistics for WordTally {
    fn add_word(&mut self, word: Option<&str>) -> Result<()> {
        let raw = word.ok_or(TallyError::InvalidArgument)?;
        let Some(normalized) = normalize(raw) else {
            return Ok(());
        };

        let rank = self.counts.len();
        match self.counts.entry(normalized) {
            Entry::Occupied(mut slot) => slot.get_mut().count += 1,
            Entry::Vacant(slot) => {
                slot.insert(Slot { count: 1, rank });
            }
        }
        Ok(())
    }

    fn get_statistics(&self) -> Vec<WordCount> {
        let mut rows: Vec<(&String, Slot)> = self.counts.iter().map(|(w, s)| (w, *s)).collect();
        rows.sort_by_key(|&(_, slot)| (Reverse(slot.count), slot.rank));
        rows.into_iter()
            .map(|(word, slot)| WordCount::new(word.clone(), slot.count))
            .collect()
    }
}
