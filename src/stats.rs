// File: src/stats.rs
use crate::core::collaborators::UsageRecorder;
use crate::core::types::WordClass;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

/// Word frequencies per class, the serialisable part of a `FrequencyLog`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTables {
    pub unknown: HashMap<String, u64>,
    pub foreign: HashMap<String, u64>,
}

impl FrequencyTables {
    fn table_mut(&mut self, class: WordClass) -> &mut HashMap<String, u64> {
        match class {
            WordClass::Unknown => &mut self.unknown,
            WordClass::Foreign => &mut self.foreign,
        }
    }

    pub fn table(&self, class: WordClass) -> &HashMap<String, u64> {
        match class {
            WordClass::Unknown => &self.unknown,
            WordClass::Foreign => &self.foreign,
        }
    }
}

/// Counts how often words fall through to the letter-to-sound rules or are
/// read as English. Owned by the host; the phonemiser only calls `record`.
#[derive(Debug, Default)]
pub struct FrequencyLog {
    tables: Mutex<FrequencyTables>,
}

impl FrequencyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tables(tables: FrequencyTables) -> Self {
        Self { tables: Mutex::new(tables) }
    }

    fn lock(&self) -> MutexGuard<'_, FrequencyTables> {
        // Counters stay usable even if a recording thread panicked.
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> FrequencyTables {
        self.lock().clone()
    }

    pub fn count(&self, word: &str, class: WordClass) -> u64 {
        self.lock().table(class).get(word).copied().unwrap_or(0)
    }

    /// One `"<freq> <word>"` line per word, least frequent first.
    pub fn report(&self, class: WordClass) -> Vec<String> {
        let tables = self.lock();
        let mut by_freq: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
        for (word, freq) in tables.table(class) {
            by_freq.entry(*freq).or_default().push(word);
        }

        let mut lines = Vec::new();
        for (freq, mut words) in by_freq {
            words.sort_unstable();
            lines.extend(words.into_iter().map(|w| format!("{freq} {w}")));
        }
        lines
    }
}

impl UsageRecorder for FrequencyLog {
    fn record(&self, word: &str, class: WordClass) {
        *self.lock().table_mut(class).entry(word.to_string()).or_insert(0) += 1;
    }
}
