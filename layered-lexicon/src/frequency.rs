//! Word frequency table.

use std::collections::HashMap;

use log::warn;

use crate::loader::parse_number;

/// Corpus frequency data for one lowercased word form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyEntry {
    /// Raw corpus count.
    pub count: u64,
    /// Cumulative frequency percentile of the word form.
    pub percentile: f64,
}

impl FrequencyEntry {
    pub fn new(count: u64, percentile: f64) -> Self {
        Self { count, percentile }
    }

    /// Natural log of the raw count, absent for a zero count.
    pub fn log_count(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some((self.count as f64).ln())
        }
    }

    /// Cumulative band flags: `flags[i]` holds when the percentile is at
    /// most `bands[i]`. With ascending bands a tighter flag implies every
    /// looser one.
    pub fn band_flags(&self, bands: &[f64; 4]) -> [bool; 4] {
        let mut flags = [false; 4];
        for (flag, bound) in flags.iter_mut().zip(bands) {
            *flag = self.percentile <= *bound;
        }
        flags
    }
}

/// Lowercased word form to frequency data.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: HashMap<String, FrequencyEntry>,
}

impl FrequencyTable {
    /// Parse `word<TAB>count<TAB>...<TAB>percentile` lines.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for line in content.lines() {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() != 4 {
                warn!(
                    "skip line: {} (expected 4 values, got {})",
                    line,
                    parts.len()
                );
                continue;
            }
            let (Some(count), Some(percentile)) = (
                parse_number::<u64>(parts[1], line),
                parse_number::<f64>(parts[3], line),
            ) else {
                continue;
            };
            entries.insert(parts[0].to_string(), FrequencyEntry::new(count, percentile));
        }
        Self { entries }
    }

    pub fn insert(&mut self, word: impl Into<String>, entry: FrequencyEntry) {
        self.entries.insert(word.into(), entry);
    }

    /// Look up a word form; the caller lowercases.
    pub fn get(&self, word: &str) -> Option<&FrequencyEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
