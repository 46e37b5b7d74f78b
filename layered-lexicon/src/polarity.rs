//! Polarity lexicon keyed by `word:pos`.

use std::collections::HashMap;

use log::warn;

use crate::loader::parse_number;
use crate::LexicalCategory;

/// Sentiment scores for `word + ":" + {n|a|v}` keys.
#[derive(Debug, Clone, Default)]
pub struct PolarityTable {
    scores: HashMap<String, f64>,
}

impl PolarityTable {
    /// Parse `lemma words pos<TAB>score` lines.
    ///
    /// The key part may contain several space separated words
    /// (`dolce far niente n`); the words are joined without separator and
    /// the last field becomes the part of speech after a colon. Scores
    /// whose magnitude is below `threshold` are stored as zero.
    pub fn parse(content: &str, threshold: f64) -> Self {
        let mut scores = HashMap::new();
        for line in content.lines() {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() != 2 {
                warn!(
                    "skip line: {} (expected 2 values, got {})",
                    line,
                    parts.len()
                );
                continue;
            }
            let Some(score) = parse_number::<f64>(parts[1], line) else {
                continue;
            };
            let words: Vec<&str> = parts[0].split_whitespace().collect();
            let Some((pos, lemma)) = words.split_last().filter(|(_, lemma)| !lemma.is_empty())
            else {
                warn!(
                    "skip line: {} (expected at least 2 values, got {})",
                    line,
                    words.len()
                );
                continue;
            };
            let key = format!("{}:{}", lemma.concat(), pos);
            scores.insert(key, Self::clamp(score, threshold));
        }
        Self { scores }
    }

    fn clamp(score: f64, threshold: f64) -> f64 {
        if score.abs() < threshold {
            0.0
        } else {
            score
        }
    }

    /// Insert a score, zeroing it when it falls below `threshold`.
    pub fn insert(&mut self, word: &str, category: LexicalCategory, score: f64, threshold: f64) {
        self.scores
            .insert(Self::key(word, category), Self::clamp(score, threshold));
    }

    fn key(word: &str, category: LexicalCategory) -> String {
        format!("{}:{}", word, category.polarity_code())
    }

    /// Look up the score of a lowercased word form.
    pub fn score(&self, word: &str, category: LexicalCategory) -> Option<f64> {
        self.scores.get(&Self::key(word, category)).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
