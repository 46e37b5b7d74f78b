//! Tab-separated lexicon file parsing.
//!
//! Every table is read line by line. A line that does not have the
//! expected shape is skipped with a warning; only an unreadable file is
//! an error.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::warn;

use crate::{LexiconError, LexiconResult};

/// Read a whole lexicon file.
pub(crate) fn read_table(path: &Path) -> LexiconResult<String> {
    fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `key<TAB>value[,value...]` lines into a map.
///
/// When a key lists several comma separated values the most frequent one
/// wins; on a tie the value that reached the winning count first is kept.
pub(crate) fn parse_category_table(content: &str) -> HashMap<String, String> {
    let mut table = HashMap::new();
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
        let values: Vec<&str> = parts[1].split(',').filter(|v| !v.is_empty()).collect();
        match majority_vote(&values) {
            Some(value) => {
                table.insert(parts[0].to_string(), value.to_string());
            }
            None => warn!("skip line: {} (expected some values, got none)", line),
        }
    }
    table
}

fn majority_vote<'a>(values: &[&'a str]) -> Option<&'a str> {
    let mut stats: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<(&str, usize)> = None;
    for &value in values {
        let count = stats.entry(value).or_insert(0);
        *count += 1;
        if best.map_or(true, |(_, max)| *count > max) {
            best = Some((value, *count));
        }
    }
    best.map(|(value, _)| value)
}

/// Parse a numeric column, warning about the line when it does not parse.
pub(crate) fn parse_number<T: std::str::FromStr>(field: &str, line: &str) -> Option<T> {
    match field.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("skip line: {} (not a number: {:?})", line, field);
            None
        }
    }
}
