//! Negation detection: single negation words, negating morphemes and
//! multi-word negation phrases.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::pos::PosHead;

/// Words that negate a proposition on their own.
const NEGATION_WORDS: &[&str] = &[
    "geeneens", "geenszins", "kwijt", "nergens", "niet", "niets", "nooit", "allerminst",
    "allesbehalve", "amper", "behalve", "contra", "evenmin", "geen", "generlei", "nauwelijks",
    "niemand", "niemendal", "nihil", "niks", "nimmer", "nimmermeer", "noch", "ongeacht",
    "slechts", "tenzij", "ternauwernood", "uitgezonderd", "weinig", "zelden", "zeldzaam",
    "zonder",
];

/// Adverbs that negate only when used adverbially.
const NEGATING_ADVERBS: &[&str] = &["moeilijk", "weg"];

/// First morphemes that negate the rest of the word.
const NEGATION_PREFIXES: &[&str] = &["mis", "de", "non", "on"];

/// Hyphenated prefixes that negate wherever they occur in the word.
const HYPHENATED_PREFIXES: &[&str] = &["mis-", "non-", "niet-", "anti-", "ex-", "on-", "oud-"];

/// Negation phrases spanning two or three tokens.
const NEGATION_PHRASES: &[&str] = &["afgezien van", "zomin als", "met uitzondering van"];

static NEGATION_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATION_WORDS.iter().copied().collect());

static NEGATION_PREFIX_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATION_PREFIXES.iter().copied().collect());

// windows are concatenated without separator, so compare against the
// phrases with their spaces removed
static NEGATION_PHRASE_SET: Lazy<HashSet<String>> =
    Lazy::new(|| NEGATION_PHRASES.iter().map(|p| p.replace(' ', "")).collect());

/// Propositional negation of a single lowercased word.
pub fn is_propositional_negation(lower: &str, head: &PosHead) -> bool {
    NEGATION_WORD_SET.contains(lower)
        || (*head == PosHead::Adverb && NEGATING_ADVERBS.contains(&lower))
}

/// Morphological negation: a negating first morpheme followed by a real
/// second morpheme, or a hyphenated negation prefix anywhere in the word.
pub fn is_morphological_negation(lower: &str, morphemes: &[String]) -> bool {
    if let Some(first) = morphemes.first() {
        let second = morphemes.get(1).map(String::as_str).unwrap_or("");
        if NEGATION_PREFIX_SET.contains(first.as_str()) && !second.is_empty() && second != "en" {
            return true;
        }
    }
    HYPHENATED_PREFIXES.iter().any(|prefix| lower.contains(prefix))
}

/// Count negation phrases over every contiguous 2- and 3-token window of
/// lowercased sentence tokens. Windows may overlap and both window sizes
/// count independently.
pub fn count_phrase_negations(tokens: &[String]) -> usize {
    let mut count = 0;
    for size in [2, 3] {
        count += tokens
            .windows(size)
            .filter(|window| NEGATION_PHRASE_SET.contains(&window.concat()))
            .count();
    }
    count
}
