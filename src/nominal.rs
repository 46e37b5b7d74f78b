//! Nominalization detection.

use crate::collaborators::ParseTree;
use crate::pos::PosHead;

/// Final morphemes that turn a stem into a noun.
const NOMINAL_SUFFIX_MORPHEMES: &[&str] = &[
    "ing", "sel", "(e)nis", "heid", "te", "schap", "dom", "sie", "iek", "iteit", "age", "esse",
    "name",
];

/// Word endings of borrowed nominalizations.
const NOMINAL_ENDINGS: &[&str] = &["ose", "ase", "ese", "isme", "sie", "tie"];

/// Inputs the nominalization rules look at.
pub struct NominalCandidate<'a> {
    pub text: &'a str,
    pub head: &'a PosHead,
    pub morphemes: &'a [String],
    /// Sentence-local word index, used against the parse tree.
    pub index: usize,
}

/// A noun with a nominalizing final morpheme, a word with a nominal ending,
/// or, when a parse is available, a verbal node inside a noun phrase.
pub fn is_nominalization(candidate: &NominalCandidate<'_>, parse: Option<&ParseTree>) -> bool {
    if *candidate.head == PosHead::Noun && candidate.morphemes.len() > 1 {
        if let Some(last) = candidate.morphemes.last() {
            if NOMINAL_SUFFIX_MORPHEMES.contains(&last.as_str()) {
                return true;
            }
        }
    }
    if NOMINAL_ENDINGS
        .iter()
        .any(|ending| candidate.text.ends_with(ending))
    {
        return true;
    }
    parse.map_or(false, |tree| tree.is_verbal_in_noun_phrase(candidate.index))
}
