//! Plain-text rendering of a stat tree.
//!
//! ```text
//! SENTENCE s.1  hij is niet onwetend
//! ──────────────────────────────────
//! words                 4
//! negations             2  density 0.500  double
//! ...
//!   [niet] BW  negative
//! ```

use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::stats::{StatChild, StatNode};
use crate::word::WordFeatures;

const LABEL_WIDTH: usize = 22;
const INDENT: &str = "  ";

fn na(value: Option<f64>) -> String {
    value.map_or_else(|| "NA".to_string(), |v| format!("{v:.3}"))
}

/// Renders a [`StatNode`] and its descendants.
pub struct StatReport<'a> {
    node: &'a StatNode,
    show_words: bool,
}

impl<'a> StatReport<'a> {
    pub fn new(node: &'a StatNode) -> Self {
        Self {
            node,
            show_words: false,
        }
    }

    /// Also list each word below its sentence.
    pub fn with_words(mut self) -> Self {
        self.show_words = true;
        self
    }

    fn write_node(&self, out: &mut String, node: &StatNode, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);
        let title = match &node.text {
            Some(text) => format!("{} {}  {}", node.level().label(), node.id, text),
            None => format!("{} {}", node.level().label(), node.id),
        };
        writeln!(out, "{pad}{title}")?;
        writeln!(out, "{pad}{}", "─".repeat(UnicodeWidthStr::width(title.as_str())))?;

        let c = &node.counts;
        let line = |out: &mut String, label: &str, count: usize, extra: &str| -> fmt::Result {
            writeln!(
                out,
                "{pad}{label:<LABEL_WIDTH$}{count}  density {}{extra}",
                na(node.density(count))
            )
        };
        writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "words", c.words)?;
        if node.sentence_count > 0 {
            writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "sentences", node.sentence_count)?;
        }
        let double = if node.has_double_negation() { "  double" } else { "" };
        line(out, "negations", c.negations(), double)?;
        line(out, "names", c.names, "")?;
        line(out, "past participles", c.past_participles, "")?;
        line(out, "present participles", c.present_participles, "")?;
        line(out, "infinitives", c.infinitives, "")?;
        line(out, "present tense", c.present_tense, "")?;
        line(out, "past tense", c.past_tense, "")?;
        line(out, "passives", c.passives, "")?;
        line(out, "referring pronouns", c.pronoun_refs, "")?;
        line(out, "archaic forms", c.archaics, "")?;
        line(out, "content words", c.content_words, "")?;
        line(out, "nominalizations", c.nominalizations, "")?;
        line(out, "subordinates", c.subordinates, "")?;
        line(out, "relatives", c.relatives, "")?;
        line(out, "compounds", c.compounds, "")?;

        let heads: Vec<String> = node.heads.iter().map(|(h, n)| format!("{h}[{n}]")).collect();
        writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "heads", heads.join(" "))?;
        if !node.ners.is_empty() {
            let ners: Vec<String> = node.ners.iter().map(|(t, n)| format!("{t}[{n}]")).collect();
            writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "entities", ners.join(" "))?;
        }
        writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "polarity", na(node.polarity))?;
        if let Some(derived) = node.derived() {
            writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "mean frequency", na(derived.mean_frequency))?;
            if derived.type_token_words.is_some() {
                writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "TTW", na(derived.type_token_words))?;
                writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "TTL", na(derived.type_token_lemmas))?;
                writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "rarity", na(derived.rarity))?;
            }
        }
        if let Some(d_level) = node.d_level {
            writeln!(out, "{pad}{:<LABEL_WIDTH$}{}", "D-level", d_level)?;
        }

        for child in node.children() {
            match child {
                StatChild::Stat(stat) => self.write_node(out, stat, depth + 1)?,
                StatChild::Word(word) if self.show_words => {
                    writeln!(out, "{pad}{INDENT}{}", describe_word(word))?
                }
                StatChild::Word(_) => {}
            }
        }
        Ok(())
    }
}

/// One-line summary of a word's classification.
pub fn describe_word(word: &WordFeatures) -> String {
    let mut line = format!("[{}] {}", word.text, word.head);
    if let Some(class) = word.class.describe() {
        line.push_str(&format!(" ({class})"));
    }
    if let Some(form) = &word.verb_form {
        line.push_str(&format!(" ({})", form.label()));
    }
    let flags = [
        (word.is_passive, "passive"),
        (word.is_archaic, "archaic"),
        (word.is_content, "content"),
        (word.is_nominal, "nominalization"),
        (word.is_subordinate, "subordinate"),
        (word.is_relative, "relative"),
        (word.is_prop_neg, "negative"),
        (word.is_morph_neg, "morph-negative"),
    ];
    for (set, label) in flags {
        if set {
            line.push(' ');
            line.push_str(label);
        }
    }
    if let Some(tag) = word.ner {
        line.push_str(&format!(" ner={tag}"));
    }
    if let Some(polarity) = word.polarity {
        line.push_str(&format!(" polarity={polarity:.3}"));
    }
    line
}

impl fmt::Display for StatReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_node(&mut out, self.node, 0)?;
        f.write_str(&out)
    }
}

impl fmt::Display for StatNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&StatReport::new(self), f)
    }
}
