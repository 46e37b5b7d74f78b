//! Hierarchical statistics.
//!
//! A [`StatNode`] accumulates word features at one [`Level`]. Words fold
//! into sentences, sentences into paragraphs and paragraphs into the
//! document through the same [`StatNode::merge`]. Every child is kept so
//! the tree can be reported afterwards.
//!
//! Numeric values that may be unavailable are `Option`s. Polarity and
//! D-level roll up with [`na_add`]: an absent value never turns a present
//! sum absent, and never counts as zero.

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

use layered_lexicon::SemanticType;

use crate::ner::NerTag;
use crate::pos::WordClass;
use crate::word::WordFeatures;

/// Structural level of a [`StatNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Sentence,
    Paragraph,
    Document,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Sentence => "SENTENCE",
            Level::Paragraph => "PARAGRAPH",
            Level::Document => "DOCUMENT",
        }
    }
}

/// Sum of two possibly absent values.
pub fn na_add<T: Add<Output = T>>(acc: Option<T>, value: Option<T>) -> Option<T> {
    match (acc, value) {
        (Some(a), Some(v)) => Some(a + v),
        (a, None) => a,
        (None, v) => v,
    }
}

fn ratio(numerator: f64, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(numerator / denominator as f64).filter(|r| r.is_finite())
}

/// Summed counters of a node. Every field adds under merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCounts {
    pub words: usize,
    pub names: usize,
    pub infinitives: usize,
    pub past_participles: usize,
    pub present_participles: usize,
    pub present_tense: usize,
    pub past_tense: usize,
    pub first_person: usize,
    pub second_person: usize,
    pub third_person: usize,
    pub passives: usize,
    pub pronoun_refs: usize,
    pub archaics: usize,
    pub content_words: usize,
    pub nominalizations: usize,
    pub subordinates: usize,
    pub relatives: usize,
    /// Single-word plus multi-word propositional negations.
    pub prop_negations: usize,
    pub morph_negations: usize,
    /// Words inside each cumulative frequency band, tightest first.
    pub frequency_bands: [usize; 4],
    pub compounds: usize,
    pub compound_segments: usize,
    pub characters: usize,
    pub characters_no_names: usize,
    pub morphemes: usize,
    pub morphemes_no_names: usize,
    pub frequency_sum: u64,
    pub frequency_sum_no_names: u64,
    /// Sum of the known log-frequencies.
    pub log_frequency_sum: f64,
    pub concrete_strict: usize,
    pub concrete_broad: usize,
    pub abstract_strict: usize,
    pub abstract_broad: usize,
    pub human: usize,
    pub state: usize,
    pub action: usize,
    pub process: usize,
    pub weird: usize,
    pub noun_phrases: usize,
    pub noun_phrase_size: usize,
}

impl FeatureCounts {
    /// Counters contributed by one non-punctuation word.
    pub fn from_word(word: &WordFeatures) -> Self {
        let mut counts = FeatureCounts {
            words: 1,
            ..FeatureCounts::default()
        };
        match word.class {
            WordClass::Name => counts.names = 1,
            WordClass::Infinitive => counts.infinitives = 1,
            WordClass::PastParticiple => counts.past_participles = 1,
            WordClass::PresentParticiple => counts.present_participles = 1,
            WordClass::PresentTense => counts.present_tense = 1,
            WordClass::PastTense => counts.past_tense = 1,
            WordClass::FirstPerson => counts.first_person = 1,
            WordClass::SecondPerson => counts.second_person = 1,
            WordClass::ThirdPerson => counts.third_person = 1,
            WordClass::Punctuation | WordClass::PlainWord => {}
        }
        counts.passives = word.is_passive as usize;
        counts.pronoun_refs = word.is_pronoun_ref as usize;
        counts.archaics = word.is_archaic as usize;
        counts.content_words = word.is_content as usize;
        counts.nominalizations = word.is_nominal as usize;
        counts.subordinates = word.is_subordinate as usize;
        counts.relatives = word.is_relative as usize;
        counts.prop_negations = word.is_prop_neg as usize;
        counts.morph_negations = word.is_morph_neg as usize;
        for (band, &flag) in counts.frequency_bands.iter_mut().zip(&word.frequency_bands) {
            *band = flag as usize;
        }
        if word.compound_len > 0 {
            counts.compounds = 1;
            counts.compound_segments = word.compound_len;
        }

        counts.characters = word.char_len;
        counts.morphemes = word.morph_len();
        counts.frequency_sum = word.frequency;
        counts.log_frequency_sum = word.log_frequency.unwrap_or(0.0);
        if !word.is_name() {
            counts.characters_no_names = word.char_len;
            counts.morphemes_no_names = word.morph_len();
            counts.frequency_sum_no_names = word.frequency;
        }

        match word.semantic_type {
            SemanticType::ConcreteHuman => {
                counts.human = 1;
                counts.concrete_strict = 1;
                counts.concrete_broad = 1;
            }
            SemanticType::Concrete => {
                counts.concrete_strict = 1;
                counts.concrete_broad = 1;
            }
            SemanticType::Abstract => {
                counts.abstract_strict = 1;
                counts.abstract_broad = 1;
            }
            SemanticType::Broad => {
                counts.concrete_broad = 1;
                counts.abstract_broad = 1;
            }
            SemanticType::State => counts.state = 1,
            SemanticType::Action => counts.action = 1,
            SemanticType::Process => counts.process = 1,
            SemanticType::Weird => counts.weird = 1,
            SemanticType::Unfound => {}
        }
        counts
    }

    pub fn negations(&self) -> usize {
        self.prop_negations + self.morph_negations
    }
}

impl AddAssign<&FeatureCounts> for FeatureCounts {
    fn add_assign(&mut self, rhs: &FeatureCounts) {
        self.words += rhs.words;
        self.names += rhs.names;
        self.infinitives += rhs.infinitives;
        self.past_participles += rhs.past_participles;
        self.present_participles += rhs.present_participles;
        self.present_tense += rhs.present_tense;
        self.past_tense += rhs.past_tense;
        self.first_person += rhs.first_person;
        self.second_person += rhs.second_person;
        self.third_person += rhs.third_person;
        self.passives += rhs.passives;
        self.pronoun_refs += rhs.pronoun_refs;
        self.archaics += rhs.archaics;
        self.content_words += rhs.content_words;
        self.nominalizations += rhs.nominalizations;
        self.subordinates += rhs.subordinates;
        self.relatives += rhs.relatives;
        self.prop_negations += rhs.prop_negations;
        self.morph_negations += rhs.morph_negations;
        for (band, other) in self.frequency_bands.iter_mut().zip(&rhs.frequency_bands) {
            *band += other;
        }
        self.compounds += rhs.compounds;
        self.compound_segments += rhs.compound_segments;
        self.characters += rhs.characters;
        self.characters_no_names += rhs.characters_no_names;
        self.morphemes += rhs.morphemes;
        self.morphemes_no_names += rhs.morphemes_no_names;
        self.frequency_sum += rhs.frequency_sum;
        self.frequency_sum_no_names += rhs.frequency_sum_no_names;
        self.log_frequency_sum += rhs.log_frequency_sum;
        self.concrete_strict += rhs.concrete_strict;
        self.concrete_broad += rhs.concrete_broad;
        self.abstract_strict += rhs.abstract_strict;
        self.abstract_broad += rhs.abstract_broad;
        self.human += rhs.human;
        self.state += rhs.state;
        self.action += rhs.action;
        self.process += rhs.process;
        self.weird += rhs.weird;
        self.noun_phrases += rhs.noun_phrases;
        self.noun_phrase_size += rhs.noun_phrase_size;
    }
}

/// Metrics derived once a node has received all its children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Derived {
    /// `ln(frequency_sum / words)`.
    pub mean_frequency: Option<f64>,
    /// `ln(frequency_sum_no_names / (words - names))`.
    pub mean_frequency_no_names: Option<f64>,
    pub type_token_words: Option<f64>,
    pub type_token_lemmas: Option<f64>,
    pub rarity: Option<f64>,
}

impl Derived {
    /// Derived metrics of `node`; ratios and rarity only exist for the
    /// whole document.
    pub fn compute(node: &StatNode, rarity_level: usize) -> Self {
        let counts = &node.counts;
        let mut derived = Derived {
            mean_frequency: ratio(counts.frequency_sum as f64, counts.words)
                .map(f64::ln)
                .filter(|v| v.is_finite()),
            mean_frequency_no_names: ratio(
                counts.frequency_sum_no_names as f64,
                counts.words.saturating_sub(counts.names),
            )
            .map(f64::ln)
            .filter(|v| v.is_finite()),
            ..Derived::default()
        };
        if node.level == Level::Document {
            derived.type_token_words = ratio(node.unique_words.len() as f64, counts.words);
            derived.type_token_lemmas = ratio(node.unique_lemmas.len() as f64, counts.words);
            derived.rarity = node.rarity(rarity_level);
        }
        derived
    }
}

/// A child kept for reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum StatChild {
    Word(WordFeatures),
    Stat(StatNode),
}

/// Accumulated statistics of a sentence, paragraph or document.
#[derive(Debug, Clone, PartialEq)]
pub struct StatNode {
    level: Level,
    pub id: String,
    /// Tokenised text, for sentences.
    pub text: Option<String>,
    pub counts: FeatureCounts,
    pub polarity: Option<f64>,
    pub d_level: Option<u32>,
    /// Sentences below this node; 0 for a sentence.
    pub sentence_count: usize,
    /// Occurrences per part-of-speech head code.
    pub heads: BTreeMap<String, usize>,
    /// Occurrences per lowercased word form.
    pub unique_words: BTreeMap<String, usize>,
    pub unique_lemmas: BTreeMap<String, usize>,
    /// Begin tags only, so a multi-word entity counts once.
    pub ners: BTreeMap<NerTag, usize>,
    children: Vec<StatChild>,
    derived: Option<Derived>,
}

impl StatNode {
    pub fn new(level: Level, id: impl Into<String>) -> Self {
        Self {
            level,
            id: id.into(),
            text: None,
            counts: FeatureCounts::default(),
            polarity: None,
            d_level: None,
            sentence_count: 0,
            heads: BTreeMap::new(),
            unique_words: BTreeMap::new(),
            unique_lemmas: BTreeMap::new(),
            ners: BTreeMap::new(),
            children: Vec::new(),
            derived: None,
        }
    }

    pub fn sentence(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(Level::Sentence, id)
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn children(&self) -> &[StatChild] {
        &self.children
    }

    /// Child stat nodes, skipping words.
    pub fn stat_children(&self) -> impl Iterator<Item = &StatNode> {
        self.children.iter().filter_map(|child| match child {
            StatChild::Stat(node) => Some(node),
            StatChild::Word(_) => None,
        })
    }

    /// Fold one word into this node. Punctuation is dropped.
    pub fn add_word(&mut self, word: WordFeatures) {
        if word.is_punctuation() {
            return;
        }
        self.counts += &FeatureCounts::from_word(&word);
        self.polarity = na_add(self.polarity, word.polarity);
        *self.heads.entry(word.head.as_str().to_string()).or_default() += 1;
        *self.unique_words.entry(word.text.to_lowercase()).or_default() += 1;
        if let Some(lemma) = &word.lemma {
            *self.unique_lemmas.entry(lemma.clone()).or_default() += 1;
        }
        if let Some(tag) = word.ner.filter(NerTag::is_begin) {
            *self.ners.entry(tag).or_default() += 1;
        }
        self.children.push(StatChild::Word(word));
    }

    /// Fold a finished child node into this one, keeping the child.
    pub fn merge(&mut self, child: StatNode) {
        self.counts += &child.counts;
        self.polarity = na_add(self.polarity, child.polarity);
        // a zero D-level is reported on its sentence but never folded upwards
        self.d_level = na_add(self.d_level, child.d_level.filter(|&level| level > 0));
        self.sentence_count += match child.level {
            Level::Sentence => 1,
            _ => child.sentence_count,
        };
        accumulate(&mut self.heads, &child.heads);
        accumulate(&mut self.unique_words, &child.unique_words);
        accumulate(&mut self.unique_lemmas, &child.unique_lemmas);
        accumulate(&mut self.ners, &child.ners);
        self.children.push(StatChild::Stat(child));
    }

    /// Multi-word negations found over the sentence tokens.
    pub fn add_phrase_negations(&mut self, count: usize) {
        self.counts.prop_negations += count;
    }

    /// Noun-phrase chunk count and total member size.
    pub fn set_noun_phrases(&mut self, count: usize, size: usize) {
        self.counts.noun_phrases = count;
        self.counts.noun_phrase_size = size;
    }

    /// Compute derived metrics. Later calls keep the first result.
    pub fn finalize(&mut self, rarity_level: usize) {
        if self.derived.is_none() {
            self.derived = Some(Derived::compute(self, rarity_level));
        }
    }

    pub fn derived(&self) -> Option<&Derived> {
        self.derived.as_ref()
    }

    /// `count / words`, absent for an empty node.
    pub fn density(&self, count: usize) -> Option<f64> {
        ratio(count as f64, self.counts.words)
    }

    /// Fraction of distinct lemmas occurring at most `level` times.
    pub fn rarity(&self, level: usize) -> Option<f64> {
        let rare = self
            .unique_lemmas
            .values()
            .filter(|&&count| count <= level)
            .count();
        ratio(rare as f64, self.unique_lemmas.len())
    }

    pub fn has_double_negation(&self) -> bool {
        self.counts.negations() > 1
    }
}

fn accumulate<K: Ord + Clone>(into: &mut BTreeMap<K, usize>, from: &BTreeMap<K, usize>) {
    for (key, count) in from {
        *into.entry(key.clone()).or_default() += count;
    }
}
