//! Per-word feature classification.
//!
//! [`WordClassifier`] turns one annotated word into a [`WordFeatures`]
//! record. It reads the lexicon and, when available, the sentence parse;
//! it never mutates anything.

use layered_lexicon::{Lexicon, SemanticType};
use unicode_segmentation::UnicodeSegmentation;

use crate::collaborators::{CompoundSegmenter, ParseTree, VerbForm};
use crate::document::{PosAnnotation, Sentence, Word};
use crate::negation::{is_morphological_negation, is_propositional_negation};
use crate::ner::{resolve_ner, NerTag};
use crate::nominal::{is_nominalization, NominalCandidate};
use crate::pos::{PosHead, WordClass};
use crate::{ClassifyError, ClassifyResult};

/// Classification of one word.
///
/// `class` is single valued; the boolean flags are independent and may
/// combine freely.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFeatures {
    pub text: String,
    /// Full tag class, e.g. `N(soort,ev,basis,zijd,stan)`.
    pub pos: String,
    pub head: PosHead,
    pub lemma: Option<String>,
    pub morphemes: Vec<String>,
    /// Verb construction label from the parse.
    pub verb_form: Option<VerbForm>,
    pub class: WordClass,
    pub is_passive: bool,
    pub is_pronoun_ref: bool,
    pub is_archaic: bool,
    pub is_content: bool,
    pub is_nominal: bool,
    pub is_subordinate: bool,
    pub is_relative: bool,
    pub is_prop_neg: bool,
    pub is_morph_neg: bool,
    /// Cumulative frequency band flags, tightest band first.
    pub frequency_bands: [bool; 4],
    /// Raw corpus count, 0 when the word is not in the table.
    pub frequency: u64,
    pub log_frequency: Option<f64>,
    pub polarity: Option<f64>,
    pub semantic_type: SemanticType,
    pub ner: Option<NerTag>,
    pub compound_len: usize,
    /// Length in grapheme clusters.
    pub char_len: usize,
}

impl WordFeatures {
    fn new(text: String, pos: String, head: PosHead, lemma: Option<String>) -> Self {
        let char_len = text.graphemes(true).count();
        Self {
            text,
            pos,
            head,
            lemma,
            morphemes: Vec::new(),
            verb_form: None,
            class: WordClass::PlainWord,
            is_passive: false,
            is_pronoun_ref: false,
            is_archaic: false,
            is_content: false,
            is_nominal: false,
            is_subordinate: false,
            is_relative: false,
            is_prop_neg: false,
            is_morph_neg: false,
            frequency_bands: [false; 4],
            frequency: 0,
            log_frequency: None,
            polarity: None,
            semantic_type: SemanticType::Unfound,
            ner: None,
            compound_len: 0,
            char_len,
        }
    }

    pub fn is_punctuation(&self) -> bool {
        self.class == WordClass::Punctuation
    }

    pub fn is_name(&self) -> bool {
        self.class == WordClass::Name
    }

    pub fn morph_len(&self) -> usize {
        self.morphemes.len()
    }
}

/// Classifies words against a lexicon.
pub struct WordClassifier<'a> {
    lexicon: &'a Lexicon,
    segmenter: Option<&'a dyn CompoundSegmenter>,
}

impl<'a> WordClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            segmenter: None,
        }
    }

    /// Count compound segments, when a decompounder path is configured.
    pub fn with_segmenter(mut self, segmenter: &'a dyn CompoundSegmenter) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    /// Classify the word at `index` in `sentence`.
    ///
    /// Fails when the word violates the annotation contract: not exactly
    /// one part-of-speech annotation, an unknown verb form or pronoun
    /// person, or membership in an entity span of unknown class. An index
    /// past the end of the sentence is an error as well.
    pub fn classify(
        &self,
        sentence: &Sentence,
        index: usize,
        parse: Option<&ParseTree>,
    ) -> ClassifyResult<WordFeatures> {
        let word = sentence
            .words
            .get(index)
            .ok_or_else(|| ClassifyError::NoSuchWord {
                sentence: sentence.id.clone(),
                index,
            })?;
        let pa = single_pos(word)?;
        let head = PosHead::parse(pa.feat("head"));
        let mut features =
            WordFeatures::new(word.text.clone(), pa.class.clone(), head, word.lemma.clone());

        grammatical_class(&mut features, pa)?;

        if features.head == PosHead::Verb {
            if let Some(form) = parse.and_then(|tree| tree.verb_form(index)) {
                features.is_passive = *form == VerbForm::Passive;
                features.verb_form = Some(form.clone());
            }
        }
        features.is_content = match features.head {
            PosHead::Verb => features.verb_form == Some(VerbForm::Main),
            PosHead::Noun | PosHead::Adverb | PosHead::Adjective => true,
            _ => false,
        };

        if features.is_punctuation() {
            return Ok(features);
        }

        features.morphemes = richest_segmentation(word);
        let lower = features.text.to_lowercase();
        features.is_prop_neg = is_propositional_negation(&lower, &features.head);
        features.is_morph_neg = is_morphological_negation(&lower, &features.morphemes);
        features.is_nominal = is_nominalization(
            &NominalCandidate {
                text: &features.text,
                head: &features.head,
                morphemes: &features.morphemes,
                index,
            },
            parse,
        );
        self.lexicon_lookups(&mut features, &lower);
        features.compound_len = self.compound_len(&features.text);
        features.ner = resolve_ner(sentence, index)?;
        Ok(features)
    }

    fn lexicon_lookups(&self, features: &mut WordFeatures, lower: &str) {
        if let Some(category) = features.head.lexical_category() {
            features.polarity = self.lexicon.polarity().score(lower, category);
            if let Some(lemma) = &features.lemma {
                features.semantic_type = self.lexicon.semantics().semantic_type(category, lemma);
            }
        }
        if let Some(entry) = self.lexicon.frequencies().get(lower) {
            features.frequency = entry.count;
            features.log_frequency = entry.log_count();
            features.frequency_bands = entry.band_flags(&self.lexicon.settings().frequency_bands);
        }
    }

    fn compound_len(&self, text: &str) -> usize {
        match (self.segmenter, &self.lexicon.settings().decompounder_path) {
            (Some(segmenter), Some(resources)) => segmenter.segment_count(text, resources),
            _ => 0,
        }
    }
}

fn single_pos(word: &Word) -> ClassifyResult<&PosAnnotation> {
    let annotations: Vec<&PosAnnotation> = word.tagger_pos().collect();
    match annotations.as_slice() {
        [pa] => Ok(*pa),
        other => Err(ClassifyError::MissingAnnotation {
            word: word.text.clone(),
            found: other.len(),
        }),
    }
}

/// Segmentation layer with the most morphemes; the first wins a tie.
fn richest_segmentation(word: &Word) -> Vec<String> {
    let mut best: Option<&Vec<String>> = None;
    for layer in &word.morphology {
        if best.map_or(true, |b| layer.morphemes.len() > b.len()) {
            best = Some(&layer.morphemes);
        }
    }
    best.cloned().unwrap_or_default()
}

/// Set the grammatical class and the flags that depend on the tag features.
fn grammatical_class(features: &mut WordFeatures, pa: &PosAnnotation) -> ClassifyResult<()> {
    let head = features.head.clone();
    features.class = match head {
        PosHead::Punctuation => WordClass::Punctuation,
        PosHead::Special if features.pos.contains("eigen") => WordClass::Name,
        PosHead::Verb => verb_class(&features.text, pa)?,
        PosHead::Pronoun => pronoun_class(features, pa)?,
        PosHead::Article => {
            features.is_archaic = is_archaic_case(pa);
            WordClass::PlainWord
        }
        PosHead::Conjunction => {
            features.is_subordinate = pa.feat("conjtype") == "onder";
            WordClass::PlainWord
        }
        _ => WordClass::PlainWord,
    };
    Ok(())
}

fn verb_class(text: &str, pa: &PosAnnotation) -> ClassifyResult<WordClass> {
    let unexpected = |form: &str| ClassifyError::UnexpectedVerbForm {
        word: text.to_string(),
        form: form.to_string(),
    };
    match pa.feat("wvorm") {
        "inf" => Ok(WordClass::Infinitive),
        "vd" => Ok(WordClass::PastParticiple),
        "od" => Ok(WordClass::PresentParticiple),
        "pv" => match pa.feat("pvtijd") {
            "tgw" => Ok(WordClass::PresentTense),
            "verl" => Ok(WordClass::PastTense),
            tense => Err(unexpected(tense)),
        },
        form => Err(unexpected(form)),
    }
}

fn pronoun_class(features: &mut WordFeatures, pa: &PosAnnotation) -> ClassifyResult<WordClass> {
    let vwtype = pa.feat("vwtype");
    features.is_relative = vwtype == "betr";
    // generic "men" carries no case, person or reference
    if features.text.to_lowercase() == "men" {
        return Ok(WordClass::PlainWord);
    }
    features.is_archaic = is_archaic_case(pa);
    match vwtype {
        "pers" | "refl" | "pr" | "bez" => {
            let person = pa.feat("persoon");
            match person.chars().next() {
                None => Ok(WordClass::PlainWord),
                Some('1') => Ok(WordClass::FirstPerson),
                Some('2') => Ok(WordClass::SecondPerson),
                Some('3') => {
                    features.is_pronoun_ref = vwtype == "pers" || vwtype == "bez";
                    Ok(WordClass::ThirdPerson)
                }
                Some(_) => Err(ClassifyError::UnexpectedPerson {
                    word: features.text.clone(),
                    person: person.to_string(),
                }),
            }
        }
        "aanw" => {
            features.is_pronoun_ref = true;
            Ok(WordClass::PlainWord)
        }
        _ => Ok(WordClass::PlainWord),
    }
}

fn is_archaic_case(pa: &PosAnnotation) -> bool {
    matches!(pa.feat("case"), "gen" | "dat")
}
