//! Part-of-speech head categories and grammatical classifications.

use std::fmt;

use layered_lexicon::LexicalCategory;

/// Coarse part-of-speech class from the `head` feature of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PosHead {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Article,
    Conjunction,
    Preposition,
    Numeral,
    Interjection,
    /// Special tokens; proper names are marked here with `eigen` in the tag.
    Special,
    Punctuation,
    Other(String),
}

impl PosHead {
    pub fn parse(head: &str) -> Self {
        match head {
            "N" => PosHead::Noun,
            "WW" => PosHead::Verb,
            "ADJ" => PosHead::Adjective,
            "BW" => PosHead::Adverb,
            "VNW" => PosHead::Pronoun,
            "LID" => PosHead::Article,
            "VG" => PosHead::Conjunction,
            "VZ" => PosHead::Preposition,
            "TW" => PosHead::Numeral,
            "TSW" => PosHead::Interjection,
            "SPEC" => PosHead::Special,
            "LET" => PosHead::Punctuation,
            other => PosHead::Other(other.to_string()),
        }
    }

    /// Tag-set code of the head.
    pub fn as_str(&self) -> &str {
        match self {
            PosHead::Noun => "N",
            PosHead::Verb => "WW",
            PosHead::Adjective => "ADJ",
            PosHead::Adverb => "BW",
            PosHead::Pronoun => "VNW",
            PosHead::Article => "LID",
            PosHead::Conjunction => "VG",
            PosHead::Preposition => "VZ",
            PosHead::Numeral => "TW",
            PosHead::Interjection => "TSW",
            PosHead::Special => "SPEC",
            PosHead::Punctuation => "LET",
            PosHead::Other(head) => head,
        }
    }

    /// Lexicon category for polarity and semantic lookups.
    pub fn lexical_category(&self) -> Option<LexicalCategory> {
        match self {
            PosHead::Noun => Some(LexicalCategory::Noun),
            PosHead::Adjective => Some(LexicalCategory::Adjective),
            PosHead::Verb => Some(LexicalCategory::Verb),
            _ => None,
        }
    }
}

impl fmt::Display for PosHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-valued grammatical classification of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordClass {
    Punctuation,
    Name,
    Infinitive,
    PastParticiple,
    PresentParticiple,
    PresentTense,
    PastTense,
    FirstPerson,
    SecondPerson,
    ThirdPerson,
    #[default]
    PlainWord,
}

impl WordClass {
    /// Short English description used in reports.
    pub fn describe(self) -> Option<&'static str> {
        match self {
            WordClass::Name => Some("name"),
            WordClass::Infinitive => Some("infinitive"),
            WordClass::PastParticiple => Some("past participle"),
            WordClass::PresentParticiple => Some("present participle"),
            WordClass::PresentTense => Some("present tense"),
            WordClass::PastTense => Some("past tense"),
            WordClass::FirstPerson => Some("1st person"),
            WordClass::SecondPerson => Some("2nd person"),
            WordClass::ThirdPerson => Some("3rd person"),
            WordClass::Punctuation | WordClass::PlainWord => None,
        }
    }
}
