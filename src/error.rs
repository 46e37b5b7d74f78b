//! Error types for classification and aggregation.

use layered_lexicon::LexiconError;
use thiserror::Error;

/// Errors that abort the analysis of a document.
///
/// The schema variants mean the upstream annotation contract was broken;
/// they cannot be recovered locally. Missing optional data (no parse, no
/// segmentation, lexicon misses) never produces an error.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// A word does not carry exactly one part-of-speech annotation.
    #[error("word {word:?} doesn't have POS tag info (found {found} annotations)")]
    MissingAnnotation { word: String, found: usize },

    /// A verb carries a form or tense feature outside the tag set.
    #[error("unexpected verb form {form:?} for word {word:?}")]
    UnexpectedVerbForm { word: String, form: String },

    /// A personal pronoun carries a person feature other than 1, 2 or 3.
    #[error("unexpected pronoun person {person:?} for word {word:?}")]
    UnexpectedPerson { word: String, person: String },

    /// A named-entity span has a class label outside the known set.
    #[error("unknown NER class {class:?} for word {word:?}")]
    UnknownEntityClass { word: String, class: String },

    /// A word index past the end of its sentence.
    #[error("sentence {sentence:?} has no word at index {index}")]
    NoSuchWord { sentence: String, index: usize },

    /// Settings or lexicon tables could not be loaded.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// A document could not be read or written as JSON.
    #[error("document serialization failed: {0}")]
    Document(#[from] serde_json::Error),
}

/// Result type for classification and aggregation.
pub type ClassifyResult<T> = Result<T, ClassifyError>;
