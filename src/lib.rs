#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Text-complexity metrics over linguistically annotated Dutch documents.
//!
//! Input is a [`Document`] whose words already carry part-of-speech tags,
//! lemmas, morphological segmentations and named-entity spans. Analysis
//! classifies every word into a [`WordFeatures`] record, folds the records
//! into sentence, paragraph and document [`StatNode`]s, and writes the
//! resulting counts and ratios back onto the document as metrics.
//!
//! ```no_run
//! use layered_lexicon::Lexicon;
//! use layered_readability::{Analyzer, Document};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let lexicon = Lexicon::load("tscan.toml".as_ref())?;
//! let mut doc = Document::from_json_str(&std::fs::read_to_string("doc.json")?)?;
//! let stats = Analyzer::new(&lexicon).analyze(&mut doc)?;
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```
//!
//! The syntactic parser and the compound segmenter are external; plug them
//! in through [`SyntaxParser`] and [`CompoundSegmenter`]. Without them the
//! parse-dependent features are simply absent.

mod analyzer;
mod collaborators;
mod document;
mod error;
mod metrics;
mod negation;
mod ner;
mod nominal;
mod pos;
mod report;
mod stats;
mod word;

pub use analyzer::Analyzer;
pub use collaborators::{CompoundSegmenter, NodeId, ParseTree, SyntaxParser, TimeoutParser, VerbForm};
pub use document::{
    AnnotationType, Chunk, Declaration, Document, Entity, Metric, MetricSink, MorphologyLayer,
    Paragraph, PosAnnotation, Sentence, Word, ANNOTATOR, METRIC_SET, NER_SET, PRIVATE_POS_SET,
};
pub use error::{ClassifyError, ClassifyResult};
pub use metrics::{annotate, annotate_word, stat_metrics, word_metrics};
pub use negation::{count_phrase_negations, is_morphological_negation, is_propositional_negation};
pub use ner::{resolve_ner, NerClass, NerPosition, NerTag};
pub use nominal::{is_nominalization, NominalCandidate};
pub use pos::{PosHead, WordClass};
pub use report::{describe_word, StatReport};
pub use stats::{na_add, Derived, FeatureCounts, Level, StatChild, StatNode};
pub use word::{WordClassifier, WordFeatures};
