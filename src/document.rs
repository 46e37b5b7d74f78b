//! Annotated document model.
//!
//! A minimal in-memory rendition of a linguistically annotated document:
//! paragraphs of sentences of words, each word carrying its part-of-speech
//! annotation, lemma and morphological segmentations, each sentence carrying
//! its entity spans and chunks. Every node is also a sink for metric
//! annotations, which is where the analysis writes its results.
//!
//! Documents round-trip through JSON with `serde_json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ClassifyResult;

/// Set name of the metric annotations written by the analysis.
pub const METRIC_SET: &str = "metricset";

/// Private part-of-speech set used for verb construction labels.
pub const PRIVATE_POS_SET: &str = "tscan-set";

/// Provenance set of the named-entity spans the resolver reads.
pub const NER_SET: &str = "http://ilk.uvt.nl/folia/sets/frog-ner-nl";

/// Annotator name recorded in set declarations.
pub const ANNOTATOR: &str = "tscan";

/// A whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub id: String,
    pub stylesheet: Option<String>,
    pub declarations: Vec<Declaration>,
    pub paragraphs: Vec<Paragraph>,
    pub metrics: Vec<Metric>,
}

impl Document {
    pub fn new(id: impl Into<String>, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            id: id.into(),
            paragraphs,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> ClassifyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> ClassifyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Declare an annotation set, once.
    pub fn declare(&mut self, annotation_type: AnnotationType, set: &str, annotator: &str) {
        let exists = self
            .declarations
            .iter()
            .any(|d| d.annotation_type == annotation_type && d.set == set);
        if !exists {
            self.declarations.push(Declaration {
                annotation_type,
                set: set.to_string(),
                annotator: annotator.to_string(),
            });
        }
    }
}

/// Kind of annotation a set declaration covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationType {
    Metric,
    Pos,
}

/// Declaration of an annotation set used in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub annotation_type: AnnotationType,
    pub set: String,
    pub annotator: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    pub id: String,
    pub sentences: Vec<Sentence>,
    pub metrics: Vec<Metric>,
}

impl Paragraph {
    pub fn new(id: impl Into<String>, sentences: Vec<Sentence>) -> Self {
        Self {
            id: id.into(),
            sentences,
            metrics: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sentence {
    pub id: String,
    pub words: Vec<Word>,
    pub entities: Vec<Entity>,
    pub chunks: Vec<Chunk>,
    pub metrics: Vec<Metric>,
}

impl Sentence {
    pub fn new(id: impl Into<String>, words: Vec<Word>) -> Self {
        Self {
            id: id.into(),
            words,
            ..Self::default()
        }
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn with_chunk(mut self, chunk: Chunk) -> Self {
        self.chunks.push(chunk);
        self
    }

    /// Tokenised text: word texts joined by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Entity spans of one provenance set.
    pub fn entities_in<'a>(&'a self, set: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities.iter().filter(move |e| e.set == set)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Word {
    pub id: String,
    pub text: String,
    pub lemma: Option<String>,
    pub pos: Vec<PosAnnotation>,
    pub morphology: Vec<MorphologyLayer>,
    pub metrics: Vec<Metric>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    pub fn with_pos(mut self, pos: PosAnnotation) -> Self {
        self.pos.push(pos);
        self
    }

    /// Add a morphological segmentation layer.
    pub fn with_morphemes(mut self, morphemes: &[&str]) -> Self {
        self.morphology.push(MorphologyLayer {
            morphemes: morphemes.iter().map(|m| m.to_string()).collect(),
        });
        self
    }

    /// Part-of-speech annotations from the tagger, ignoring the private set
    /// this crate writes itself.
    pub fn tagger_pos(&self) -> impl Iterator<Item = &PosAnnotation> {
        self.pos
            .iter()
            .filter(|p| p.set.as_deref() != Some(PRIVATE_POS_SET))
    }

    /// Attach a part-of-speech annotation in the private set, replacing an
    /// earlier one.
    pub fn set_private_pos(&mut self, class: String) {
        self.pos.retain(|p| p.set.as_deref() != Some(PRIVATE_POS_SET));
        self.pos.push(PosAnnotation {
            set: Some(PRIVATE_POS_SET.to_string()),
            class,
            features: BTreeMap::new(),
        });
    }
}

/// One part-of-speech annotation: a tag class plus feature pairs such as
/// `head`, `wvorm`, `pvtijd`, `vwtype`, `case`, `persoon`, `conjtype`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosAnnotation {
    pub set: Option<String>,
    pub class: String,
    pub features: BTreeMap<String, String>,
}

impl PosAnnotation {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }

    pub fn feature(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.features.insert(key.into(), value.into());
        self
    }

    /// Feature value, empty when absent.
    pub fn feat(&self, key: &str) -> &str {
        self.features.get(key).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MorphologyLayer {
    pub morphemes: Vec<String>,
}

/// A named-entity span over sentence-local word indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub set: String,
    pub class: String,
    pub members: Vec<usize>,
}

impl Entity {
    /// An entity in the NER provenance set the resolver reads.
    pub fn ner(class: impl Into<String>, members: Vec<usize>) -> Self {
        Self {
            set: NER_SET.to_string(),
            class: class.into(),
            members,
        }
    }
}

/// A chunk over sentence-local word indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub class: String,
    pub members: Vec<usize>,
}

impl Chunk {
    pub fn new(class: impl Into<String>, members: Vec<usize>) -> Self {
        Self {
            class: class.into(),
            members,
        }
    }
}

/// A classed, valued metric annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub set: String,
    pub class: String,
    pub value: String,
}

/// A document node that accepts metric annotations.
pub trait MetricSink {
    fn metrics(&self) -> &[Metric];

    fn push_metric(&mut self, metric: Metric);

    /// Drop every metric of the given set.
    fn clear_metrics(&mut self, set: &str);

    fn add_metric(&mut self, class: &str, value: String) {
        self.push_metric(Metric {
            set: METRIC_SET.to_string(),
            class: class.to_string(),
            value,
        });
    }

    /// Value of the first metric with the given class.
    fn metric(&self, class: &str) -> Option<&str> {
        self.metrics()
            .iter()
            .find(|m| m.class == class)
            .map(|m| m.value.as_str())
    }
}

macro_rules! impl_metric_sink {
    ($($node:ty),*) => {
        $(
            impl MetricSink for $node {
                fn metrics(&self) -> &[Metric] {
                    &self.metrics
                }

                fn push_metric(&mut self, metric: Metric) {
                    self.metrics.push(metric);
                }

                fn clear_metrics(&mut self, set: &str) {
                    self.metrics.retain(|m| m.set != set);
                }
            }
        )*
    };
}

impl_metric_sink!(Document, Paragraph, Sentence, Word);
