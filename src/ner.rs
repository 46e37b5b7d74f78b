//! Named-entity tag resolution for single words.

use std::fmt;

use crate::document::{Sentence, NER_SET};
use crate::{ClassifyError, ClassifyResult};

/// Entity class of a named-entity span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NerClass {
    Loc,
    Eve,
    Org,
    Misc,
    Per,
    Pro,
}

impl NerClass {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "loc" => Some(NerClass::Loc),
            "eve" => Some(NerClass::Eve),
            "org" => Some(NerClass::Org),
            "misc" => Some(NerClass::Misc),
            "per" => Some(NerClass::Per),
            "pro" => Some(NerClass::Pro),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NerClass::Loc => "LOC",
            NerClass::Eve => "EVE",
            NerClass::Org => "ORG",
            NerClass::Misc => "MISC",
            NerClass::Per => "PER",
            NerClass::Pro => "PRO",
        }
    }
}

/// Whether a word opens an entity span or continues it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NerPosition {
    Begin,
    Inside,
}

/// Begin/inside entity tag of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NerTag {
    pub class: NerClass,
    pub position: NerPosition,
}

impl NerTag {
    pub fn begin(class: NerClass) -> Self {
        Self {
            class,
            position: NerPosition::Begin,
        }
    }

    pub fn inside(class: NerClass) -> Self {
        Self {
            class,
            position: NerPosition::Inside,
        }
    }

    pub fn is_begin(&self) -> bool {
        self.position == NerPosition::Begin
    }
}

impl fmt::Display for NerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class.as_str())
    }
}

/// Tag of the word at `index` in `sentence`, `None` when it is in no span.
///
/// Only spans of the NER provenance set count. When spans overlap the last
/// one containing the word decides. A class label outside the known set is
/// a schema violation, but only for spans that contain the word.
pub fn resolve_ner(sentence: &Sentence, index: usize) -> ClassifyResult<Option<NerTag>> {
    let mut result = None;
    for entity in sentence.entities_in(NER_SET) {
        let Some(offset) = entity.members.iter().position(|&m| m == index) else {
            continue;
        };
        let class = NerClass::parse(&entity.class).ok_or_else(|| {
            ClassifyError::UnknownEntityClass {
                word: sentence
                    .words
                    .get(index)
                    .map(|w| w.text.clone())
                    .unwrap_or_default(),
                class: entity.class.clone(),
            }
        })?;
        result = Some(if offset == 0 {
            NerTag::begin(class)
        } else {
            NerTag::inside(class)
        });
    }
    Ok(result)
}
