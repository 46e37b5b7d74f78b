//! Semantic category tables and their coarse type folding.

use std::collections::HashMap;

use crate::loader::parse_category_table;

/// Coarse part of speech a lexicon entry is keyed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalCategory {
    Noun,
    Adjective,
    Verb,
}

impl LexicalCategory {
    /// Part-of-speech suffix used in polarity keys.
    pub fn polarity_code(self) -> &'static str {
        match self {
            LexicalCategory::Noun => "n",
            LexicalCategory::Adjective => "a",
            LexicalCategory::Verb => "v",
        }
    }
}

/// Coarse semantic type of a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SemanticType {
    /// The lemma is not in the table for its part of speech.
    #[default]
    Unfound,
    Concrete,
    ConcreteHuman,
    Abstract,
    Broad,
    State,
    Action,
    Process,
    Weird,
}

impl SemanticType {
    /// Fold a fine-grained category into a coarse type for the given
    /// part of speech.
    pub fn fold(category: LexicalCategory, fine: &str) -> Self {
        match category {
            LexicalCategory::Noun => match fine {
                "human" => SemanticType::ConcreteHuman,
                "concrother" | "substance" | "artefact" | "nonhuman" => SemanticType::Concrete,
                "dynamic" | "nondynamic" => SemanticType::Abstract,
                _ => SemanticType::Broad,
            },
            LexicalCategory::Adjective => match fine {
                "phyper" | "stuff" | "colour" => SemanticType::Concrete,
                "abstract" => SemanticType::Abstract,
                _ => SemanticType::Broad,
            },
            LexicalCategory::Verb => match fine {
                "state" => SemanticType::State,
                "action" => SemanticType::Action,
                "process" => SemanticType::Process,
                _ => SemanticType::Weird,
            },
        }
    }
}

/// Lemma to fine category tables, one per part of speech.
#[derive(Debug, Clone, Default)]
pub struct SemanticTables {
    nouns: HashMap<String, String>,
    adjectives: HashMap<String, String>,
    verbs: HashMap<String, String>,
}

impl SemanticTables {
    fn table(&self, category: LexicalCategory) -> &HashMap<String, String> {
        match category {
            LexicalCategory::Noun => &self.nouns,
            LexicalCategory::Adjective => &self.adjectives,
            LexicalCategory::Verb => &self.verbs,
        }
    }

    fn table_mut(&mut self, category: LexicalCategory) -> &mut HashMap<String, String> {
        match category {
            LexicalCategory::Noun => &mut self.nouns,
            LexicalCategory::Adjective => &mut self.adjectives,
            LexicalCategory::Verb => &mut self.verbs,
        }
    }

    /// Replace the table for `category` with parsed file content.
    pub fn load_table(&mut self, category: LexicalCategory, content: &str) {
        *self.table_mut(category) = parse_category_table(content);
    }

    pub fn insert(
        &mut self,
        category: LexicalCategory,
        lemma: impl Into<String>,
        fine: impl Into<String>,
    ) {
        self.table_mut(category).insert(lemma.into(), fine.into());
    }

    /// Fine category recorded for a lemma.
    pub fn category(&self, category: LexicalCategory, lemma: &str) -> Option<&str> {
        self.table(category).get(lemma).map(String::as_str)
    }

    /// Coarse semantic type of a lemma; `Unfound` when unmapped.
    pub fn semantic_type(&self, category: LexicalCategory, lemma: &str) -> SemanticType {
        self.category(category, lemma)
            .map(|fine| SemanticType::fold(category, fine))
            .unwrap_or_default()
    }

    pub fn len(&self, category: LexicalCategory) -> usize {
        self.table(category).len()
    }
}
