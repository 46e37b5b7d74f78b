#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Read-only lexicons for readability analysis.
//!
//! A [`Lexicon`] bundles the scalar [`Settings`] with the frequency,
//! polarity and semantic-type tables. It is built once, before any
//! document is processed, and only read afterwards, so it can be shared
//! by reference between threads without locking.
//!
//! ## Usage
//!
//! ```ignore
//! use layered_lexicon::{LexicalCategory, Lexicon};
//!
//! let lexicon = Lexicon::load("tscan.toml".as_ref())?;
//! let score = lexicon.polarity().score("mooi", LexicalCategory::Adjective);
//! ```

mod errors;
mod frequency;
mod loader;
mod polarity;
mod semantic;
mod settings;

use std::path::Path;

use log::info;

pub use errors::{LexiconError, LexiconResult};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use polarity::PolarityTable;
pub use semantic::{LexicalCategory, SemanticTables, SemanticType};
pub use settings::{LexiconFiles, Settings, DEFAULT_FREQUENCY_BANDS};

/// Immutable process-lifetime lexicon store.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    settings: Settings,
    frequencies: FrequencyTable,
    polarity: PolarityTable,
    semantics: SemanticTables,
}

impl Lexicon {
    /// Load the configuration file and every lexicon it names.
    ///
    /// Lexicon paths are resolved against the configuration file's
    /// directory. A named file that cannot be read aborts loading.
    pub fn load(config_path: &Path) -> LexiconResult<Self> {
        let settings = Settings::load(config_path)?;
        let base = config_path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_settings(settings, base)
    }

    /// Load the lexicons named in `settings`, relative to `base`.
    pub fn from_settings(settings: Settings, base: &Path) -> LexiconResult<Self> {
        settings.validate()?;
        let files = settings.lexicons.clone();
        let mut builder = LexiconBuilder::new(settings);

        let semantic_files = [
            (LexicalCategory::Adjective, &files.adj_semtypes),
            (LexicalCategory::Noun, &files.noun_semtypes),
            (LexicalCategory::Verb, &files.verb_semtypes),
        ];
        for (category, file) in semantic_files {
            if let Some(file) = file {
                let content = loader::read_table(&base.join(file))?;
                builder.lexicon.semantics.load_table(category, &content);
                info!(
                    "loaded {} {:?} semantic entries from {}",
                    builder.lexicon.semantics.len(category),
                    category,
                    file.display()
                );
            }
        }
        if let Some(file) = &files.polarity_lex {
            let content = loader::read_table(&base.join(file))?;
            let threshold = builder.lexicon.settings.polarity_threshold;
            builder.lexicon.polarity = PolarityTable::parse(&content, threshold);
            info!(
                "loaded {} polarity entries from {}",
                builder.lexicon.polarity.len(),
                file.display()
            );
        }
        if let Some(file) = &files.freq_lex {
            let content = loader::read_table(&base.join(file))?;
            builder.lexicon.frequencies = FrequencyTable::parse(&content);
            info!(
                "loaded {} frequency entries from {}",
                builder.lexicon.frequencies.len(),
                file.display()
            );
        }
        Ok(builder.build())
    }

    /// Start an in-memory lexicon.
    pub fn builder(settings: Settings) -> LexiconBuilder {
        LexiconBuilder::new(settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn polarity(&self) -> &PolarityTable {
        &self.polarity
    }

    pub fn semantics(&self) -> &SemanticTables {
        &self.semantics
    }
}

/// Builder for lexicons assembled in code rather than loaded from files.
#[derive(Debug, Clone)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            lexicon: Lexicon {
                settings,
                ..Lexicon::default()
            },
        }
    }

    pub fn frequency(mut self, word: &str, count: u64, percentile: f64) -> Self {
        self.lexicon
            .frequencies
            .insert(word, FrequencyEntry::new(count, percentile));
        self
    }

    /// Add a polarity score, applying the configured threshold.
    pub fn polarity(mut self, word: &str, category: LexicalCategory, score: f64) -> Self {
        let threshold = self.lexicon.settings.polarity_threshold;
        self.lexicon
            .polarity
            .insert(word, category, score, threshold);
        self
    }

    pub fn semantic(mut self, category: LexicalCategory, lemma: &str, fine: &str) -> Self {
        self.lexicon.semantics.insert(category, lemma, fine);
        self
    }

    pub fn build(self) -> Lexicon {
        self.lexicon
    }
}
