//! Scalar configuration and the configuration file format.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{LexiconError, LexiconResult};

/// Percentile bands used for the cumulative frequency flags.
pub const DEFAULT_FREQUENCY_BANDS: [f64; 4] = [50.0, 65.0, 77.0, 80.0];

/// Scalar settings that steer classification and aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Ask the injected syntax parser for a per-sentence parse.
    pub use_parser: bool,
    /// Resource directory handed to the compound segmenter. Segmentation
    /// is skipped when unset.
    pub decompounder_path: Option<PathBuf>,
    /// Stylesheet reference copied onto analysed documents.
    pub style_sheet: Option<String>,
    /// A lemma occurring at most this many times in a document is rare.
    pub rarity_level: usize,
    /// Polarity scores with an absolute value below this are stored as zero.
    pub polarity_threshold: f64,
    /// Ascending percentile bounds for the frequency flags.
    pub frequency_bands: [f64; 4],
    /// Lexicon files, relative to the configuration file.
    pub lexicons: LexiconFiles,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_parser: false,
            decompounder_path: None,
            style_sheet: None,
            rarity_level: 5,
            polarity_threshold: 0.01,
            frequency_bands: DEFAULT_FREQUENCY_BANDS,
            lexicons: LexiconFiles::default(),
        }
    }
}

/// Optional lexicon file names from the `[lexicons]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconFiles {
    pub adj_semtypes: Option<PathBuf>,
    pub noun_semtypes: Option<PathBuf>,
    pub verb_semtypes: Option<PathBuf>,
    pub polarity_lex: Option<PathBuf>,
    pub freq_lex: Option<PathBuf>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str, origin: &Path) -> LexiconResult<Self> {
        let settings: Settings = toml::from_str(content).map_err(|e| LexiconError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> LexiconResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Reject values the classifier cannot work with.
    pub fn validate(&self) -> LexiconResult<()> {
        if !(self.polarity_threshold >= 0.0) {
            return Err(LexiconError::InvalidSetting {
                name: "polarity_threshold",
                reason: format!("must be a non-negative number, got {}", self.polarity_threshold),
            });
        }
        let ascending = self
            .frequency_bands
            .windows(2)
            .all(|pair| pair[0] <= pair[1]);
        if !ascending {
            return Err(LexiconError::InvalidSetting {
                name: "frequency_bands",
                reason: format!("must be ascending, got {:?}", self.frequency_bands),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let settings = Settings::from_toml_str("", Path::new("tscan.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.rarity_level, 5);
        assert_eq!(settings.polarity_threshold, 0.01);
        assert!(!settings.use_parser);
    }

    #[test]
    fn parses_full_config() {
        let content = r#"
use_parser = true
decompounder_path = "/opt/decompounder"
style_sheet = "tscanview.xsl"
rarity_level = 3
polarity_threshold = 0.1
frequency_bands = [40.0, 60.0, 70.0, 90.0]

[lexicons]
noun_semtypes = "noun.tsv"
freq_lex = "freq.tsv"
"#;
        let settings = Settings::from_toml_str(content, Path::new("tscan.toml")).unwrap();
        assert!(settings.use_parser);
        assert_eq!(
            settings.decompounder_path.as_deref(),
            Some(Path::new("/opt/decompounder"))
        );
        assert_eq!(settings.style_sheet.as_deref(), Some("tscanview.xsl"));
        assert_eq!(settings.rarity_level, 3);
        assert_eq!(settings.frequency_bands, [40.0, 60.0, 70.0, 90.0]);
        assert_eq!(settings.lexicons.noun_semtypes, Some(PathBuf::from("noun.tsv")));
        assert_eq!(settings.lexicons.adj_semtypes, None);
    }

    #[test]
    fn rejects_descending_bands() {
        let err = Settings::from_toml_str(
            "frequency_bands = [80.0, 77.0, 65.0, 50.0]",
            Path::new("tscan.toml"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LexiconError::InvalidSetting {
                name: "frequency_bands",
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Settings::from_toml_str("useAlpino = true", Path::new("tscan.toml")).unwrap_err();
        assert!(matches!(err, LexiconError::Config { .. }));
    }
}
