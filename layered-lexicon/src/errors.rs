//! Error types for lexicon loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading settings or lexicon tables.
///
/// Malformed individual lines are not errors: they are skipped with a
/// warning. Only a file that cannot be read at all, or an invalid
/// configuration, aborts loading.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A configured file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A setting has a value outside its allowed range.
    #[error("invalid value for '{name}': {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;
