//! Wordlist and cache configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default wordlist location.
pub const DEFAULT_WORDLIST: &str = "common/wordlist.txt";

/// Default cache location.
pub const DEFAULT_CACHE: &str = "datastore/wordlist.cache.db";

/// Default number of words per phrase.
pub const DEFAULT_PHRASE_WORDS: usize = 3;

/// Default phrase size limit: three 256-byte word slots.
pub const DEFAULT_MAX_PHRASE_LEN: usize = 256 * 3;

/// Paths and phrase settings for a wordlist cache.
///
/// ```yaml
/// wordlist: common/wordlist.txt
/// cache: datastore/wordlist.cache.db
/// phrase_words: 3
/// max_phrase_len: 768
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordlistConfig {
    /// Newline-delimited source wordlist
    pub wordlist: PathBuf,
    /// Generated binary cache
    pub cache: PathBuf,
    /// Words drawn per phrase
    pub phrase_words: usize,
    /// Longest phrase accepted, in bytes
    pub max_phrase_len: usize,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
            cache: PathBuf::from(DEFAULT_CACHE),
            phrase_words: DEFAULT_PHRASE_WORDS,
            max_phrase_len: DEFAULT_MAX_PHRASE_LEN,
        }
    }
}

impl WordlistConfig {
    /// Create a config for the given paths with default phrase settings.
    pub fn new(wordlist: impl Into<PathBuf>, cache: impl Into<PathBuf>) -> Self {
        Self {
            wordlist: wordlist.into(),
            cache: cache.into(),
            ..Self::default()
        }
    }

    /// Parse a config from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Reject settings that cannot produce a phrase.
    pub fn validate(&self) -> Result<()> {
        if self.phrase_words == 0 {
            return Err(Error::Config("phrase_words must be at least 1".to_string()));
        }
        Ok(())
    }
}
