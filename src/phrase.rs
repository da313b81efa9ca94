//! Random phrases drawn from a cache file.
//!
//! A phrase is a concatenation of tokens picked uniformly at random, with
//! replacement, e.g. `BrightOtterCanal`. Because tokens are stored with a
//! fixed stride, each pick is a single indexed read.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;

use crate::cache::CacheReader;
use crate::config::WordlistConfig;
use crate::generate::generate_cache_file;
use crate::{Error, Result};

/// Draws random phrases from a [`CacheReader`].
pub struct PhraseGenerator<R: Rng = StdRng> {
    rng: R,
    words: usize,
    max_len: usize,
}

impl PhraseGenerator<StdRng> {
    /// Create a generator seeded from the operating system.
    pub fn new(config: &WordlistConfig) -> Self {
        Self::with_rng(StdRng::from_os_rng(), config)
    }

    /// Create a reproducible generator.
    pub fn from_seed(seed: u64, config: &WordlistConfig) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> PhraseGenerator<R> {
    /// Create a generator over a caller-supplied RNG.
    pub fn with_rng(rng: R, config: &WordlistConfig) -> Self {
        Self {
            rng,
            words: config.phrase_words,
            max_len: config.max_phrase_len,
        }
    }

    /// Draw one phrase.
    pub fn generate(&mut self, cache: &CacheReader) -> Result<String> {
        if cache.is_empty() {
            return Err(Error::EmptyCache);
        }

        let capacity = self
            .words
            .saturating_mul(cache.record_width())
            .min(self.max_len);
        let mut phrase = Vec::with_capacity(capacity);

        for _ in 0..self.words {
            let index = self.rng.random_range(0..cache.len());
            // Index is in range by construction.
            let Some(token) = cache.get(index) else {
                continue;
            };

            // Stop at the first word that would overflow the limit.
            if phrase.len() + token.len() > self.max_len {
                return Err(Error::Config(format!(
                    "phrase of {} words exceeds limit of {} bytes",
                    self.words, self.max_len
                )));
            }
            phrase.extend_from_slice(token);
        }

        Ok(String::from_utf8_lossy(&phrase).into_owned())
    }
}

/// Open the configured cache, generating it from the wordlist if missing.
///
/// Generation is attempted once; if the cache is still missing afterwards
/// the error is returned.
pub fn open_or_generate(config: &WordlistConfig) -> Result<CacheReader> {
    match CacheReader::open(&config.cache) {
        Err(Error::NotFound(_)) => {
            log::warn!(
                "Cache {:?} not found, generating from {:?}",
                config.cache,
                config.wordlist
            );

            if let Some(parent) = config.cache.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }

            generate_cache_file(&config.wordlist, &config.cache)?;
            CacheReader::open(&config.cache)
        }
        other => other,
    }
}
