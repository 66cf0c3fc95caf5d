//! Core Settings
//!
//! Presets for the batch self-test and logging, with environment overrides:
//! - `MNEMONIC_CORE_BATCH_TRIALS`
//! - `MNEMONIC_CORE_PARALLEL`
//! - `MNEMONIC_CORE_CHUNK_SIZE`
//! - `MNEMONIC_CORE_DEBUG`
//! - `MNEMONIC_CORE_WORDLIST`

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::mnemonic::{BatchRunner, WordList, DEFAULT_CHUNK_SIZE};

pub const ENV_BATCH_TRIALS: &str = "MNEMONIC_CORE_BATCH_TRIALS";
pub const ENV_PARALLEL: &str = "MNEMONIC_CORE_PARALLEL";
pub const ENV_CHUNK_SIZE: &str = "MNEMONIC_CORE_CHUNK_SIZE";
pub const ENV_DEBUG: &str = "MNEMONIC_CORE_DEBUG";
pub const ENV_WORDLIST: &str = "MNEMONIC_CORE_WORDLIST";

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreSettings {
    /// Trials run by the on-demand self-test
    pub batch_trials: usize,
    /// Run self-test trials on the rayon pool
    pub parallel_batch: bool,
    /// Trials per parallel chunk (cancellation granularity)
    pub batch_chunk_size: usize,
    /// Emit debug log lines
    pub debug_logging: bool,
    /// Word list file; the built-in BIP39 English list when unset
    pub word_list_path: Option<PathBuf>,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self::standard()
    }
}

impl CoreSettings {
    /// Interactive preset: 100 sequential trials
    pub fn standard() -> Self {
        Self {
            batch_trials: 100,
            parallel_batch: false,
            batch_chunk_size: DEFAULT_CHUNK_SIZE,
            debug_logging: false,
            word_list_path: None,
        }
    }

    /// Regression preset: 10 000 trials on all cores
    pub fn thorough() -> Self {
        Self {
            batch_trials: 10_000,
            parallel_batch: true,
            batch_chunk_size: 256,
            debug_logging: false,
            word_list_path: None,
        }
    }

    /// Standard preset overlaid with environment variables
    pub fn from_env() -> CoreResult<Self> {
        Self::standard().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup (environment, test map)
    pub fn with_overrides<F>(mut self, lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_BATCH_TRIALS) {
            self.batch_trials = parse_value(ENV_BATCH_TRIALS, &v)?;
        }
        if let Some(v) = lookup(ENV_PARALLEL) {
            self.parallel_batch = parse_flag(ENV_PARALLEL, &v)?;
        }
        if let Some(v) = lookup(ENV_CHUNK_SIZE) {
            self.batch_chunk_size = parse_value(ENV_CHUNK_SIZE, &v)?;
        }
        if let Some(v) = lookup(ENV_DEBUG) {
            self.debug_logging = parse_flag(ENV_DEBUG, &v)?;
        }
        if let Some(v) = lookup(ENV_WORDLIST) {
            let trimmed = v.trim();
            self.word_list_path = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
        }
        Ok(self)
    }

    /// Validate settings consistency
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.batch_trials == 0 {
            warnings.push("Warning: Self-test configured with zero trials".to_string());
        }

        if self.batch_chunk_size == 0 {
            warnings.push("Warning: Chunk size of zero is treated as one".to_string());
        }

        if self.parallel_batch && self.batch_chunk_size > self.batch_trials {
            warnings.push(
                "Warning: Chunk size exceeds trial count; cancellation only before start"
                    .to_string(),
            );
        }

        warnings
    }

    /// Load the configured word list, or the built-in BIP39 English list
    pub fn load_word_list(&self) -> CoreResult<WordList> {
        match &self.word_list_path {
            Some(path) => WordList::load(path).map_err(|e| {
                e.with_details(format!("word list path: {}", path.display()))
            }),
            None => Ok(WordList::bip39_english()),
        }
    }

    /// Batch runner over `word_list` using these settings
    pub fn batch_runner<'a>(&self, word_list: &'a WordList) -> BatchRunner<'a> {
        BatchRunner::new(word_list)
            .trials(self.batch_trials)
            .parallel(self.parallel_batch)
            .chunk_size(self.batch_chunk_size)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> CoreResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CoreError::invalid_config(format!("{} has invalid value: {:?}", key, value)))
}

fn parse_flag(key: &str, value: &str) -> CoreResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(CoreError::invalid_config(format!(
            "{} must be a boolean, got {:?}",
            key, value
        ))),
    }
}
