//! Word Lists
//!
//! The vocabulary phrases are drawn from. A `WordList` is validated once at
//! construction and immutable afterwards; it is passed explicitly to every
//! generator call instead of living in a global.

use std::fs;
use std::path::Path;

use bip39::Language;

use crate::error::CoreResult;

use super::{MnemonicError, MnemonicResult};

/// Ordered, immutable candidate vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list, rejecting empty entries
    pub fn new<I, S>(words: I) -> MnemonicResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if let Some(pos) = words.iter().position(|w| w.is_empty()) {
            return Err(MnemonicError::EmptyWordListEntry(pos + 1));
        }
        Ok(Self { words })
    }

    /// The 2048-word BIP39 English list
    pub fn bip39_english() -> Self {
        Self {
            words: Language::English
                .word_list()
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        }
    }

    /// Parse one word per line; blank lines and `#` comments are skipped
    pub fn parse(text: &str) -> MnemonicResult<Self> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Load a word list file (see [`WordList::parse`] for the format)
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text)?)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
