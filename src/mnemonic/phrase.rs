//! Mnemonic Phrase
//!
//! SECURITY: words are zeroized on drop and never printed by `Debug`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{check_phrase, MnemonicError};

/// An ordered recovery phrase
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl Mnemonic {
    /// Wrap words without checking the contract
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Space-separated phrase, cleared when the returned value drops
    pub fn to_phrase(&self) -> Zeroizing<String> {
        Zeroizing::new(self.words.join(" "))
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic([REDACTED; {} words])", self.words.len())
    }
}

/// Parses a whitespace-separated 12-word phrase and enforces the contract
impl FromStr for Mnemonic {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<String> = s.split_whitespace().map(str::to_string).collect();
        check_phrase(&words)?;
        Ok(Self { words })
    }
}
