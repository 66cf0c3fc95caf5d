//! Mnemonic Module
//!
//! Generates and validates 12-word recovery phrases in which every word is
//! unique and every word starts with a different letter.
//!
//! # Entry points
//! - [`generate`]: draw a fresh phrase from a [`WordList`]
//! - [`validate`]: check any candidate phrase against the contract
//! - [`test_batch`]: run the generator N times and report failures
//!
//! # Usage
//! ```rust,ignore
//! use mnemonic_core::mnemonic::{self, WordList};
//!
//! let words = WordList::bip39_english();
//! let result = mnemonic::generate(&words);
//! assert!(result.is_valid);
//! assert!(mnemonic::validate(result.mnemonic.words()).is_valid);
//! ```

mod batch;
mod generator;
mod import;
mod letters;
mod phrase;
mod validator;
mod word_list;


pub use batch::*;
pub use generator::*;
pub use import::*;
pub use letters::*;
pub use phrase::*;
pub use validator::*;
pub use word_list::*;

use thiserror::Error;

use crate::error::ErrorCode;
use crate::types::{BatchReport, GenerationResult, ValidationResult};

/// Number of words in a generated or validated phrase
pub const PHRASE_LENGTH: usize = 12;

/// Smallest word list the generator accepts
pub const MIN_WORD_LIST_LEN: usize = 26;

/// Word count of the extended import path, exempt from the letter contract
pub const EXTENDED_PHRASE_LENGTH: usize = 24;

/// Mnemonic module errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Word list must contain at least {required} words, got {actual}")]
    InsufficientWordList { actual: usize, required: usize },

    #[error("Word list must have words starting with at least {required} different letters, got {actual}")]
    InsufficientLetterDiversity { actual: usize, required: usize },

    #[error("Word list entry at position {0} is empty")]
    EmptyWordListEntry(usize),

    #[error("Mnemonic must have exactly 12 words, got {0}")]
    WrongLength(usize),

    #[error("Word at position {0} is empty")]
    EmptyWord(usize),

    #[error("Duplicate word found: \"{0}\"")]
    DuplicateWord(String),

    #[error("Duplicate starting letter \"{letter}\" found (word: \"{word}\")")]
    DuplicateStartingLetter { letter: char, word: String },

    #[error("Please enter a mnemonic phrase")]
    EmptyPhrase,

    #[error("Mnemonic must be 12 or 24 words, got {0}")]
    UnsupportedWordCount(usize),

    #[error("Generated mnemonic failed its own validation: {0}")]
    GeneratorDefect(Box<MnemonicError>),
}

impl MnemonicError {
    /// Stable code for the presentation layer
    pub fn code(&self) -> ErrorCode {
        match self {
            MnemonicError::InsufficientWordList { .. } => ErrorCode::InsufficientWordList,
            MnemonicError::InsufficientLetterDiversity { .. } => {
                ErrorCode::InsufficientLetterDiversity
            }
            MnemonicError::EmptyWordListEntry(_) => ErrorCode::InvalidWordList,
            MnemonicError::WrongLength(_) => ErrorCode::WrongLength,
            MnemonicError::EmptyWord(_) => ErrorCode::EmptyWord,
            MnemonicError::DuplicateWord(_) => ErrorCode::DuplicateWord,
            MnemonicError::DuplicateStartingLetter { .. } => ErrorCode::DuplicateStartingLetter,
            MnemonicError::EmptyPhrase => ErrorCode::EmptyPhrase,
            MnemonicError::UnsupportedWordCount(_) => ErrorCode::UnsupportedWordCount,
            MnemonicError::GeneratorDefect(_) => ErrorCode::GeneratorDefect,
        }
    }

    /// True when the word list itself can never satisfy the contract,
    /// so re-drawing is pointless.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            MnemonicError::InsufficientWordList { .. }
                | MnemonicError::InsufficientLetterDiversity { .. }
                | MnemonicError::EmptyWordListEntry(_)
        )
    }
}

pub type MnemonicResult<T> = Result<T, MnemonicError>;

/// Generate a phrase from the OS random source
pub fn generate(word_list: &WordList) -> GenerationResult {
    generate_mnemonic(word_list).into()
}

/// Validate a candidate phrase of any length
pub fn validate<S: AsRef<str>>(words: &[S]) -> ValidationResult {
    check_phrase(words).into()
}

/// Run the generator `trials` times in sequence
pub fn test_batch(word_list: &WordList, trials: usize) -> BatchReport {
    BatchRunner::new(word_list).trials(trials).run()
}
