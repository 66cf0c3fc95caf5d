//! Mnemonic Core Library
//!
//! Recovery-phrase generator and validator for the wallet setup flow.
//!
//! # Architecture
//!
//! This crate provides:
//! - **mnemonic**: word lists, generation, validation, import, batch self-test
//! - **config**: runtime settings and environment overrides
//! - **ffi**: C-ABI exports for the UI bridge
//! - **utils**: redacting structured logger
//!
//! # Contract
//!
//! A phrase is exactly 12 words, no word repeats, and no two words share a
//! first letter (compared case-insensitively). Generation always re-checks
//! its own output against this contract before returning.
//!
//! # Security
//!
//! Phrases are drawn from the operating system CSPRNG. `Mnemonic` zeroizes
//! its words on drop and never prints them through `Debug` or the logger.
//! Key derivation from an accepted phrase is out of scope.
//!
//! # Example
//!
//! ```rust,ignore
//! use mnemonic_core::{generate, validate, test_batch, WordList};
//!
//! let words = WordList::bip39_english();
//! let result = generate(&words);
//! println!("Mnemonic: {}", result.mnemonic.to_phrase().as_str());
//! assert!(validate(result.mnemonic.words()).is_valid);
//! assert!(test_batch(&words, 100).success);
//! ```

pub mod config;
pub mod error;
pub mod ffi;
pub mod mnemonic;
pub mod types;
pub mod utils;

pub use config::CoreSettings;
pub use error::{CoreError, CoreResult, ErrorCode};
pub use types::*;

pub use mnemonic::{
    generate, import_phrase, test_batch, validate, BatchRunner, CancelFlag, ImportedPhrase,
    Mnemonic, MnemonicError, MnemonicResult, WordList,
};

pub use ffi::{
    mnemonic_free_string, mnemonic_generate, mnemonic_import, mnemonic_test_batch,
    mnemonic_validate,
};
