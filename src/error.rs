//! Unified error types for Mnemonic Core
//!
//! Domain failures live in [`crate::mnemonic::MnemonicError`]; this module
//! wraps them (and IO/JSON failures) into one FFI-safe envelope.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::mnemonic::MnemonicError;

/// Error envelope returned across the CLI and FFI boundaries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl CoreError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidConfig, msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, msg)
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for CoreError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Word list errors
    InsufficientWordList,
    InsufficientLetterDiversity,
    InvalidWordList,

    // Phrase validation errors
    WrongLength,
    EmptyWord,
    DuplicateWord,
    DuplicateStartingLetter,

    // Import errors
    EmptyPhrase,
    UnsupportedWordCount,

    // Generator self-check
    GeneratorDefect,

    // Boundary errors
    InvalidInput,
    InvalidConfig,
    ParseError,
    JsonError,
    IoError,

    // Internal
    Internal,
}

/// Result type alias for boundary operations
pub type CoreResult<T> = Result<T, CoreError>;

impl From<MnemonicError> for CoreError {
    fn from(e: MnemonicError) -> Self {
        CoreError::new(e.code(), e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::new(ErrorCode::IoError, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_details() {
        let err = CoreError::invalid_input("bad request").with_details("missing field");
        assert_eq!(err.to_string(), "[InvalidInput] bad request (missing field)");
    }

    #[test]
    fn test_from_mnemonic_error_keeps_code() {
        let err: CoreError = MnemonicError::WrongLength(3).into();
        assert_eq!(err.code, ErrorCode::WrongLength);
        assert_eq!(err.message, "Mnemonic must have exactly 12 words, got 3");
    }

    #[test]
    fn test_error_code_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorCode::DuplicateStartingLetter).unwrap();
        assert_eq!(json, "\"duplicate_starting_letter\"");
    }
}
