//! Shared types for Mnemonic Core
//!
//! Result structures handed to the presentation layer. They serialize in
//! camelCase (`isValid`, `totalGenerated`) for the UI bridge.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::mnemonic::{ImportedPhrase, Mnemonic, MnemonicResult};

// =============================================================================
// Generation / Validation Results
// =============================================================================

/// Outcome of one generator call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Generated words (empty when a precondition failed)
    pub mnemonic: Mnemonic,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
}

impl From<MnemonicResult<Mnemonic>> for GenerationResult {
    fn from(result: MnemonicResult<Mnemonic>) -> Self {
        match result {
            Ok(mnemonic) => Self {
                mnemonic,
                is_valid: true,
                error: None,
                error_code: None,
            },
            Err(e) => Self {
                mnemonic: Mnemonic::default(),
                is_valid: false,
                error: Some(e.to_string()),
                error_code: Some(e.code()),
            },
        }
    }
}

/// Outcome of one validator call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
            error_code: None,
        }
    }
}

impl From<MnemonicResult<()>> for ValidationResult {
    fn from(result: MnemonicResult<()>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(e) => Self {
                is_valid: false,
                error: Some(e.to_string()),
                error_code: Some(e.code()),
            },
        }
    }
}

/// Outcome of a batch self-test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub success: bool,
    /// Trials actually attempted
    pub total_generated: usize,
    /// `Generation <i> failed: <error>` in trial order
    pub errors: Vec<String>,
    /// Set when the run stopped early on request
    #[serde(default)]
    pub cancelled: bool,
}

impl BatchReport {
    /// Number of failed trials
    pub fn failure_count(&self) -> usize {
        self.errors.len()
    }
}

// =============================================================================
// Import Result
// =============================================================================

/// Outcome of importing a user-typed phrase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub accepted: bool,
    pub word_count: usize,
    /// Whether the unique-letter contract was checked (12-word phrases only)
    pub contract_checked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
}

impl From<MnemonicResult<ImportedPhrase>> for ImportResult {
    fn from(result: MnemonicResult<ImportedPhrase>) -> Self {
        match result {
            Ok(imported) => Self {
                accepted: true,
                word_count: imported.mnemonic().len(),
                contract_checked: imported.is_constrained(),
                error: None,
                error_code: None,
            },
            Err(e) => Self {
                accepted: false,
                word_count: 0,
                contract_checked: false,
                error: Some(e.to_string()),
                error_code: Some(e.code()),
            },
        }
    }
}

// =============================================================================
// FFI Response Envelope
// =============================================================================

/// Standard response wrapper for FFI calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<crate::error::CoreError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: crate::error::CoreError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"code":"internal","message":"Serialization failed"}}"#.to_string()
        })
    }
}
