//! FFI Layer for Mnemonic Core
//!
//! All C-ABI exports are defined here. All functions follow a consistent
//! pattern:
//! - Input: JSON string (null-terminated C string)
//! - Output: JSON string (must be freed with `mnemonic_free_string`)
//!
//! Generate and batch requests may carry `"wordList": [...]`; without it
//! the built-in BIP39 English list is used. Domain failures (a bad phrase, a too-small
//! word list) come back inside `data` with `isValid: false`;
//! `success: false` is reserved for malformed requests.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CoreError;
use crate::mnemonic::{self, WordList};
use crate::types::*;

// =============================================================================
// Memory Management
// =============================================================================

/// Free a string returned by any mnemonic_* function
///
/// # Safety
/// The pointer must have been returned by a mnemonic_* function
#[unsafe(no_mangle)]
pub extern "C" fn mnemonic_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(s);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert C string to Rust string, returning error JSON if invalid.
/// A null pointer is treated as an empty request.
fn parse_input<'a>(input: *const c_char) -> Result<&'a str, *mut c_char> {
    if input.is_null() {
        return Ok("");
    }

    let c_str = unsafe { CStr::from_ptr(input) };
    c_str
        .to_str()
        .map_err(|_| error_response(CoreError::invalid_input("Invalid UTF-8 string")))
}

/// Parse a JSON request; empty input parses as `{}`
fn parse_request<T: DeserializeOwned>(input: *const c_char) -> Result<T, *mut c_char> {
    let json_str = parse_input(input)?;
    let json_str = if json_str.trim().is_empty() { "{}" } else { json_str };
    serde_json::from_str(json_str)
        .map_err(|e| error_response(CoreError::parse_error(format!("Invalid JSON: {}", e))))
}

/// Resolve the request's word list, defaulting to BIP39 English
fn resolve_word_list(words: Option<Vec<String>>) -> Result<WordList, *mut c_char> {
    match words {
        Some(words) => WordList::new(words).map_err(|e| error_response(e.into())),
        None => Ok(WordList::bip39_english()),
    }
}

/// Create a success response JSON string
fn success_response<T: serde::Serialize>(data: T) -> *mut c_char {
    let response = ApiResponse::ok(data);
    string_to_ptr(response.to_json())
}

/// Create an error response JSON string
fn error_response(error: CoreError) -> *mut c_char {
    let response: ApiResponse<()> = ApiResponse::err(error);
    string_to_ptr(response.to_json())
}

/// Convert Rust string to C string pointer
fn string_to_ptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => {
            const FALLBACK: &[u8] =
                b"{\"success\":false,\"error\":{\"code\":\"internal\",\"message\":\"String conversion failed\"}}\0";
            CStr::from_bytes_with_nul(FALLBACK)
                .map(|c| c.to_owned().into_raw())
                .unwrap_or(std::ptr::null_mut())
        }
    }
}

// =============================================================================
// Mnemonic Operations
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    word_list: Option<Vec<String>>,
}

/// Generate a 12-word phrase with unique words and starting letters
///
/// # Input
/// `{}` or `{ "wordList": ["apple", ...] }`
///
/// # Output
/// ```json
/// { "success": true, "data": { "mnemonic": ["..."], "isValid": true } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemonic_generate(input: *const c_char) -> *mut c_char {
    let request: GenerateRequest = match parse_request(input) {
        Ok(r) => r,
        Err(ptr) => return ptr,
    };
    let word_list = match resolve_word_list(request.word_list) {
        Ok(w) => w,
        Err(ptr) => return ptr,
    };

    success_response(mnemonic::generate(&word_list))
}

#[derive(Deserialize)]
struct ValidateRequest {
    words: Option<Vec<String>>,
    phrase: Option<String>,
}

/// Validate a 12-word phrase against the uniqueness contract
///
/// # Input
/// `{ "words": ["w1", ...] }` or `{ "phrase": "w1 w2 ..." }`
///
/// # Output
/// ```json
/// { "success": true, "data": { "isValid": false, "error": "...", "errorCode": "duplicate_word" } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemonic_validate(input: *const c_char) -> *mut c_char {
    let request: ValidateRequest = match parse_request(input) {
        Ok(r) => r,
        Err(ptr) => return ptr,
    };

    let words = match (request.words, request.phrase) {
        (Some(words), _) => words,
        (None, Some(phrase)) => phrase.split_whitespace().map(str::to_string).collect(),
        (None, None) => {
            return error_response(CoreError::invalid_input(
                "Request must contain \"words\" or \"phrase\"",
            ))
        }
    };

    success_response(mnemonic::validate(&words))
}

#[derive(Deserialize)]
struct ImportRequest {
    phrase: String,
}

/// Import a user-typed 12- or 24-word phrase
///
/// # Input
/// `{ "phrase": "w1 w2 ..." }`
///
/// # Output
/// ```json
/// { "success": true, "data": { "accepted": true, "wordCount": 12, "contractChecked": true } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemonic_import(input: *const c_char) -> *mut c_char {
    let request: ImportRequest = match parse_request(input) {
        Ok(r) => r,
        Err(ptr) => return ptr,
    };

    let result: ImportResult = mnemonic::import_phrase(&request.phrase).into();
    success_response(result)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestBatchRequest {
    count: usize,
    #[serde(default)]
    parallel: bool,
    word_list: Option<Vec<String>>,
}

/// Run the generator `count` times and report failures
///
/// # Input
/// `{ "count": 100, "parallel": false }`
///
/// # Output
/// ```json
/// { "success": true, "data": { "success": true, "totalGenerated": 100, "errors": [], "cancelled": false } }
/// ```
#[unsafe(no_mangle)]
pub extern "C" fn mnemonic_test_batch(input: *const c_char) -> *mut c_char {
    let request: TestBatchRequest = match parse_request(input) {
        Ok(r) => r,
        Err(ptr) => return ptr,
    };
    if request.count == 0 {
        return error_response(CoreError::invalid_input("count must be a positive integer"));
    }
    let word_list = match resolve_word_list(request.word_list) {
        Ok(w) => w,
        Err(ptr) => return ptr,
    };

    let report = mnemonic::BatchRunner::new(&word_list)
        .trials(request.count)
        .parallel(request.parallel)
        .run();
    success_response(report)
}
