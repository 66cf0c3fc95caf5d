//! Phrase Generation
//!
//! Picks 12 distinct starting letters with a partial Fisher-Yates shuffle,
//! then one word per letter uniformly from that letter's bucket.
//!
//! SECURITY: the public entry point draws from `OsRng`. Callers supplying
//! their own generator must pass a `CryptoRng`.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::{log_debug, log_error};

use super::{
    check_phrase, LetterIndex, Mnemonic, MnemonicError, MnemonicResult, WordList,
    MIN_WORD_LIST_LEN, PHRASE_LENGTH,
};

const MODULE: &str = "mnemonic::generator";

/// Generate a phrase using the operating system RNG
pub fn generate_mnemonic(word_list: &WordList) -> MnemonicResult<Mnemonic> {
    generate_with_rng(word_list, &mut OsRng)
}

/// Generate a phrase from a caller-supplied cryptographic RNG
pub fn generate_with_rng<R>(word_list: &WordList, rng: &mut R) -> MnemonicResult<Mnemonic>
where
    R: Rng + CryptoRng + ?Sized,
{
    if word_list.len() < MIN_WORD_LIST_LEN {
        return Err(MnemonicError::InsufficientWordList {
            actual: word_list.len(),
            required: MIN_WORD_LIST_LEN,
        });
    }

    let index = LetterIndex::build(word_list);
    if index.letter_count() < PHRASE_LENGTH {
        return Err(MnemonicError::InsufficientLetterDiversity {
            actual: index.letter_count(),
            required: PHRASE_LENGTH,
        });
    }

    log_debug!(
        MODULE,
        "Generating mnemonic",
        list_len = word_list.len(),
        initials = index.letter_count(),
    );

    let mut letters = index.letters();
    let (selected, _) = letters.partial_shuffle(rng, PHRASE_LENGTH);

    let mut words = Vec::with_capacity(PHRASE_LENGTH);
    for letter in selected.iter() {
        if let Some(bucket) = index.bucket(*letter) {
            let word = bucket[rng.gen_range(0..bucket.len())];
            words.push(word.to_string());
        }
    }

    self_check(&words)?;

    log_debug!(MODULE, "Mnemonic generated", count = words.len());
    Ok(Mnemonic::new(words))
}

/// A failure here is a generator bug, never bad input
fn self_check(words: &[String]) -> MnemonicResult<()> {
    check_phrase(words).map_err(|e| {
        log_error!(MODULE, "Generated mnemonic failed validation", reason = e);
        MnemonicError::GeneratorDefect(Box::new(e))
    })
}
