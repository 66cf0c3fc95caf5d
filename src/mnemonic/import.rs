//! Phrase Import
//!
//! Accepts a user-typed phrase for wallet recovery. 12-word phrases must
//! satisfy the unique-letter contract; 24-word phrases are outside it and
//! pass through unchecked.

use super::{check_phrase, Mnemonic, MnemonicError, MnemonicResult};
use super::{EXTENDED_PHRASE_LENGTH, PHRASE_LENGTH};

/// A phrase accepted by [`import_phrase`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportedPhrase {
    /// 12 words, checked against the contract
    Constrained(Mnemonic),
    /// 24 words, not checked
    Extended(Mnemonic),
}

impl ImportedPhrase {
    pub fn mnemonic(&self) -> &Mnemonic {
        match self {
            ImportedPhrase::Constrained(m) | ImportedPhrase::Extended(m) => m,
        }
    }

    pub fn is_constrained(&self) -> bool {
        matches!(self, ImportedPhrase::Constrained(_))
    }
}

/// Split, count and (for 12 words) validate an imported phrase
pub fn import_phrase(text: &str) -> MnemonicResult<ImportedPhrase> {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();

    match words.len() {
        0 => Err(MnemonicError::EmptyPhrase),
        PHRASE_LENGTH => {
            check_phrase(&words)?;
            Ok(ImportedPhrase::Constrained(Mnemonic::new(words)))
        }
        EXTENDED_PHRASE_LENGTH => Ok(ImportedPhrase::Extended(Mnemonic::new(words))),
        n => Err(MnemonicError::UnsupportedWordCount(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_twelve_words() {
        let imported = import_phrase(
            "  apple banana cherry date\teagle fig grape hotel igloo jolly kiwi lemon\n",
        )
        .unwrap();
        assert!(imported.is_constrained());
        assert_eq!(imported.mnemonic().words()[4], "eagle");
    }

    #[test]
    fn test_import_rejects_letter_clash() {
        let err = import_phrase("cat car dog eel fox gnu hen ibis jay kit lynx mole").unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::DuplicateStartingLetter);
    }

    #[test]
    fn test_import_twenty_four_words_unchecked() {
        let phrase = vec!["abandon"; 23].join(" ") + " art";
        let imported = import_phrase(&phrase).unwrap();
        assert!(!imported.is_constrained());
        assert_eq!(imported.mnemonic().len(), 24);
    }

    #[test]
    fn test_import_empty_and_odd_counts() {
        assert_eq!(import_phrase("   "), Err(MnemonicError::EmptyPhrase));
        assert_eq!(
            import_phrase("one two three"),
            Err(MnemonicError::UnsupportedWordCount(3))
        );
    }
}
