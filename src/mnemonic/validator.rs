//! Phrase Validation
//!
//! Checks run as whole-phrase passes in a fixed order and the first failure
//! is reported: length, empty words, repeated words, shared first letters.

use std::collections::HashSet;

use super::{starting_letter, MnemonicError, MnemonicResult, PHRASE_LENGTH};

/// Check a candidate phrase against the uniqueness contract
pub fn check_phrase<S: AsRef<str>>(words: &[S]) -> MnemonicResult<()> {
    if words.len() != PHRASE_LENGTH {
        return Err(MnemonicError::WrongLength(words.len()));
    }

    if let Some(pos) = words.iter().position(|w| w.as_ref().is_empty()) {
        return Err(MnemonicError::EmptyWord(pos + 1));
    }

    let mut seen_words = HashSet::with_capacity(PHRASE_LENGTH);
    for word in words.iter().map(AsRef::as_ref) {
        if !seen_words.insert(word) {
            return Err(MnemonicError::DuplicateWord(word.to_string()));
        }
    }

    let mut seen_letters = HashSet::with_capacity(PHRASE_LENGTH);
    for word in words.iter().map(AsRef::as_ref) {
        if let Some(letter) = starting_letter(word) {
            if !seen_letters.insert(letter) {
                return Err(MnemonicError::DuplicateStartingLetter {
                    letter,
                    word: word.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Check a phrase, returning a plain boolean
pub fn is_valid_phrase<S: AsRef<str>>(words: &[S]) -> bool {
    check_phrase(words).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_words() -> Vec<&'static str> {
        vec![
            "apple", "banana", "cherry", "date", "eagle", "fig", "grape", "hotel", "igloo",
            "jolly", "kiwi", "lemon",
        ]
    }

    #[test]
    fn test_valid_phrase() {
        assert!(check_phrase(&valid_words()).is_ok());
        assert!(is_valid_phrase(&valid_words()));
    }

    #[test]
    fn test_wrong_length_reports_count() {
        let mut words = valid_words();
        words.pop();
        assert_eq!(check_phrase(&words), Err(MnemonicError::WrongLength(11)));

        let empty: Vec<String> = Vec::new();
        assert_eq!(check_phrase(&empty), Err(MnemonicError::WrongLength(0)));
    }

    #[test]
    fn test_empty_word_reports_position() {
        let mut words = valid_words();
        words[4] = "";
        assert_eq!(check_phrase(&words), Err(MnemonicError::EmptyWord(5)));
    }

    #[test]
    fn test_duplicate_word_wins_over_letter_clash() {
        let words = [
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "ten",
            "ten",
        ];
        assert_eq!(
            check_phrase(&words),
            Err(MnemonicError::DuplicateWord("ten".to_string()))
        );
    }

    #[test]
    fn test_duplicate_starting_letter() {
        let words = [
            "cat", "car", "dog", "eel", "fox", "gnu", "hen", "ibis", "jay", "kit", "lynx", "mole",
        ];
        assert_eq!(
            check_phrase(&words),
            Err(MnemonicError::DuplicateStartingLetter {
                letter: 'c',
                word: "car".to_string(),
            })
        );
    }

    #[test]
    fn test_starting_letter_is_case_insensitive() {
        let mut words = valid_words();
        words[0] = "Apple";
        words[1] = "ant";
        let err = check_phrase(&words).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate starting letter \"a\" found (word: \"ant\")");
    }

    #[test]
    fn test_case_differing_words_are_not_duplicates() {
        // exact equality: "Kiwi" and "kiwi" are distinct words but share a letter
        let mut words = valid_words();
        words[0] = "Kiwi";
        assert!(matches!(
            check_phrase(&words),
            Err(MnemonicError::DuplicateStartingLetter { letter: 'k', .. })
        ));
    }
}
