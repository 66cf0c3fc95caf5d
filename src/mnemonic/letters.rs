//! Letter Partitioning
//!
//! Groups a word list by lowercase first letter. Bucket contents keep the
//! word list's relative order; buckets are keyed in letter order so a seeded
//! RNG reproduces the same draw.

use std::collections::BTreeMap;

use super::WordList;

/// Lowercased first character of `word`, `None` for an empty word
pub fn starting_letter(word: &str) -> Option<char> {
    word.chars().next().and_then(|c| c.to_lowercase().next())
}

/// First-letter buckets over a borrowed word list
#[derive(Debug, Clone)]
pub struct LetterIndex<'a> {
    buckets: BTreeMap<char, Vec<&'a str>>,
}

impl<'a> LetterIndex<'a> {
    pub fn build(word_list: &'a WordList) -> Self {
        let mut buckets: BTreeMap<char, Vec<&'a str>> = BTreeMap::new();
        for word in word_list.iter() {
            // WordList rejects empty entries
            if let Some(letter) = starting_letter(word) {
                buckets.entry(letter).or_default().push(word);
            }
        }
        Self { buckets }
    }

    /// Number of distinct starting letters
    pub fn letter_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn letters(&self) -> Vec<char> {
        self.buckets.keys().copied().collect()
    }

    /// Words starting with `letter`; never empty when present
    pub fn bucket(&self, letter: char) -> Option<&[&'a str]> {
        self.buckets.get(&letter).map(Vec::as_slice)
    }

    pub fn buckets(&self) -> impl Iterator<Item = (char, &[&'a str])> {
        self.buckets.iter().map(|(letter, words)| (*letter, words.as_slice()))
    }
}
