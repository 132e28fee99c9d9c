//! The ordered list of words a cycle rotates through.

#[cfg(test)]
#[path = "words_test.rs"]
mod words_test;

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use serde::Deserialize;

use crate::CycleError;

/// Ordered, non-empty, immutable list of display strings.
///
/// Clones share storage. Equality compares content, so two lists built from
/// the same words are the same cycle even if they were allocated separately.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct WordList {
    words: Arc<[String]>,
}

impl WordList {
    /// Build a word list, rejecting an empty sequence.
    pub fn new<I, S>(words: I) -> Result<Self, CycleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Arc<[String]> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(CycleError::EmptyWords);
        }
        Ok(Self { words })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Word at `index` modulo the list length.
    #[must_use]
    pub fn wrapped(&self, index: usize) -> &str {
        &self.words[index % self.words.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Stable content hash; [`crate::WidthCache`] keys its measurement on it.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.words.hash(&mut hasher);
        hasher.finish()
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = CycleError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}
