//! Ordered word list with constant-time membership checks

use rustc_hash::FxHashSet;

/// An immutable list of puzzle words
///
/// Keeps insertion order (the daily secret is picked by index) alongside a
/// hash set for validity checks. Duplicates are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    lookup: FxHashSet<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        list.extend(words);
        list
    }

    /// Build from an embedded string slice
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::wordlists::{ANSWERS, WordList};
    ///
    /// let words = WordList::from_slice(ANSWERS);
    /// assert_eq!(words.len(), ANSWERS.len());
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(slice.iter().copied())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<S> for WordList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            let word = word.into();
            if self.lookup.insert(word.clone()) {
                self.words.push(word);
            }
        }
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
