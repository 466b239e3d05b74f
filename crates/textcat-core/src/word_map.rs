//! Bag-of-words representation of a document: normalized word → occurrence count.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Word counts for one document, or for a whole category once merged.
///
/// Every stored count is at least 1. Iteration is in word order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMap {
    counts: BTreeMap<String, usize>,
}

impl WordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`.
    pub fn add_word(&mut self, word: &str) {
        self.add_count(word, 1);
    }

    /// Add `count` occurrences of `word`. A zero count is ignored.
    pub fn add_count(&mut self, word: &str, count: usize) {
        if count == 0 {
            return;
        }
        match self.counts.get_mut(word) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(word.to_string(), count);
            }
        }
    }

    /// Add every count from `other` into this map.
    pub fn merge(&mut self, other: &WordMap) {
        for (word, &count) in &other.counts {
            self.add_count(word, count);
        }
    }

    /// Occurrences of `word`, zero if absent.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total_word_count(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct words.
    pub fn unique_word_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

/// Iterator over `(word, count)` pairs in word order.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(w, &c)| (w.as_str(), c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a WordMap {
    type Item = (&'a str, usize);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut map = WordMap::new();
        for word in iter {
            map.add_word(word.as_ref());
        }
        map
    }
}

impl<S: AsRef<str>> Extend<S> for WordMap {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add_word(word.as_ref());
        }
    }
}

/// Renders as `word:count` pairs separated by spaces. Large for real documents.
impl fmt::Display for WordMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (word, count) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", word, count)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_word() {
        let mut map = WordMap::new();
        map.add_word("game");
        map.add_word("score");
        map.add_word("game");

        assert_eq!(map.get("game"), 2);
        assert_eq!(map.get("score"), 1);
        assert_eq!(map.get("vote"), 0);
        assert_eq!(map.unique_word_count(), 2);
        assert_eq!(map.total_word_count(), 3);
    }

    #[test]
    fn test_zero_count_ignored() {
        let mut map = WordMap::new();
        map.add_count("ghost", 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_merge() {
        let mut a: WordMap = ["game", "score"].into_iter().collect();
        let b: WordMap = ["score", "vote", "vote"].into_iter().collect();
        a.merge(&b);

        let pairs: Vec<(&str, usize)> = a.iter().collect();
        assert_eq!(pairs, vec![("game", 1), ("score", 2), ("vote", 2)]);
        assert_eq!(a.total_word_count(), 5);
    }

    #[test]
    fn test_display() {
        let map: WordMap = ["b", "a", "b"].into_iter().collect();
        assert_eq!(map.to_string(), "a:1 b:2");
    }

    fn merged(a: &WordMap, b: &WordMap) -> WordMap {
        let mut out = a.clone();
        out.merge(b);
        out
    }

    fn word_map() -> impl Strategy<Value = WordMap> {
        prop::collection::vec("[a-e]{1,2}", 0..20).prop_map(|words| words.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_merge_commutative(a in word_map(), b in word_map()) {
            prop_assert_eq!(merged(&a, &b), merged(&b, &a));
        }

        #[test]
        fn prop_merge_associative(a in word_map(), b in word_map(), c in word_map()) {
            prop_assert_eq!(merged(&merged(&a, &b), &c), merged(&a, &merged(&b, &c)));
        }

        #[test]
        fn prop_total_is_sum(a in word_map(), b in word_map()) {
            let m = merged(&a, &b);
            prop_assert_eq!(m.total_word_count(), a.total_word_count() + b.total_word_count());
            prop_assert!(m.iter().all(|(_, c)| c >= 1));
        }
    }
}
