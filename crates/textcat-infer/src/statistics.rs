//! Per-category word statistics aggregated over training documents.

use std::collections::BTreeMap;
use std::fmt;

use textcat_core::WordMap;

/// Training data per category label, in label order.
pub type TrainingCorpus = BTreeMap<String, CategoryStatistics>;

/// Word counts summed over every document of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStatistics {
    document_count: usize,
    total_word_count: usize,
    words: WordMap,
}

impl CategoryStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one document into the aggregate.
    pub fn add_document(&mut self, document: &WordMap) {
        self.words.merge(document);
        self.document_count += 1;
        self.total_word_count += document.total_word_count();
    }

    /// Fold another partial aggregate for the same category into this one.
    pub fn merge_with(&mut self, other: &CategoryStatistics) {
        self.words.merge(&other.words);
        self.document_count += other.document_count;
        self.total_word_count += other.total_word_count;
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Distinct words across the category.
    pub fn unique_word_count(&self) -> usize {
        self.words.unique_word_count()
    }

    /// Word occurrences across the category.
    pub fn total_word_count(&self) -> usize {
        self.total_word_count
    }

    pub fn word_map(&self) -> &WordMap {
        &self.words
    }

    /// No documents have been added.
    pub fn is_empty(&self) -> bool {
        self.document_count == 0
    }
}

impl<'a> FromIterator<&'a WordMap> for CategoryStatistics {
    fn from_iter<I: IntoIterator<Item = &'a WordMap>>(iter: I) -> Self {
        let mut stats = CategoryStatistics::new();
        for doc in iter {
            stats.add_document(doc);
        }
        stats
    }
}

impl fmt::Display for CategoryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "docs: {} unique words: {} total words: {}",
            self.document_count,
            self.unique_word_count(),
            self.total_word_count
        )
    }
}

/// Merge `other` into `corpus`, combining categories present in both.
pub fn merge_corpus(corpus: &mut TrainingCorpus, other: TrainingCorpus) {
    for (category, stats) in other {
        match corpus.get_mut(&category) {
            Some(existing) => existing.merge_with(&stats),
            None => {
                corpus.insert(category, stats);
            }
        }
    }
}

/// Documents across every category.
pub fn total_document_count(corpus: &TrainingCorpus) -> usize {
    corpus.values().map(CategoryStatistics::document_count).sum()
}
