//! Naive Bayes probability model for one category.
//!
//! Probabilities are held as natural logs. Multiplying hundreds of small
//! word probabilities underflows a double, while summing their logs does not.

use std::collections::HashMap;
use std::fmt;

use textcat_core::config::validate_smoothing;
use textcat_core::{Error, Result, WordMap};

use crate::statistics::CategoryStatistics;

/// Log-probabilities derived from one category's training statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityModel {
    /// ln P(category): share of training documents in this category.
    category_log_prior: f64,
    /// ln P(word | category) for every word seen in training.
    word_log_likelihood: HashMap<String, f64>,
    /// ln P(word | category) for a word never seen in this category.
    unseen_word_log_likelihood: f64,
}

impl ProbabilityModel {
    /// Build the model for a category.
    ///
    /// `total_documents` is the document count across all categories and
    /// `smoothing` the additive constant `k`:
    ///
    /// ```text
    /// prior      = ln(docs / total_documents)
    /// adjusted   = total_words + unique_words * k
    /// word(w)    = ln((count(w) + k) / adjusted)
    /// unseen     = ln(k / adjusted)
    /// ```
    pub fn build(
        stats: &CategoryStatistics,
        total_documents: usize,
        smoothing: f64,
    ) -> Result<Self> {
        validate_smoothing(smoothing)?;
        if stats.is_empty() {
            return Err(Error::InsufficientTrainingData(
                "category has no training documents".into(),
            ));
        }
        if total_documents < stats.document_count() {
            return Err(Error::InvalidState(format!(
                "corpus document count {} is below category document count {}",
                total_documents,
                stats.document_count()
            )));
        }
        if stats.total_word_count() == 0 {
            return Err(Error::InsufficientTrainingData(
                "category documents contain no words after stopword filtering".into(),
            ));
        }

        let category_log_prior = (stats.document_count() as f64 / total_documents as f64).ln();

        let adjusted_word_count =
            stats.total_word_count() as f64 + stats.unique_word_count() as f64 * smoothing;

        let word_log_likelihood = stats
            .word_map()
            .iter()
            .map(|(word, count)| {
                let p = (count as f64 + smoothing) / adjusted_word_count;
                (word.to_string(), p.ln())
            })
            .collect();

        // An unseen word is a known word with a count of zero.
        let unseen_word_log_likelihood = (smoothing / adjusted_word_count).ln();

        Ok(Self {
            category_log_prior,
            word_log_likelihood,
            unseen_word_log_likelihood,
        })
    }

    pub fn category_log_prior(&self) -> f64 {
        self.category_log_prior
    }

    pub fn unseen_word_log_likelihood(&self) -> f64 {
        self.unseen_word_log_likelihood
    }

    /// ln P(word | category), falling back to the unseen-word value.
    pub fn word_log_likelihood(&self, word: &str) -> f64 {
        self.word_log_likelihood
            .get(word)
            .copied()
            .unwrap_or(self.unseen_word_log_likelihood)
    }

    /// Number of words with their own likelihood.
    pub fn vocabulary_size(&self) -> usize {
        self.word_log_likelihood.len()
    }

    /// Unnormalized log-probability that `document` belongs to this category.
    ///
    /// The evidence term ln P(words) is left out: it is the same for every
    /// category, so it never changes which category scores highest.
    pub fn score(&self, document: &WordMap) -> f64 {
        document
            .iter()
            .fold(self.category_log_prior, |score, (word, count)| {
                score + count as f64 * self.word_log_likelihood(word)
            })
    }
}

/// Score `document` against `model`.
pub fn score_document(model: &ProbabilityModel, document: &WordMap) -> f64 {
    model.score(document)
}

impl fmt::Display for ProbabilityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "log prior: {:.6} unseen word: {:.6} vocabulary: {}",
            self.category_log_prior,
            self.unseen_word_log_likelihood,
            self.word_log_likelihood.len()
        )
    }
}
