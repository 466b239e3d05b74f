//! textcat Infer — Naive Bayes training and classification.
//!
//! Training folds per-document word maps into [`CategoryStatistics`], the
//! [`Trainer`] turns each category into a [`ProbabilityModel`], and the
//! resulting [`Classifier`] labels new documents by highest log score.

pub mod classifier;
pub mod model;
pub mod statistics;
pub mod trainer;

pub use classifier::{CategoryScore, Classifier};
pub use model::{score_document, ProbabilityModel};
pub use statistics::{merge_corpus, total_document_count, CategoryStatistics, TrainingCorpus};
pub use trainer::Trainer;

use textcat_core::Result;

/// Train a classifier over `corpus` with smoothing constant `smoothing`.
pub fn train(corpus: &TrainingCorpus, smoothing: f64) -> Result<Classifier> {
    Trainer::new(smoothing)?.train(corpus)
}
