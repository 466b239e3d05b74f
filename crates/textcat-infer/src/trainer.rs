//! Builds one probability model per category from aggregated statistics.

use std::collections::BTreeMap;

use textcat_core::config::validate_smoothing;
use textcat_core::{Error, Result, DEFAULT_SMOOTHING};
use tracing::{debug, info};

use crate::classifier::Classifier;
use crate::model::ProbabilityModel;
use crate::statistics::{total_document_count, TrainingCorpus};

/// Trains classifiers with a fixed smoothing constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trainer {
    smoothing: f64,
}

impl Default for Trainer {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl Trainer {
    pub fn new(smoothing: f64) -> Result<Self> {
        validate_smoothing(smoothing)?;
        Ok(Self { smoothing })
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }

    /// Build a classifier from per-category statistics.
    ///
    /// At least two categories are required. Either every category gets a
    /// model or an error is returned.
    pub fn train(&self, corpus: &TrainingCorpus) -> Result<Classifier> {
        match corpus.len() {
            0 => {
                return Err(Error::InsufficientTrainingData(
                    "no training data found".into(),
                ))
            }
            1 => {
                let only = corpus.keys().next().map(String::as_str).unwrap_or_default();
                return Err(Error::InsufficientTrainingData(format!(
                    "training data found only for category {}",
                    only
                )));
            }
            _ => {}
        }

        let total_documents = total_document_count(corpus);
        let mut models = BTreeMap::new();
        for (category, stats) in corpus {
            let model = ProbabilityModel::build(stats, total_documents, self.smoothing).map_err(
                |e| match e {
                    Error::InsufficientTrainingData(msg) => {
                        Error::InsufficientTrainingData(format!("category {}: {}", category, msg))
                    }
                    other => other,
                },
            )?;
            debug!("{}: {}", category, model);
            models.insert(category.clone(), model);
        }

        info!(
            "Trained {} categories from {} documents",
            models.len(),
            total_documents
        );
        Ok(Classifier::from_models(models))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::CategoryStatistics;
    use textcat_core::WordMap;

    fn stats(docs: &[&[&str]]) -> CategoryStatistics {
        let maps: Vec<WordMap> = docs.iter().map(|d| d.iter().collect()).collect();
        maps.iter().collect()
    }

    fn doc(words: &[&str]) -> WordMap {
        words.iter().collect()
    }

    #[test]
    fn test_rejects_zero_categories() {
        let err = Trainer::default().train(&TrainingCorpus::new()).unwrap_err();
        assert!(matches!(err, Error::InsufficientTrainingData(_)));
    }

    #[test]
    fn test_rejects_single_category() {
        let mut corpus = TrainingCorpus::new();
        corpus.insert("sports".into(), stats(&[&["game"], &["score"]]));

        let err = Trainer::default().train(&corpus).unwrap_err();
        assert!(matches!(err, Error::InsufficientTrainingData(_)));
        assert!(err.to_string().contains("sports"));
    }

    #[test]
    fn test_rejects_empty_category() {
        let mut corpus = TrainingCorpus::new();
        corpus.insert("sports".into(), stats(&[&["game"]]));
        corpus.insert("politics".into(), CategoryStatistics::new());

        let err = Trainer::default().train(&corpus).unwrap_err();
        assert!(matches!(err, Error::InsufficientTrainingData(_)));
        assert!(err.to_string().contains("politics"));
    }

    #[test]
    fn test_rejects_bad_smoothing() {
        assert!(matches!(Trainer::new(-0.5), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_sports_and_politics() {
        let mut corpus = TrainingCorpus::new();
        corpus.insert(
            "sports".into(),
            stats(&[
                &["game", "score", "game", "team"],
                &["score", "score", "game", "win"],
                &["game", "player", "score"],
            ]),
        );
        corpus.insert(
            "politics".into(),
            stats(&[
                &["elect", "vote", "vote", "parti"],
                &["vote", "elect", "senat"],
                &["elect", "campaign", "vote"],
            ]),
        );

        let classifier = Trainer::default().train(&corpus).unwrap();
        let categories: Vec<&str> = classifier.categories().collect();
        assert_eq!(categories, vec!["politics", "sports"]);

        let prior = classifier.model("sports").unwrap().category_log_prior();
        assert!((prior - 0.5f64.ln()).abs() < 1e-12);

        assert_eq!(
            classifier
                .classify(&doc(&["score", "game", "score", "game", "vote"]))
                .unwrap(),
            "sports"
        );
        assert_eq!(
            classifier.classify(&doc(&["elect", "vote", "game"])).unwrap(),
            "politics"
        );
    }

    #[test]
    fn test_identical_categories_tie() {
        let mut corpus = TrainingCorpus::new();
        corpus.insert("beta".into(), stats(&[&["same", "words"]]));
        corpus.insert("alpha".into(), stats(&[&["same", "words"]]));

        let classifier = Trainer::default().train(&corpus).unwrap();
        assert_eq!(classifier.classify(&WordMap::new()).unwrap(), "alpha");
    }
}
