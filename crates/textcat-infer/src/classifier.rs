//! Scores a document against every category model and picks the best.

use std::collections::BTreeMap;

use serde::Serialize;
use textcat_core::{Error, Result, WordMap};
use tracing::debug;

use crate::model::ProbabilityModel;

/// Log score of a document under one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: String,
    #[serde(rename = "logScore")]
    pub log_score: f64,
}

/// Trained models keyed by category label.
///
/// Models are visited in ascending label order, so equal scores resolve to
/// the alphabetically first category.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    models: BTreeMap<String, ProbabilityModel>,
}

impl Classifier {
    /// Wrap already-built models. An empty map yields a classifier that
    /// rejects every request.
    pub fn from_models(models: BTreeMap<String, ProbabilityModel>) -> Self {
        Self { models }
    }

    /// Whether any models are available.
    pub fn is_trained(&self) -> bool {
        !self.models.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn model(&self, category: &str) -> Option<&ProbabilityModel> {
        self.models.get(category)
    }

    fn ensure_trained(&self) -> Result<()> {
        if self.is_trained() {
            Ok(())
        } else {
            Err(Error::InvalidState(
                "attempt to classify documents with an untrained classifier".into(),
            ))
        }
    }

    /// Score `document` under every category, in label order.
    pub fn scores(&self, document: &WordMap) -> Result<Vec<CategoryScore>> {
        self.ensure_trained()?;
        Ok(self
            .models
            .iter()
            .map(|(category, model)| CategoryScore {
                category: category.clone(),
                log_score: model.score(document),
            })
            .collect())
    }

    /// Label of the category with the strictly highest score.
    pub fn classify(&self, document: &WordMap) -> Result<String> {
        self.ensure_trained()?;

        let mut best: Option<(&str, f64)> = None;
        for (category, model) in &self.models {
            let score = model.score(document);
            debug!("Category: {} log probability: {}", category, score);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((category, score)),
            }
        }

        best.map(|(category, _)| category.to_string())
            .ok_or_else(|| Error::InvalidState("no category models".into()))
    }
}
