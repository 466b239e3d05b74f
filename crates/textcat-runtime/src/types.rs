//! Runtime types.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// Assigned category per classified file, in path order.
pub type ClassificationResults = BTreeMap<PathBuf, String>;

/// Shape of the corpus a classifier was trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingSummary {
    pub categories: Vec<String>,
    #[serde(rename = "documentCount")]
    pub document_count: usize,
    #[serde(rename = "uniqueWordCount")]
    pub unique_word_count: usize,
}
