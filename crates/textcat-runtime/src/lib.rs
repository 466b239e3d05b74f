//! Runtime — ties ingest and infer together over files on disk.
//!
//! Loads training corpora laid out as `root/<category>/<document>`, trains a
//! classifier, labels target documents, and scores a labelled run against
//! expected categories.

pub mod corpus;
pub mod document_classifier;
pub mod types;
pub mod validate;

pub use corpus::CorpusLoader;
pub use document_classifier::DocumentClassifier;
pub use types::*;
pub use validate::{parse_results, read_results, tally, CategoryTally, ExpectedResults};
