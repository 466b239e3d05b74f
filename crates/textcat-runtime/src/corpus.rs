//! Training corpus loading: `root/<category>/<document>` trees to statistics.

use std::path::Path;

use textcat_core::Result;
use textcat_infer::{merge_corpus, CategoryStatistics, TrainingCorpus};
use textcat_ingest::{category_of, find_files, LevelRange, Tokenizer};
use tracing::{debug, info};

/// Reads category trees and aggregates their documents per category.
pub struct CorpusLoader<'a> {
    tokenizer: &'a Tokenizer,
}

impl<'a> CorpusLoader<'a> {
    pub fn new(tokenizer: &'a Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Load every document found directly inside a category directory of `root`.
    pub fn load(&self, root: &Path) -> Result<TrainingCorpus> {
        let files = find_files(root, LevelRange::CATEGORY_FILES)?;
        let mut corpus = TrainingCorpus::new();
        for file in &files {
            let category = category_of(file)?;
            let words = self.tokenizer.word_map_from_file(file)?;
            corpus
                .entry(category)
                .or_insert_with(CategoryStatistics::new)
                .add_document(&words);
        }

        for (category, stats) in &corpus {
            debug!("{} in {}: {}", category, root.display(), stats);
        }
        info!(
            "Loaded {} documents in {} categories from {}",
            files.len(),
            corpus.len(),
            root.display()
        );
        Ok(corpus)
    }

    /// Load several roots, merging categories that appear in more than one.
    /// Nothing is returned unless every root loads.
    pub fn load_all<P: AsRef<Path>>(&self, roots: &[P]) -> Result<TrainingCorpus> {
        let mut corpus = TrainingCorpus::new();
        for root in roots {
            merge_corpus(&mut corpus, self.load(root.as_ref())?);
        }
        Ok(corpus)
    }
}
