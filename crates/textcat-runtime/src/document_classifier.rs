//! End-to-end classifier: train from category trees, label files on disk.

use std::collections::BTreeSet;
use std::path::Path;

use textcat_core::{ClassifierConfig, Error, Result};
use textcat_infer::{total_document_count, CategoryScore, Classifier, Trainer, TrainingCorpus};
use textcat_ingest::{find_files, LevelRange, Stopwords, Tokenizer};
use tracing::{debug, info};

use crate::corpus::CorpusLoader;
use crate::types::{ClassificationResults, TrainingSummary};

/// A trained classifier together with the tokenizer its training used.
pub struct DocumentClassifier {
    tokenizer: Tokenizer,
    classifier: Classifier,
    summary: TrainingSummary,
    trace_info: bool,
}

impl DocumentClassifier {
    /// Load the configured stopwords, read every training root and train.
    pub fn train<P: AsRef<Path>>(config: &ClassifierConfig, training_dirs: &[P]) -> Result<Self> {
        config.validate()?;
        let stopwords = Stopwords::load(&config.stopwords_file)?;
        info!(
            "Loaded {} stopwords from {}",
            stopwords.len(),
            config.stopwords_file.display()
        );
        let mut trained = Self::train_with(Tokenizer::new(stopwords), config.smoothing, training_dirs)?;
        trained.trace_info = config.trace_info;
        Ok(trained)
    }

    /// Train with an already-built tokenizer.
    pub fn train_with<P: AsRef<Path>>(
        tokenizer: Tokenizer,
        smoothing: f64,
        training_dirs: &[P],
    ) -> Result<Self> {
        let trainer = Trainer::new(smoothing)?;
        let corpus = CorpusLoader::new(&tokenizer).load_all(training_dirs)?;
        let classifier = trainer.train(&corpus)?;
        let summary = summarize(&corpus);
        info!(
            "Classifier trained: {} categories, {} documents, {} unique words",
            summary.categories.len(),
            summary.document_count,
            summary.unique_word_count
        );

        Ok(Self {
            tokenizer,
            classifier,
            summary,
            trace_info: false,
        })
    }

    pub fn summary(&self) -> &TrainingSummary {
        &self.summary
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Label a piece of text.
    pub fn classify_text(&self, text: &str) -> Result<String> {
        self.classifier.classify(&self.tokenizer.word_map(text))
    }

    /// Log scores of a piece of text under every category.
    pub fn scores_for_text(&self, text: &str) -> Result<Vec<CategoryScore>> {
        self.classifier.scores(&self.tokenizer.word_map(text))
    }

    /// Label every file under each target. A target may be a single file or
    /// a directory searched at any depth, and must contain at least one file.
    pub fn classify<P: AsRef<Path>>(&self, targets: &[P]) -> Result<ClassificationResults> {
        let mut results = ClassificationResults::new();
        for target in targets {
            let target = target.as_ref();
            let files = find_files(target, LevelRange::ANY)?;
            if files.is_empty() {
                return Err(Error::InputData(format!(
                    "no documents to classify found in {}",
                    target.display()
                )));
            }

            for file in files {
                let words = self.tokenizer.word_map_from_file(&file)?;
                if self.trace_info {
                    for score in self.classifier.scores(&words)? {
                        info!(
                            "{}: category {} log probability {}",
                            file.display(),
                            score.category,
                            score.log_score
                        );
                    }
                }
                let category = self.classifier.classify(&words)?;
                debug!("{} -> {}", file.display(), category);
                results.insert(file, category);
            }
        }
        Ok(results)
    }
}

fn summarize(corpus: &TrainingCorpus) -> TrainingSummary {
    let vocabulary: BTreeSet<&str> = corpus
        .values()
        .flat_map(|stats| stats.word_map().iter().map(|(word, _)| word))
        .collect();
    TrainingSummary {
        categories: corpus.keys().cloned().collect(),
        document_count: total_document_count(corpus),
        unique_word_count: vocabulary.len(),
    }
}
