//! Scores a classification run against documents sorted into category trees.
//!
//! Precision is the share of documents labelled with a category that belong
//! there, recall the share of a category's documents that were labelled with
//! it. The balanced F measure combines both.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use textcat_core::{Error, Result};
use textcat_ingest::{category_of, find_files_in, LevelRange};
use tracing::warn;

use crate::types::ClassificationResults;

/// Correct category of every document in one or more category trees.
#[derive(Debug, Clone, Default)]
pub struct ExpectedResults {
    categories: BTreeMap<PathBuf, String>,
    valid: BTreeSet<String>,
}

impl ExpectedResults {
    /// Collect documents found directly inside each root's category directories.
    pub fn from_dirs<P: AsRef<Path>>(roots: &[P]) -> Result<Self> {
        if roots.is_empty() {
            return Err(Error::InputData(
                "expected results directory list is empty".into(),
            ));
        }

        let mut expected = Self::default();
        for file in find_files_in(roots, LevelRange::CATEGORY_FILES)? {
            let category = category_of(&file)?;
            expected.valid.insert(category.clone());
            expected.categories.insert(file, category);
        }

        if expected.categories.is_empty() {
            return Err(Error::InputData(
                "expected results directories contain no files".into(),
            ));
        }
        Ok(expected)
    }

    /// Correct category for `path`, if it is part of the expected set.
    pub fn category(&self, path: &Path) -> Option<&str> {
        self.categories.get(path).map(String::as_str)
    }

    pub fn is_valid_category(&self, category: &str) -> bool {
        self.valid.contains(category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Parse `<path>: <category>` lines. The split is at the last `": "` so paths
/// may contain the separator.
pub fn parse_results(text: &str) -> ClassificationResults {
    let mut results = ClassificationResults::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        match line.rsplit_once(": ") {
            Some((path, category)) if !path.is_empty() && !category.is_empty() => {
                results.insert(PathBuf::from(path), category.to_string());
            }
            _ if line.trim().is_empty() => {}
            _ => warn!("Results line {} ignored, missing file or category", index + 1),
        }
    }
    results
}

/// Read and parse a results listing.
pub fn read_results(path: &Path) -> Result<ClassificationResults> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::InputData(format!(
            "results file {} could not be opened: {}",
            path.display(),
            e
        ))
    })?;
    Ok(parse_results(&text))
}

/// Outcome counts for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    /// Documents of this category labelled with it.
    pub correct: usize,
    /// Documents of another category labelled with this one.
    #[serde(rename = "misclassifiedToThis")]
    pub misclassified_to_this: usize,
    /// Documents of this category labelled with another one.
    #[serde(rename = "misclassifiedToOther")]
    pub misclassified_to_other: usize,
}

impl CategoryTally {
    pub fn precision(&self) -> f64 {
        ratio(self.correct, self.correct + self.misclassified_to_this)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.correct, self.correct + self.misclassified_to_other)
    }

    /// Balanced F measure, the harmonic mean of precision and recall.
    pub fn f_measure(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl fmt::Display for CategoryTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "correct: {} misclassified to this: {} misclassified to other: {}",
            self.correct, self.misclassified_to_this, self.misclassified_to_other
        )
    }
}

/// Compare assigned categories against the expected ones.
///
/// Files outside the expected set are skipped. A label that is not an
/// expected category only counts against the document's true category.
pub fn tally(
    results: &ClassificationResults,
    expected: &ExpectedResults,
) -> Result<BTreeMap<String, CategoryTally>> {
    let mut tallies: BTreeMap<String, CategoryTally> = BTreeMap::new();
    for (path, assigned) in results {
        let Some(correct) = expected.category(path) else {
            warn!("Expected results not found for file {}", path.display());
            continue;
        };

        if correct == assigned {
            tallies.entry(correct.to_string()).or_default().correct += 1;
        } else {
            tallies
                .entry(correct.to_string())
                .or_default()
                .misclassified_to_other += 1;
            if expected.is_valid_category(assigned) {
                tallies
                    .entry(assigned.clone())
                    .or_default()
                    .misclassified_to_this += 1;
            }
        }
    }

    if tallies.is_empty() {
        return Err(Error::InputData(
            "results contain no files from the expected category directories".into(),
        ));
    }
    Ok(tallies)
}
