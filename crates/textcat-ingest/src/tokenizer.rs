//! Document text → bag of stemmed words.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use textcat_core::{Result, WordMap};
use tracing::debug;

use crate::stemmer::stem;
use crate::stopwords::Stopwords;

/// Runs of ASCII letters, optionally joined by single dashes ("well-known").
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+(?:-[A-Za-z]+)*").expect("token pattern is valid"));

/// Converts documents into word maps using a fixed stopword list.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: Stopwords,
}

impl Tokenizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Lowercased tokens of `text` that are not stopwords, before stemming.
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        TOKEN
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase())
            .filter(move |word| !self.stopwords.contains(word))
    }

    /// Tokenize, drop stopwords, stem and count.
    pub fn word_map(&self, text: &str) -> WordMap {
        self.tokens(text).map(|word| stem(&word)).collect()
    }

    /// Read a file and build its word map. Invalid UTF-8 is replaced, not rejected.
    pub fn word_map_from_file(&self, path: &Path) -> Result<WordMap> {
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        let map = self.word_map(&text);
        debug!(
            "{}: {} words, {} unique",
            path.display(),
            map.total_word_count(),
            map.unique_word_count()
        );
        Ok(map)
    }
}
