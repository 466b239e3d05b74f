//! Stopword list: common words excluded from statistics.
//!
//! No agreed list exists, so it is read from a configuration file: words
//! separated by commas and/or whitespace over any number of lines.

use std::collections::BTreeSet;
use std::path::Path;

use textcat_core::{Error, Result};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Stopwords {
    words: BTreeSet<String>,
}

impl Stopwords {
    /// Load stopwords from a file. A missing file or an empty list is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "stopword file {} could not be opened: {}",
                path.display(),
                e
            ))
        })?;

        let stopwords = Self::parse(&content).map_err(|_| {
            Error::Configuration(format!("stopword file {} has no data", path.display()))
        })?;
        debug!(
            "Loaded {} stopwords from {}",
            stopwords.len(),
            path.display()
        );
        Ok(stopwords)
    }

    /// Parse stopwords from text in the file format.
    pub fn parse(content: &str) -> Result<Self> {
        Self::from_words(
            content
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|w| !w.is_empty()),
        )
    }

    /// Build from an explicit word list. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(Error::Configuration("stopword list is empty".into()));
        }
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let stopwords = Stopwords::parse("the, a,an\n  of\tto,,\n\nAND").unwrap();
        let words: Vec<&str> = stopwords.iter().collect();
        assert_eq!(words, vec!["a", "an", "and", "of", "the", "to"]);
        assert!(stopwords.contains("the"));
        assert!(!stopwords.contains("game"));
    }

    #[test]
    fn test_empty_is_error() {
        assert!(matches!(
            Stopwords::parse(" ,, \n , "),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwords.txt");
        std::fs::write(&path, "the,a\nis are\n").unwrap();

        let stopwords = Stopwords::load(&path).unwrap();
        assert_eq!(stopwords.len(), 4);
        assert!(stopwords.contains("are"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Stopwords::load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("could not be opened"));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwords.txt");
        std::fs::write(&path, "\n , \n").unwrap();

        let err = Stopwords::load(&path).unwrap_err();
        assert!(err.to_string().contains("has no data"));
    }
}
