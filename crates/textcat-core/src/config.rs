//! Classifier configuration: defaults, optional JSON file, environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Smoothing weight that works well for medium sized documents and above.
pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Stopword file looked up in the working directory when none is given.
pub const DEFAULT_STOPWORDS_FILE: &str = "stopwords.txt";

pub const ENV_SMOOTHING: &str = "TEXTCAT_SMOOTHING";
pub const ENV_STOPWORDS_FILE: &str = "TEXTCAT_STOPWORDS_FILE";

/// Settings shared by training and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Additive smoothing constant `k` applied to every word count.
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    /// Stopword list to filter documents with.
    #[serde(default = "default_stopwords_file")]
    pub stopwords_file: PathBuf,
    /// Emit per-document and per-model detail at debug level.
    #[serde(default)]
    pub trace_info: bool,
}

fn default_smoothing() -> f64 {
    DEFAULT_SMOOTHING
}
fn default_stopwords_file() -> PathBuf {
    PathBuf::from(DEFAULT_STOPWORDS_FILE)
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            stopwords_file: PathBuf::from(DEFAULT_STOPWORDS_FILE),
            trace_info: false,
        }
    }
}

impl ClassifierConfig {
    /// Load config from a JSON file. Missing keys take their defaults.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            Error::Configuration(format!(
                "config file {} could not be read: {}",
                config_path.display(),
                e
            ))
        })?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Apply `TEXTCAT_*` environment variables on top of this config.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SMOOTHING) {
            match raw.trim().parse::<f64>() {
                Ok(k) => self.smoothing = k,
                Err(_) => warn!("Ignoring {}={}: not a number", ENV_SMOOTHING, raw),
            }
        }
        if let Some(path) = lookup(ENV_STOPWORDS_FILE) {
            if !path.trim().is_empty() {
                self.stopwords_file = PathBuf::from(path);
            }
        }
        self
    }

    /// Check that the smoothing constant is usable.
    pub fn validate(&self) -> Result<()> {
        validate_smoothing(self.smoothing)
    }
}

/// The smoothing constant must be finite and strictly positive, otherwise
/// unseen words get a log-likelihood of negative infinity.
pub fn validate_smoothing(k: f64) -> Result<()> {
    if k.is_finite() && k > 0.0 {
        Ok(())
    } else {
        Err(Error::Configuration(format!(
            "smoothing constant must be a positive number, got {}",
            k
        )))
    }
}
