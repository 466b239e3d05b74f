//! textcat Core — shared error kinds, configuration, and the bag-of-words word map.

pub mod config;
pub mod error;
pub mod word_map;

pub use config::{ClassifierConfig, DEFAULT_SMOOTHING, DEFAULT_STOPWORDS_FILE};
pub use error::{Error, Result};
pub use word_map::WordMap;
