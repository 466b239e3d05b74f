//! textcat Ingest — document text to stemmed bags of words, and file discovery.

pub mod file;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use file::{category_of, find_files, find_files_in, LevelRange};
pub use stemmer::stem;
pub use stopwords::Stopwords;
pub use tokenizer::Tokenizer;
