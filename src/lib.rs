//! tashabuh estimates textual overlap between two Arabic documents.
//! Text is normalized (diacritics, tatweel, punctuation and digits removed,
//! letter variants folded), cut into fixed-width shingles hashed with a
//! polynomial rolling hash, and the two shingle sets are compared with
//! Jaccard similarity.

// Module declarations
pub mod error;
pub mod parser;
pub mod ngram;
pub mod matcher;
pub mod utils;
pub mod config;

// Re-exports
pub use error::{Error, Result};
pub use matcher::{
    Comparison,
    PlagiarismDetector,
    ParallelMatcher,
    SimilarityBand,
    SimilarityCalculator,
};
pub use parser::{ArabicParser, TextParser};
pub use ngram::{Fingerprint, NGramGenerator};

// Re-export the config from config module
pub use config::TashabuhConfig;
