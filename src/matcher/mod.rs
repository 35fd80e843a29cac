pub mod similarity;
pub mod types;
pub mod detector;
pub mod parallel;

// Re-export the main types
pub use self::similarity::SimilarityCalculator;
pub use self::detector::PlagiarismDetector;
pub use self::parallel::{ParallelMatcher, DocumentPair, PairOutcome};
pub use self::types::{
    Comparison,
    DocumentSummary,
    SimilarityBand,
    SimilarityScore,
};
