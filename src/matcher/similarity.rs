use log::trace;

use crate::ngram::Fingerprint;
use super::types::SimilarityScore;

/// Set-overlap scoring between two fingerprints.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityCalculator;

impl SimilarityCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Jaccard similarity with two fixed conventions: two empty sets are
    /// identical (1.0), one empty set against a non-empty one scores 0.0.
    /// Hash equality is exact; near values earn nothing.
    pub fn jaccard(&self, first: &Fingerprint, second: &Fingerprint) -> SimilarityScore {
        match (first.is_empty(), second.is_empty()) {
            (true, true) => {
                trace!("Both fingerprints empty, treating documents as identical");
                return SimilarityScore { ratio: 1.0, common: 0, union: 0 };
            },
            (true, false) | (false, true) => {
                return SimilarityScore {
                    ratio: 0.0,
                    common: 0,
                    union: first.len() + second.len(),
                };
            },
            (false, false) => {},
        }

        let common = first.intersection_count(second);
        let union = first.len() + second.len() - common;
        trace!("Jaccard: {} common of {} total shingles", common, union);

        SimilarityScore {
            ratio: common as f64 / union as f64,
            common,
            union,
        }
    }
}
