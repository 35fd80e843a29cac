// types.rs
use serde::Serialize;

use crate::config::subsystems::generator::HashUnit;
use crate::parser::NormalizationStats;

/// Jaccard overlap of two fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityScore {
    /// |A ∩ B| / |A ∪ B|, in [0, 1]
    pub ratio: f64,
    pub common: usize,
    pub union: usize,
}

impl SimilarityScore {
    pub fn percentage(&self) -> f64 {
        self.ratio * 100.0
    }

    pub fn band(&self) -> SimilarityBand {
        SimilarityBand::from_percentage(self.percentage())
    }
}

/// Qualitative reading of a percentage. Boundaries are half-open:
/// [0,10), [10,30), [30,50), [50,70), [70,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityBand {
    None,
    Minor,
    Moderate,
    High,
    VeryHigh,
}

impl SimilarityBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 10.0 {
            SimilarityBand::None
        } else if percentage < 30.0 {
            SimilarityBand::Minor
        } else if percentage < 50.0 {
            SimilarityBand::Moderate
        } else if percentage < 70.0 {
            SimilarityBand::High
        } else {
            SimilarityBand::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimilarityBand::None => "none",
            SimilarityBand::Minor => "minor",
            SimilarityBand::Moderate => "moderate",
            SimilarityBand::High => "high",
            SimilarityBand::VeryHigh => "very_high",
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            SimilarityBand::None => "No significant similarity detected",
            SimilarityBand::Minor => "Minor similarity - possibly coincidental",
            SimilarityBand::Moderate => "Moderate similarity - potential paraphrasing",
            SimilarityBand::High => "High similarity - likely plagiarism",
            SimilarityBand::VeryHigh => "Very high similarity - probable direct copying",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub input_bytes: usize,
    // Length of the normalized text in hash units
    pub normalized_units: usize,
    pub shingles: usize,
    pub normalization: NormalizationStats,
}

/// Outcome of one successful end-to-end comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub score: SimilarityScore,
    pub ngram_size: usize,
    pub hash_unit: HashUnit,
    pub first: DocumentSummary,
    pub second: DocumentSummary,
}

impl Comparison {
    pub fn percentage(&self) -> f64 {
        self.score.percentage()
    }

    pub fn band(&self) -> SimilarityBand {
        self.score.band()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(SimilarityBand::from_percentage(0.0), SimilarityBand::None);
        assert_eq!(SimilarityBand::from_percentage(9.999), SimilarityBand::None);
        assert_eq!(SimilarityBand::from_percentage(10.0), SimilarityBand::Minor);
        assert_eq!(SimilarityBand::from_percentage(29.99), SimilarityBand::Minor);
        assert_eq!(SimilarityBand::from_percentage(30.0), SimilarityBand::Moderate);
        assert_eq!(SimilarityBand::from_percentage(50.0), SimilarityBand::High);
        assert_eq!(SimilarityBand::from_percentage(69.99), SimilarityBand::High);
        assert_eq!(SimilarityBand::from_percentage(70.0), SimilarityBand::VeryHigh);
        assert_eq!(SimilarityBand::from_percentage(100.0), SimilarityBand::VeryHigh);
    }

    #[test]
    fn score_scales_to_percentage() {
        let score = SimilarityScore { ratio: 0.25, common: 1, union: 4 };
        assert_eq!(score.percentage(), 25.0);
        assert_eq!(score.band(), SimilarityBand::Minor);
        assert_eq!(score.band().interpretation(), "Minor similarity - possibly coincidental");
    }
}
