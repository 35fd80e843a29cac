// End-to-end comparison of two documents

use std::path::Path;
use log::debug;

use crate::config::TashabuhConfig;
use crate::config::subsystems::GeneratorConfig;
use crate::error::{Error, Result};
use crate::ngram::{Fingerprint, NGramGenerator};
use crate::parser::{ArabicParser, TextParser};
use crate::utils::mmap::MmapFileHandler;

use super::similarity::SimilarityCalculator;
use super::types::{Comparison, DocumentSummary};

const LABELS: [&str; 2] = ["first", "second"];

/// Normalizes, fingerprints and scores a pair of documents.
///
/// The detector owns one fingerprint slot per document. Every comparison
/// starts with [`reset`](Self::reset), so reusing an instance never leaks
/// shingles from a previous pair. An instance is not meant to be shared
/// between threads; batch callers build one per pair.
pub struct PlagiarismDetector<P: TextParser = ArabicParser> {
    parser: P,
    generator: NGramGenerator,
    calculator: SimilarityCalculator,
    ngrams1: Fingerprint,
    ngrams2: Fingerprint,
}

impl PlagiarismDetector<ArabicParser> {
    pub fn new(config: &TashabuhConfig) -> Result<Self> {
        config.validate()?;
        Self::with_parser(ArabicParser::new(config.parser.clone()), config.generator.clone())
    }

    /// Default pipeline with the given window; 0 falls back to the default size.
    pub fn with_ngram_size(ngram_size: usize) -> Self {
        let generator = if ngram_size > 0 {
            GeneratorConfig::with_ngram_size(ngram_size)
        } else {
            GeneratorConfig::default()
        };
        Self::build(ArabicParser::new_with_defaults(), generator)
    }
}

impl Default for PlagiarismDetector<ArabicParser> {
    fn default() -> Self {
        Self::with_ngram_size(0)
    }
}

impl<P: TextParser> PlagiarismDetector<P> {
    pub fn with_parser(parser: P, generator: GeneratorConfig) -> Result<Self> {
        generator.validate()?;
        Ok(Self::build(parser, generator))
    }

    fn build(parser: P, generator: GeneratorConfig) -> Self {
        Self {
            parser,
            generator: NGramGenerator::from_validated(generator),
            calculator: SimilarityCalculator::new(),
            ngrams1: Fingerprint::new(),
            ngrams2: Fingerprint::new(),
        }
    }

    pub fn ngram_size(&self) -> usize {
        self.generator.ngram_size()
    }

    /// Clears both fingerprint slots.
    pub fn reset(&mut self) {
        self.ngrams1.clear();
        self.ngrams2.clear();
    }

    /// Fingerprints left by the last comparison, first document then second.
    pub fn fingerprints(&self) -> (&Fingerprint, &Fingerprint) {
        (&self.ngrams1, &self.ngrams2)
    }

    pub fn compare_bytes(&mut self, first: &[u8], second: &[u8]) -> Result<Comparison> {
        self.reset();

        for (label, bytes) in LABELS.iter().zip([first, second]) {
            if bytes.is_empty() {
                return Err(Error::empty_input(format!("{} document is empty", label)));
            }
        }

        let first_text = self.decode(LABELS[0], first)?;
        let second_text = self.decode(LABELS[1], second)?;

        let first_summary = Self::fingerprint_document(
            &self.parser, &self.generator, LABELS[0], first.len(), first_text, &mut self.ngrams1,
        );
        let second_summary = Self::fingerprint_document(
            &self.parser, &self.generator, LABELS[1], second.len(), second_text, &mut self.ngrams2,
        );

        let score = self.calculator.jaccard(&self.ngrams1, &self.ngrams2);
        debug!("Similarity {:.2}% ({} common / {} total shingles)",
            score.percentage(), score.common, score.union);

        Ok(Comparison {
            score,
            ngram_size: self.generator.ngram_size(),
            hash_unit: self.generator.config().hash_unit,
            first: first_summary,
            second: second_summary,
        })
    }

    pub fn compare_texts(&mut self, first: &str, second: &str) -> Result<Comparison> {
        self.compare_bytes(first.as_bytes(), second.as_bytes())
    }

    pub fn compare_files<A: AsRef<Path>, B: AsRef<Path>>(&mut self, first: A, second: B) -> Result<Comparison> {
        let first = MmapFileHandler::open(first)?;
        let second = MmapFileHandler::open(second)?;
        debug!("Comparing {:?} with {:?}", first.get_path(), second.get_path());
        self.compare_bytes(first.get_content(), second.get_content())
    }

    fn decode<'a>(&self, label: &str, bytes: &'a [u8]) -> Result<&'a str> {
        self.parser
            .decode(bytes)
            .map_err(|e| Error::decoding(format!("{} document: {}", label, e)))
    }

    fn fingerprint_document(
        parser: &P,
        generator: &NGramGenerator,
        label: &str,
        input_bytes: usize,
        text: &str,
        slot: &mut Fingerprint,
    ) -> DocumentSummary {
        let (normalized, stats) = parser.normalize_with_stats(text);
        generator.fingerprint_into(&normalized, slot);
        debug!("{} document: {} -> {} chars ({} folded, {} diacritics, {} tatweel, {} punctuation, {} digits), {} shingles",
            label, stats.input_chars, stats.output_chars, stats.folded, stats.diacritics,
            stats.tatweel, stats.punctuation, stats.digits, slot.len());

        DocumentSummary {
            input_bytes,
            normalized_units: generator.unit_len(&normalized),
            shingles: slot.len(),
            normalization: stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_scenario_scores_one_seventh() {
        let mut detector = PlagiarismDetector::with_ngram_size(3);
        let result = detector.compare_texts("abcdef", "abcxyz").unwrap();
        assert_eq!(result.score.common, 1);
        assert_eq!(result.score.union, 7);
        assert!((result.percentage() - 100.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_is_an_error_not_a_score() {
        let mut detector: PlagiarismDetector = PlagiarismDetector::default();
        assert!(matches!(detector.compare_bytes(b"", b"abc"), Err(Error::EmptyInput(_))));
        assert!(matches!(detector.compare_bytes(b"abc", b""), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn invalid_utf8_is_a_decoding_error() {
        let mut detector: PlagiarismDetector = PlagiarismDetector::default();
        let err = detector.compare_bytes(b"abc", &[0x61, 0xC3, 0x28]).unwrap_err();
        match err {
            Error::Decoding(msg) => assert!(msg.starts_with("second document")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reuse_does_not_leak_previous_shingles() {
        let mut detector = PlagiarismDetector::with_ngram_size(3);
        detector.compare_texts("abcdefgh", "abcdefgh").unwrap();
        assert_eq!(detector.fingerprints().0.len(), 6);

        let second = detector.compare_texts("xyz", "xyz").unwrap();
        assert_eq!(detector.fingerprints().0.len(), 1);
        assert_eq!(second.percentage(), 100.0);

        let fresh = PlagiarismDetector::with_ngram_size(3).compare_texts("abcxyz", "xyzabc").unwrap();
        let reused = detector.compare_texts("abcxyz", "xyzabc").unwrap();
        assert_eq!(fresh, reused);
    }

    #[test]
    fn failed_comparison_leaves_slots_empty() {
        let mut detector = PlagiarismDetector::with_ngram_size(3);
        detector.compare_texts("abcdef", "abcdef").unwrap();
        assert!(detector.compare_bytes(b"abcdef", b"").is_err());
        assert!(detector.fingerprints().0.is_empty());
        assert!(detector.fingerprints().1.is_empty());
    }

    #[test]
    fn zero_window_falls_back_to_default() {
        assert_eq!(PlagiarismDetector::with_ngram_size(0).ngram_size(), 3);
        let config = TashabuhConfig {
            generator: GeneratorConfig::with_ngram_size(0),
            ..TashabuhConfig::default()
        };
        assert!(matches!(PlagiarismDetector::new(&config), Err(Error::InvalidNgramSize(_))));
    }

    #[test]
    fn summaries_describe_each_document() {
        let mut detector = PlagiarismDetector::with_ngram_size(3);
        let result = detector.compare_texts("كِتَابٌ", "abc").unwrap();
        assert_eq!(result.first.input_bytes, "كِتَابٌ".len());
        assert_eq!(result.first.normalization.diacritics, 3);
        assert_eq!(result.first.normalized_units, "كتاب".len());
        assert_eq!(result.second.shingles, 1);
    }
}
