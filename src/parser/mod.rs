pub mod arabic;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
   #[error("invalid UTF-8 sequence at byte {valid_up_to}")]
   InvalidEncoding {
       valid_up_to: usize,
       error_len: Option<usize>,
   },
}

pub type Result<T> = std::result::Result<T, ParserError>;

/// What the normalizer does with a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharAction {
    Keep(char),
    /// Letter variant replaced by its canonical form.
    Fold(char),
    DropDiacritic,
    DropTatweel,
    DropPunctuation,
    DropDigit,
}

impl CharAction {
    pub fn output(self) -> Option<char> {
        match self {
            CharAction::Keep(c) | CharAction::Fold(c) => Some(c),
            _ => None,
        }
    }
}

/// Counters gathered while normalizing one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationStats {
    pub input_chars: usize,
    pub output_chars: usize,
    pub folded: usize,
    pub diacritics: usize,
    pub tatweel: usize,
    pub punctuation: usize,
    pub digits: usize,
}

impl NormalizationStats {
    fn record(&mut self, action: CharAction) {
        self.input_chars += 1;
        match action {
            CharAction::Keep(_) => self.output_chars += 1,
            CharAction::Fold(_) => {
                self.output_chars += 1;
                self.folded += 1;
            },
            CharAction::DropDiacritic => self.diacritics += 1,
            CharAction::DropTatweel => self.tatweel += 1,
            CharAction::DropPunctuation => self.punctuation += 1,
            CharAction::DropDigit => self.digits += 1,
        }
    }
}

pub trait TextParser: Sync + Send {
    /// Decide the fate of one codepoint; the only method a script table must provide.
    fn classify(&self, c: char) -> CharAction;

    /// Strict UTF-8 decoding. Malformed input is an error, never replaced.
    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<&'a str> {
        std::str::from_utf8(bytes).map_err(|e| ParserError::InvalidEncoding {
            valid_up_to: e.valid_up_to(),
            error_len: e.error_len(),
        })
    }

    fn normalize_char(&self, c: char) -> Option<char> {
        self.classify(c).output()
    }

    fn normalize(&self, text: &str) -> String {
        text.chars().filter_map(|c| self.normalize_char(c)).collect()
    }

    fn normalize_with_stats(&self, text: &str) -> (String, NormalizationStats) {
        let mut stats = NormalizationStats::default();
        let mut normalized = String::with_capacity(text.len());
        for c in text.chars() {
            let action = self.classify(c);
            stats.record(action);
            if let Some(out) = action.output() {
                normalized.push(out);
            }
        }
        (normalized, stats)
    }
}

pub use self::arabic::ArabicParser;
