// Arabic normalization table: diacritics, letter folding, tatweel, punctuation and digits

use unicode_categories::UnicodeCategories;
use crate::config::subsystems::ParserConfig;

use super::{CharAction, TextParser};

const DIACRITICS_START: char = '\u{064B}'; // fathatan
const DIACRITICS_END: char = '\u{0652}';   // sukun
const TATWEEL: char = '\u{0640}';

const ALEF: char = '\u{0627}';
const YAA: char = '\u{064A}';
const HAA: char = '\u{0647}';

#[derive(Debug, Clone, Default)]
pub struct ArabicParser {
    settings: ParserConfig,
}

impl ArabicParser {
    pub fn new(settings: ParserConfig) -> Self {
        Self { settings }
    }

    pub fn new_with_defaults() -> Self {
        Self::new(ParserConfig::default())
    }

    pub fn settings(&self) -> &ParserConfig {
        &self.settings
    }

    pub fn is_diacritic(c: char) -> bool {
        (DIACRITICS_START..=DIACRITICS_END).contains(&c)
    }

    fn fold_char(&self, c: char) -> char {
        match c {
            // alef with madda, hamza above, hamza below, wasla
            '\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0671}' => ALEF,
            // alef maksura
            '\u{0649}' if self.settings.fold_alef_maksura => YAA,
            // taa marbuta
            '\u{0629}' => HAA,
            _ => c,
        }
    }

    /// Punctuation under a fixed table: Unicode P* categories plus every ASCII
    /// punctuation character, symbols such as `$` and `+` included.
    pub fn is_punctuation(c: char) -> bool {
        c.is_ascii_punctuation() || c.is_punctuation()
    }

    pub fn is_digit(c: char) -> bool {
        c.is_number_decimal_digit()
    }
}

impl TextParser for ArabicParser {
    fn classify(&self, c: char) -> CharAction {
        if self.settings.remove_diacritics && Self::is_diacritic(c) {
            return CharAction::DropDiacritic;
        }

        let folded = if self.settings.normalize_arabic { self.fold_char(c) } else { c };

        if self.settings.remove_tatweel && folded == TATWEEL {
            return CharAction::DropTatweel;
        }
        if !self.settings.preserve_punctuation && Self::is_punctuation(folded) {
            return CharAction::DropPunctuation;
        }
        if self.settings.remove_numbers && Self::is_digit(folded) {
            return CharAction::DropDigit;
        }

        if folded != c {
            CharAction::Fold(folded)
        } else {
            CharAction::Keep(c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ArabicParser {
        ArabicParser::new_with_defaults()
    }

    #[test]
    fn strips_diacritics() {
        // bismillah with full tashkeel
        let voweled = "بِسْمِ اللَّهِ";
        assert_eq!(parser().normalize(voweled), "بسم الله");
    }

    #[test]
    fn keeps_marks_outside_the_range() {
        // superscript alef (U+0670) is not in U+064B..=U+0652
        assert_eq!(parser().normalize("ذٰلك"), "ذٰلك");
    }

    #[test]
    fn folds_letter_variants() {
        let p = parser();
        assert_eq!(p.normalize("أحمد"), "احمد");
        assert_eq!(p.normalize("إسلام"), "اسلام");
        assert_eq!(p.normalize("آمن"), "امن");
        assert_eq!(p.normalize("ٱلكتاب"), "الكتاب");
        assert_eq!(p.normalize("على"), "علي");
        assert_eq!(p.normalize("مدرسة"), "مدرسه");
    }

    #[test]
    fn hamza_seats_on_waw_and_yaa_are_untouched() {
        assert_eq!(parser().normalize("مؤمن سائل"), "مؤمن سائل");
    }

    #[test]
    fn alef_maksura_can_stay_distinct() {
        let strict = ArabicParser::new(ParserConfig {
            fold_alef_maksura: false,
            ..ParserConfig::default()
        });
        assert_eq!(strict.normalize("على"), "على");
        assert_eq!(strict.normalize("مدرسة"), "مدرسه");
    }

    #[test]
    fn removes_tatweel_punctuation_and_digits() {
        let p = parser();
        assert_eq!(p.normalize("كـــتاب"), "كتاب");
        assert_eq!(p.normalize("نعم، لا؛ لماذا؟"), "نعم لا لماذا");
        assert_eq!(p.normalize("سنة ١٤٤٥ و 2024"), "سنه  و ");
        assert_eq!(p.normalize("«قال»: (نعم)!"), "قال نعم");
        assert_eq!(p.normalize("a+b=$c"), "abc");
    }

    #[test]
    fn whitespace_and_latin_pass_through() {
        assert_eq!(parser().normalize("abc def\nghi"), "abc def\nghi");
    }

    #[test]
    fn normalization_is_idempotent() {
        let p = parser();
        let samples = [
            "قَالَ رَسُولُ اللَّهِ ﷺ: «إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ»",
            "الـــــمدرسة الأولى، ١٢٣ إلى آخره...",
            "mixed نص with أحرف 42!",
            "",
        ];
        for sample in samples {
            let once = p.normalize(sample);
            assert_eq!(p.normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn output_is_never_longer_than_input() {
        let p = parser();
        let text = "إِنَّ الدِّينَ عِنْدَ اللَّهِ الْإِسْلَامُ.";
        assert!(p.normalize(text).chars().count() <= text.chars().count());
    }

    #[test]
    fn stats_count_each_class() {
        let (normalized, stats) = parser().normalize_with_stats("أَحـمد، ٣");
        assert_eq!(normalized, "احمد ");
        assert_eq!(stats.input_chars, 9);
        assert_eq!(stats.output_chars, 5);
        assert_eq!(stats.folded, 1);
        assert_eq!(stats.diacritics, 1);
        assert_eq!(stats.tatweel, 1);
        assert_eq!(stats.punctuation, 1);
        assert_eq!(stats.digits, 1);
    }

    #[test]
    fn decode_rejects_malformed_utf8() {
        let p = parser();
        assert_eq!(p.decode("سلام".as_bytes()).unwrap(), "سلام");
        let err = p.decode(&[0xD8, 0xB3, 0xFF, 0x41]).unwrap_err();
        assert!(matches!(err, super::super::ParserError::InvalidEncoding { valid_up_to: 2, .. }));
    }

    #[test]
    fn disabled_steps_leave_text_alone() {
        let passthrough = ArabicParser::new(ParserConfig {
            remove_diacritics: false,
            normalize_arabic: false,
            remove_tatweel: false,
            remove_numbers: false,
            preserve_punctuation: true,
            fold_alef_maksura: true,
        });
        let text = "أَحـمد، ٣";
        assert_eq!(passthrough.normalize(text), text);
    }
}
