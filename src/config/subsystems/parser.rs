// src/config/subsystems/parser.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    pub remove_diacritics: bool,
    pub normalize_arabic: bool,
    pub remove_tatweel: bool,
    pub remove_numbers: bool,
    pub preserve_punctuation: bool,

    // Folding alef-maksura into yaa is lossy; false keeps the two letters apart
    pub fold_alef_maksura: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            remove_diacritics: true,
            normalize_arabic: true,
            remove_tatweel: true,
            remove_numbers: true,
            preserve_punctuation: false,
            fold_alef_maksura: true,
        }
    }
}

fn parse_flag(target: &mut bool, key: &str, value: &str) -> Result<()> {
    match value.parse() {
        Ok(flag) => {
            *target = flag;
            Ok(())
        },
        Err(_) => Err(Error::Config(
            format!("Invalid {} value (must be true/false): {}", key, value)
        )),
    }
}

impl FromIni for ParserConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "text_processing" {
            return None;
        }

        let target = match key {
            "remove_diacritics" => &mut self.remove_diacritics,
            "normalize_arabic" => &mut self.normalize_arabic,
            "remove_tatweel" => &mut self.remove_tatweel,
            "remove_numbers" => &mut self.remove_numbers,
            "preserve_punctuation" => &mut self.preserve_punctuation,
            "fold_alef_maksura" => &mut self.fold_alef_maksura,
            _ => return None,
        };
        Some(parse_flag(target, key, value))
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Returns a description of the current text processing configuration
    pub fn describe(&self) -> String {
        let mut description = Vec::new();

        if self.remove_diacritics {
            description.push("removing diacritical marks");
        }
        if self.normalize_arabic {
            description.push("normalizing Arabic letter variants");
            if !self.fold_alef_maksura {
                description.push("keeping alef-maksura distinct");
            }
        }
        if self.remove_tatweel {
            description.push("removing tatweel");
        }
        if self.remove_numbers {
            description.push("removing digits");
        }
        if !self.preserve_punctuation {
            description.push("removing punctuation");
        }

        if description.is_empty() {
            "no text processing applied".to_string()
        } else {
            description.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse_from_ini() {
        let mut config = ParserConfig::default();
        assert!(matches!(
            config.from_ini_section("text_processing", "remove_tatweel", "false"),
            Some(Ok(()))
        ));
        assert!(!config.remove_tatweel);
        assert!(matches!(
            config.from_ini_section("text_processing", "remove_numbers", "maybe"),
            Some(Err(Error::Config(_)))
        ));
        assert!(config.from_ini_section("text_processing", "stop_words_file", "x").is_none());
        assert!(config.from_ini_section("generator", "remove_tatweel", "true").is_none());
    }

    #[test]
    fn describe_lists_active_steps() {
        let description = ParserConfig::default().describe();
        assert!(description.contains("removing diacritical marks"));
        assert!(description.contains("removing punctuation"));

        let off = ParserConfig {
            remove_diacritics: false,
            normalize_arabic: false,
            remove_tatweel: false,
            remove_numbers: false,
            preserve_punctuation: true,
            fold_alef_maksura: true,
        };
        assert_eq!(off.describe(), "no text processing applied");
    }
}
