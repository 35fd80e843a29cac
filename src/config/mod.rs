pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::{Error, Result};
use log::{info, warn, trace};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TashabuhConfig {
    pub parser: subsystems::ParserConfig,
    pub generator: subsystems::GeneratorConfig,
    pub processor: subsystems::ProcessorConfig,
    pub report: subsystems::ReportConfig,
}

impl TashabuhConfig {
    pub fn validate(&self) -> Result<()> {
        self.parser.validate()?;
        self.generator.validate()?;
        self.processor.validate()?;
        self.report.validate()?;
        Ok(())
    }

    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        let absolute_path = std::fs::canonicalize(&path)
            .unwrap_or_else(|_| path.as_ref().to_path_buf());

        trace!("Loading configuration from: {:?}", absolute_path);

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::file_access(path.as_ref(), e))?;
        let config = Self::from_ini_str(&content)?;
        info!("Loaded configuration from {:?}", absolute_path);
        Ok(config)
    }

    pub fn from_ini_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len()-1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                // Delegate to appropriate subsystem config
                let handled = match current_section.as_str() {
                    "text_processing" => config.parser.from_ini_section(&current_section, key, value),
                    "generator" => config.generator.from_ini_section(&current_section, key, value),
                    "processor" => config.processor.from_ini_section(&current_section, key, value),
                    "report" => config.report.from_ini_section(&current_section, key, value),
                    _ => None,
                };

                match handled {
                    Some(Err(e)) => warn!("Error processing config key {}={}: {}", key, value, e),
                    Some(Ok(())) => {},
                    None => warn!("Unrecognized config key: {}={} in section [{}]", key, value, current_section),
                }
            } else {
                warn!("Line {}: ignoring malformed config line: {}", line_num + 1, line);
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::HashUnit;

    #[test]
    fn defaults_validate() {
        let config = TashabuhConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generator.ngram_size, 3);
        assert_eq!(config.generator.hash_unit, HashUnit::Byte);
    }

    #[test]
    fn sections_are_routed_to_subsystems() {
        let ini = "\
# comment
[text_processing]
fold_alef_maksura = false

[generator]
ngram_size = 5
hash_unit = char

[processor]
thread_count = 2

[report]
format = json
precision = 4
";
        let config = TashabuhConfig::from_ini_str(ini).unwrap();
        assert!(!config.parser.fold_alef_maksura);
        assert_eq!(config.generator.ngram_size, 5);
        assert_eq!(config.generator.hash_unit, HashUnit::Char);
        assert_eq!(config.processor.thread_count, 2);
        assert_eq!(config.report.precision, 4);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let ini = "[generator]\nngram_size = 0\nunknown = 1\n[nowhere]\nkey = value\n";
        let config = TashabuhConfig::from_ini_str(ini).unwrap();
        assert_eq!(config.generator.ngram_size, 3);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ini");
        match TashabuhConfig::from_ini(&path) {
            Err(Error::FileAccess { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
