// src/config/subsystems/processor.rs

use serde::{Serialize, Deserialize};
use log::LevelFilter;
use crate::error::{Error, Result};
use crate::config::FromIni;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    // Batch comparison settings
    pub use_parallel: bool,
    pub thread_count: usize,

    pub log_level: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            use_parallel: true,
            thread_count: 0,
            log_level: "warn".to_string(),
        }
    }
}

impl FromIni for ProcessorConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "processor" {
            return None;
        }

        match key {
            "use_parallel" => {
                match value.parse() {
                    Ok(flag) => {
                        self.use_parallel = flag;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid use_parallel value (must be true/false): {}", value)
                    ))),
                }
            },
            "thread_count" => {
                match value.parse() {
                    Ok(count) => {
                        self.thread_count = count;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid thread_count: {}", value)
                    ))),
                }
            },
            "log_level" => {
                if parse_level(value).is_some() {
                    self.log_level = value.trim().to_lowercase();
                    Some(Ok(()))
                } else {
                    Some(Err(Error::Config(
                        format!("Invalid log_level: {}", value)
                    )))
                }
            },
            _ => None,
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

impl ProcessorConfig {
    pub fn validate(&self) -> Result<()> {
        if parse_level(&self.log_level).is_none() {
            return Err(Error::config(format!("Invalid log_level: {}", self.log_level)));
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> LevelFilter {
        parse_level(&self.log_level).unwrap_or(LevelFilter::Warn)
    }

    /// Worker count for batch comparison; 0 in the config means 3/4 of the cores.
    pub fn effective_thread_count(&self) -> usize {
        if self.thread_count > 0 {
            self.thread_count
        } else {
            (num_cpus::get() * 3 / 4).max(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_round_trips_through_ini() {
        let mut config = ProcessorConfig::default();
        assert_eq!(config.get_log_level(), LevelFilter::Warn);
        assert!(matches!(config.from_ini_section("processor", "log_level", "DEBUG"), Some(Ok(()))));
        assert_eq!(config.get_log_level(), LevelFilter::Debug);
        assert!(matches!(config.from_ini_section("processor", "log_level", "loud"), Some(Err(_))));
    }

    #[test]
    fn thread_count_defaults_to_cores() {
        let config = ProcessorConfig::default();
        assert!(config.effective_thread_count() >= 1);
        let fixed = ProcessorConfig { thread_count: 3, ..ProcessorConfig::default() };
        assert_eq!(fixed.effective_thread_count(), 3);
    }
}
