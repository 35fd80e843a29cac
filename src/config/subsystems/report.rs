// src/config/subsystems/report.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub format: OutputFormat,
    // Decimal places for printed percentages
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 2,
        }
    }
}

impl FromIni for ReportConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "report" {
            return None;
        }

        match key {
            "format" => {
                match OutputFormat::from_str(value) {
                    Some(format) => {
                        self.format = format;
                        Some(Ok(()))
                    },
                    None => Some(Err(Error::Config(
                        format!("Invalid format (must be 'text' or 'json'): {}", value)
                    ))),
                }
            },
            "precision" => {
                match value.parse() {
                    Ok(precision) if precision <= 10 => {
                        self.precision = precision;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid precision (must be 0-10): {}", value)
                    ))),
                }
            },
            _ => None,
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.precision > 10 {
            return Err(Error::config(format!("precision too large: {}", self.precision)));
        }
        Ok(())
    }
}
