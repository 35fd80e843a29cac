// src/config/subsystems/generator.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;

pub const DEFAULT_NGRAM_SIZE: usize = 3;
pub const DEFAULT_HASH_BASE: u64 = 256;
pub const DEFAULT_HASH_MODULUS: u64 = 1_000_000_007;

/// The unit a shingle window is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashUnit {
    /// UTF-8 code units of the normalized text.
    Byte,
    /// Unicode scalar values of the normalized text.
    Char,
}

impl HashUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashUnit::Byte => "byte",
            HashUnit::Char => "char",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "byte" | "bytes" | "utf8" => Some(Self::Byte),
            "char" | "character" | "codepoint" => Some(Self::Char),
            _ => None,
        }
    }
}

impl Default for HashUnit {
    fn default() -> Self {
        Self::Byte
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    // Shingle window width, in hash units
    pub ngram_size: usize,
    pub hash_unit: HashUnit,
    pub hash_base: u64,
    pub hash_modulus: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            hash_unit: HashUnit::default(),
            hash_base: DEFAULT_HASH_BASE,
            hash_modulus: DEFAULT_HASH_MODULUS,
        }
    }
}

impl FromIni for GeneratorConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "generator" {
            return None;
        }

        match key {
            "ngram_size" => {
                match value.parse() {
                    Ok(size) if size > 0 => {
                        self.ngram_size = size;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::InvalidNgramSize(
                        format!("must be > 0, got {}", value)
                    ))),
                }
            },
            "hash_unit" => {
                match HashUnit::from_str(value) {
                    Some(unit) => {
                        self.hash_unit = unit;
                        Some(Ok(()))
                    },
                    None => Some(Err(Error::Config(
                        format!("Invalid hash_unit (must be 'byte' or 'char'): {}", value)
                    ))),
                }
            },
            "hash_base" => {
                match value.parse() {
                    Ok(base) if base > 0 => {
                        self.hash_base = base;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid hash_base (must be > 0): {}", value)
                    ))),
                }
            },
            "hash_modulus" => {
                match value.replace('_', "").parse() {
                    Ok(modulus) if modulus > 1 => {
                        self.hash_modulus = modulus;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid hash_modulus (must be > 1): {}", value)
                    ))),
                }
            },
            _ => None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_ngram_size(ngram_size: usize) -> Self {
        Self {
            ngram_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ngram_size == 0 {
            return Err(Error::InvalidNgramSize("must be > 0, got 0".to_string()));
        }
        if self.hash_base == 0 {
            return Err(Error::config("hash_base must be > 0"));
        }
        if self.hash_modulus < 2 {
            return Err(Error::config(format!(
                "hash_modulus must be > 1, got {}", self.hash_modulus
            )));
        }
        Ok(())
    }
}
