// src/ngram/generator/core.rs

use log::trace;

use crate::config::subsystems::generator::{GeneratorConfig, HashUnit};
use crate::error::Result;
use crate::ngram::types::Fingerprint;

use super::rolling::RollingHash;

/// Builds shingle fingerprints from normalized text.
///
/// Every window of `ngram_size` units contributes
/// `sum(unit[i+j] * BASE^(k-1-j)) mod M` to the set. Texts shorter than one
/// window produce an empty fingerprint.
#[derive(Debug, Clone)]
pub struct NGramGenerator {
    pub(crate) config: GeneratorConfig,
}

impl NGramGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    // Caller has already run `GeneratorConfig::validate`
    pub(crate) fn from_validated(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn ngram_size(&self) -> usize {
        self.config.ngram_size
    }

    pub fn fingerprint(&self, text: &str) -> Fingerprint {
        let mut fingerprint = Fingerprint::with_capacity(self.window_count(text));
        self.fingerprint_into(text, &mut fingerprint);
        fingerprint
    }

    /// Adds the windows of `text` to an existing set. The detector uses this to
    /// refill its own slots after a reset.
    pub(crate) fn fingerprint_into(&self, text: &str, fingerprint: &mut Fingerprint) {
        match self.config.hash_unit {
            HashUnit::Byte => self.hash_windows(text.as_bytes(), fingerprint),
            HashUnit::Char => {
                let units: Vec<u32> = text.chars().map(u32::from).collect();
                self.hash_windows(&units, fingerprint);
            }
        }
    }

    /// Number of windows `text` yields before duplicates collapse.
    pub fn window_count(&self, text: &str) -> usize {
        let len = self.unit_len(text);
        (len + 1).saturating_sub(self.config.ngram_size)
    }

    pub fn unit_len(&self, text: &str) -> usize {
        match self.config.hash_unit {
            HashUnit::Byte => text.len(),
            HashUnit::Char => text.chars().count(),
        }
    }

    /// Hash of a single window computed directly from the polynomial.
    pub fn hash_window<T: Copy + Into<u64>>(&self, window: &[T]) -> u64 {
        let mut hash = RollingHash::new(self.config.hash_base, self.config.hash_modulus, window.len());
        for &unit in window {
            hash.push(unit.into());
        }
        hash.value()
    }

    fn hash_windows<T: Copy + Into<u64>>(&self, units: &[T], fingerprint: &mut Fingerprint) {
        let k = self.config.ngram_size;
        if units.len() < k {
            trace!("Text too short for ngram size {} (length: {})", k, units.len());
            return;
        }

        let mut hash = RollingHash::new(self.config.hash_base, self.config.hash_modulus, k);
        for &unit in &units[..k] {
            hash.push(unit.into());
        }
        fingerprint.insert(hash.value());

        for i in k..units.len() {
            hash.roll(units[i - k].into(), units[i].into());
            fingerprint.insert(hash.value());
        }

        trace!("Hashed {} windows of {} units into {} distinct shingles",
            units.len() - k + 1, k, fingerprint.len());
    }
}

impl Default for NGramGenerator {
    fn default() -> Self {
        Self::from_validated(GeneratorConfig::default())
    }
}
