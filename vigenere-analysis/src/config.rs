//! Tunables for an analysis run and the end-to-end pipeline

use tracing::debug;

use crate::alphabet::Symbol;
use crate::cipher;
use crate::error::Result;
use crate::key::Key;
use crate::key_length::{key_length_candidates, select_key_length, KeyLengthCandidate};
use crate::key_recovery::recover_key;
use crate::normalize::normalize;

/// Longest key period tried by default.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 16;

/// Expected Index of Coincidence of English text.
pub const DEFAULT_REFERENCE_IC: f64 = 0.065;

/// Most frequent letter of English text.
pub const DEFAULT_REFERENCE_SYMBOL: Symbol = Symbol::E;

/// Parameters of a cryptanalysis run.
///
/// Passed by value into each analysis, so independent runs never share state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    pub max_key_length: usize,
    pub reference_ic: f64,
    pub reference_symbol: Symbol,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            reference_ic: DEFAULT_REFERENCE_IC,
            reference_symbol: DEFAULT_REFERENCE_SYMBOL,
        }
    }
}

/// Outcome of [`AnalysisConfig::analyze`].
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Number of letters the statistics were computed from.
    pub letter_count: usize,
    pub key_length: usize,
    pub key: Key,
    /// Every period tried, in increasing order.
    pub candidates: Vec<KeyLengthCandidate>,
}

impl Analysis {
    /// Decrypts `ciphertext` with the recovered key.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        cipher::decrypt(ciphertext, &self.key)
    }
}

impl AnalysisConfig {
    /// Normalizes the ciphertext, estimates the key length and recovers the key.
    pub fn analyze(&self, ciphertext: &str) -> Analysis {
        let normalized = normalize(ciphertext);
        debug!(letters = normalized.len(), config = ?self, "starting analysis");

        let candidates = key_length_candidates(&normalized, self.max_key_length);
        let key_length = select_key_length(&candidates, self.reference_ic);
        let key = recover_key(&normalized, key_length, self.reference_symbol);

        Analysis {
            letter_count: normalized.len(),
            key_length,
            key,
            candidates,
        }
    }
}
