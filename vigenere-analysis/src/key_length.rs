//! Key length estimation using the Index of Coincidence
//!
//! Each candidate period splits the letters into columns. When the period is
//! right, every column is a plain Caesar shift of natural language and its IC
//! sits near the language's reference value; when it is wrong, the columns mix
//! several shifts and their IC drops toward the uniform 1/26.

use tracing::debug;

use crate::alphabet::{count_frequencies, Symbol};
use crate::normalize::NormalizedText;

/// A candidate period with the mean IC of its columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthCandidate {
    pub length: usize,
    pub average_ic: f64,
}

/// Calculates the Index of Coincidence (IC) for the given symbols.
///
/// # Arguments
///
/// * `symbols` - The symbols to analyze.
///
/// # Returns
///
/// The Index of Coincidence value (0.0 if there are fewer than 2 symbols).
pub fn index_of_coincidence(symbols: &[Symbol]) -> f64 {
    let total: usize = symbols.len();

    // No pair can be drawn from fewer than 2 symbols
    if total < 2 {
        return 0.0;
    }

    let frequencies = count_frequencies(symbols);

    // IC = sum of (frequency_i * (frequency_i - 1)) / (total * (total - 1))
    let numerator: f64 = frequencies
        .iter()
        .map(|&freq| (freq * freq.saturating_sub(1)) as f64)
        .sum();

    let denominator = (total * (total - 1)) as f64;
    numerator / denominator
}

/// Computes the average column IC for every period in `1..=max_length`.
///
/// A `max_length` of 0 still evaluates period 1.
pub fn key_length_candidates(normalized: &NormalizedText, max_length: usize) -> Vec<KeyLengthCandidate> {
    (1..=max_length.max(1))
        .map(|length| {
            let columns: Vec<Vec<Symbol>> = normalized.columns(length);
            let average_ic: f64 = columns
                .iter()
                .map(|column| index_of_coincidence(column))
                .sum::<f64>()
                / length as f64;

            debug!(length, average_ic, "key length candidate");
            KeyLengthCandidate { length, average_ic }
        })
        .collect()
}

/// Picks the candidate whose average IC is closest to `reference_ic`.
///
/// The running best starts as period 1 with an IC of 0.0, and only a strictly
/// closer candidate replaces it, so the smallest period wins ties and a stream
/// with no usable statistics yields 1.
pub fn select_key_length(candidates: &[KeyLengthCandidate], reference_ic: f64) -> usize {
    let mut best_key_length: usize = 1;
    let mut best_average_ic: f64 = 0.0;

    for candidate in candidates {
        if (candidate.average_ic - reference_ic).abs() < (best_average_ic - reference_ic).abs() {
            best_average_ic = candidate.average_ic;
            best_key_length = candidate.length;
        }
    }

    debug!(key_length = best_key_length, average_ic = best_average_ic, "selected key length");
    best_key_length
}

/// Estimates the period of the repeating key.
///
/// # Arguments
///
/// * `normalized` - The ciphertext letters.
/// * `max_length` - Longest period to consider.
/// * `reference_ic` - Expected IC of the plaintext language (0.065 for English).
///
/// # Returns
///
/// The period in `1..=max(max_length, 1)` whose average column IC is closest to `reference_ic`.
pub fn estimate_length(normalized: &NormalizedText, max_length: usize, reference_ic: f64) -> usize {
    let candidates = key_length_candidates(normalized, max_length);
    select_key_length(&candidates, reference_ic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn symbols(text: &str) -> Vec<Symbol> {
        normalize(text).symbols().to_vec()
    }

    #[test]
    fn test_ic_calculation() {
        let ic = index_of_coincidence(&symbols("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));
        assert_eq!(ic, 0.0); // No letter repeats
    }

    #[test]
    fn test_ic_known_value() {
        // 2*1 + 2*1 pairs out of 4*3
        let ic = index_of_coincidence(&symbols("AABB"));
        assert!((ic - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(index_of_coincidence(&symbols("QQQQ")), 1.0);
    }

    #[test]
    fn test_ic_too_few_samples() {
        assert_eq!(index_of_coincidence(&[]), 0.0);
        assert_eq!(index_of_coincidence(&symbols("X")), 0.0);
    }

    #[test]
    fn test_candidates_cover_every_period() {
        let normalized = normalize("ABCABCABCABC");
        let candidates = key_length_candidates(&normalized, 16);
        let lengths: Vec<usize> = candidates.iter().map(|c| c.length).collect();
        assert_eq!(lengths, (1..=16).collect::<Vec<usize>>());
        assert_eq!(candidates[0].average_ic, index_of_coincidence(normalized.symbols()));
        assert_eq!(candidates[2].average_ic, 1.0);
    }

    #[test]
    fn test_estimate_empty_text() {
        assert_eq!(estimate_length(&normalize(""), 16, 0.065), 1);
    }

    #[test]
    fn test_estimate_zero_max_length() {
        let normalized = normalize("HELLOWORLD");
        assert_eq!(key_length_candidates(&normalized, 0).len(), 1);
        assert_eq!(estimate_length(&normalized, 0, 0.065), 1);
    }

    #[test]
    fn test_estimate_periodic_stream() {
        // Every column of period 3 (and 6, 9, ...) is constant; 3 is found first
        let normalized = normalize(&"ABC".repeat(10));
        assert_eq!(estimate_length(&normalized, 16, 1.0), 3);
    }

    #[test]
    fn test_select_prefers_smallest_on_tie() {
        let candidates = [
            KeyLengthCandidate { length: 1, average_ic: 0.040 },
            KeyLengthCandidate { length: 2, average_ic: 0.070 },
            KeyLengthCandidate { length: 3, average_ic: 0.041 },
            KeyLengthCandidate { length: 4, average_ic: 0.070 },
        ];
        assert_eq!(select_key_length(&candidates, 0.065), 2);
    }

    #[test]
    fn test_select_keeps_default_when_nothing_beats_zero() {
        // Both candidates are further from the reference than an IC of 0.0 would be
        let candidates = [
            KeyLengthCandidate { length: 1, average_ic: 0.5 },
            KeyLengthCandidate { length: 2, average_ic: 0.4 },
        ];
        assert_eq!(select_key_length(&candidates, 0.065), 1);
    }
}
