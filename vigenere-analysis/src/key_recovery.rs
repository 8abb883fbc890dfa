//! Key reconstruction by per-column frequency analysis

use tracing::debug;

use crate::alphabet::{count_frequencies, Symbol};
use crate::key::Key;
use crate::normalize::NormalizedText;

/// Finds the most frequent symbol of a column.
///
/// When several symbols share the highest count, the one that occurs first in
/// the column wins. Returns `None` for an empty column.
pub fn most_frequent_symbol(column: &[Symbol]) -> Option<Symbol> {
    let frequencies = count_frequencies(column);
    let max_count: usize = frequencies.iter().copied().max().unwrap_or(0);

    column
        .iter()
        .copied()
        .find(|symbol| frequencies[symbol.index()] == max_count)
}

/// Reconstructs the Vigenère key for a known period.
///
/// Each column is assumed to map its most frequent symbol onto `reference_symbol`
/// ('E' for English), so the key symbol is their difference mod 26.
/// Empty columns, which only occur when the text is shorter than the period,
/// fall back to 'A'.
pub fn recover_key(normalized: &NormalizedText, period: usize, reference_symbol: Symbol) -> Key {
    let key: Key = normalized
        .columns(period)
        .iter()
        .map(|column| {
            most_frequent_symbol(column).map_or(Symbol::A, |most_frequent| most_frequent - reference_symbol)
        })
        .collect();

    debug!(period, key = %key, "recovered key");
    key
}
