//! Reduction of raw text to a stream of alphabet symbols

use std::fmt;

use crate::alphabet::Symbol;

/// Letters of a text in order, upper-cased, with everything else dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    symbols: Vec<Symbol>,
}

impl NormalizedText {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Splits the stream into `period` columns.
    /// Column `i` holds every symbol whose position is congruent to `i` mod `period`,
    /// so each column was enciphered with the same key symbol.
    ///
    /// A period of 0 yields no columns.
    pub fn columns(&self, period: usize) -> Vec<Vec<Symbol>> {
        if period == 0 {
            return Vec::new();
        }

        let mut columns: Vec<Vec<Symbol>> =
            vec![Vec::with_capacity(self.symbols.len() / period + 1); period];

        for (i, &symbol) in self.symbols.iter().enumerate() {
            columns[i % period].push(symbol);
        }

        columns
    }
}

impl FromIterator<Symbol> for NormalizedText {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| write!(f, "{symbol}"))
    }
}

/// Cleans text by keeping only alphabetic characters, case-folded to uppercase.
pub fn normalize(text: &str) -> NormalizedText {
    text.chars().filter_map(Symbol::from_char).collect()
}
