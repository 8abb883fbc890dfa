//! The 26-letter Latin alphabet and its index arithmetic

use std::fmt;
use std::ops::{Add, Sub};

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A letter of the alphabet, stored as its index (`A` = 0, ..., `Z` = 25).
///
/// Addition and subtraction wrap modulo 26, which is exactly the shift
/// arithmetic of the Vigenère cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    pub const A: Symbol = Symbol(0);
    pub const E: Symbol = Symbol(4);

    /// Looks up an ASCII letter of either case.
    ///
    /// Returns `None` for anything outside the alphabet (digits, punctuation,
    /// whitespace and non-ASCII letters such as `ä`).
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            // Direct offset from 'A', no table scan
            Some(Symbol(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Builds a symbol from an arbitrary index, reduced modulo 26.
    pub fn from_index(index: usize) -> Self {
        Symbol((index % ALPHABET_LEN) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The uppercase letter for this symbol.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl Add for Symbol {
    type Output = Symbol;

    fn add(self, rhs: Symbol) -> Symbol {
        Symbol((self.0 + rhs.0) % ALPHABET_LEN as u8)
    }
}

impl Sub for Symbol {
    type Output = Symbol;

    fn sub(self, rhs: Symbol) -> Symbol {
        Symbol((self.0 + ALPHABET_LEN as u8 - rhs.0) % ALPHABET_LEN as u8)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Counts how often each symbol occurs.
///
/// # Arguments
///
/// * `symbols` - The symbols to count.
///
/// # Returns
///
/// An array of 26 counts, indexed by symbol (A=0, B=1, etc.).
pub fn count_frequencies(symbols: &[Symbol]) -> [usize; ALPHABET_LEN] {
    let mut frequencies: [usize; ALPHABET_LEN] = [0; ALPHABET_LEN];

    for symbol in symbols {
        frequencies[symbol.index()] += 1;
    }

    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_folds_case() {
        assert_eq!(Symbol::from_char('a'), Some(Symbol::A));
        assert_eq!(Symbol::from_char('E'), Some(Symbol::E));
        assert_eq!(Symbol::from_char('z').map(Symbol::index), Some(25));
    }

    #[test]
    fn test_from_char_rejects_non_letters() {
        for c in ['0', ' ', '-', '!', 'ä', 'ß', 'É'] {
            assert_eq!(Symbol::from_char(c), None, "{c:?} should be outside the alphabet");
        }
    }

    #[test]
    fn test_mapping_is_order_preserving() {
        for (index, c) in ('A'..='Z').enumerate() {
            let symbol = Symbol::from_char(c).unwrap();
            assert_eq!(symbol.index(), index);
            assert_eq!(symbol.to_char(), c);
        }
    }

    #[test]
    fn test_arithmetic_wraps() {
        let y = Symbol::from_index(24);
        let d = Symbol::from_index(3);
        assert_eq!((y + d).to_char(), 'B');
        assert_eq!((d - y).to_char(), 'F');
        assert_eq!(Symbol::from_index(26 + 4), Symbol::E);
    }

    #[test]
    fn test_count_frequencies() {
        let symbols: Vec<Symbol> = "ABBA".chars().filter_map(Symbol::from_char).collect();
        let frequencies = count_frequencies(&symbols);
        assert_eq!(frequencies[0], 2);
        assert_eq!(frequencies[1], 2);
        assert_eq!(frequencies.iter().sum::<usize>(), 4);
    }
}
