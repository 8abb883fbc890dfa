//! Vigenère keys

use std::fmt;
use std::str::FromStr;

use crate::alphabet::Symbol;
use crate::error::{Result, VigenereError};

/// A repeating key: one shift per cipher column.
///
/// A key may be empty when built directly from symbols; the cipher rejects
/// it with [`VigenereError::InvalidKey`] at use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    symbols: Vec<Symbol>,
}

impl Key {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Parses a key typed by a user or read from a key file.
    ///
    /// Surrounding whitespace is ignored and letters of either case are accepted.
    /// Blank input is an [`VigenereError::InvalidKey`]; any other non-letter is
    /// an [`VigenereError::InvalidKeySymbol`].
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed: &str = text.trim();
        if trimmed.is_empty() {
            return Err(VigenereError::InvalidKey);
        }

        trimmed
            .chars()
            .map(|c| Symbol::from_char(c).ok_or(VigenereError::InvalidKeySymbol(c)))
            .collect::<Result<Vec<Symbol>>>()
            .map(Key::new)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<Symbol> for Key {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Key::new(iter.into_iter().collect())
    }
}

impl FromStr for Key {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self> {
        Key::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|symbol| write!(f, "{symbol}"))
    }
}
