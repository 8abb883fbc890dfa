//! Error types for Vigenère operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VigenereError {
    #[error("Invalid key (must contain at least one letter)")]
    InvalidKey,

    #[error("Invalid key symbol {0:?} (only letters A-Z are allowed)")]
    InvalidKeySymbol(char),
}

pub type Result<T> = std::result::Result<T, VigenereError>;
