//! Vigenère encryption and decryption

use crate::alphabet::Symbol;
use crate::error::{Result, VigenereError};
use crate::key::Key;

/// Direction of the shift applied to each letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// ciphertext = plaintext + key
    Encrypt,
    /// plaintext = ciphertext - key
    Decrypt,
}

/// Applies the Vigenère shift to every letter of `text`.
///
/// Letters are read case-insensitively and written uppercase. All other
/// characters are copied unchanged and do not consume a key position.
///
/// # Errors
///
/// [`VigenereError::InvalidKey`] if the key is empty.
pub fn transform(text: &str, key: &Key, direction: Direction) -> Result<String> {
    let shifts: &[Symbol] = key.symbols();
    if shifts.is_empty() {
        return Err(VigenereError::InvalidKey);
    }

    let mut result: String = String::with_capacity(text.len());
    let mut key_index: usize = 0;

    for c in text.chars() {
        match Symbol::from_char(c) {
            Some(symbol) => {
                let shift: Symbol = shifts[key_index % shifts.len()];
                let shifted: Symbol = match direction {
                    Direction::Encrypt => symbol + shift,
                    Direction::Decrypt => symbol - shift,
                };
                result.push(shifted.to_char());

                // Only advance key index for alphabetic characters
                key_index += 1;
            }
            None => result.push(c),
        }
    }

    Ok(result)
}

/// Encrypts text using the Vigenère cipher.
pub fn encrypt(text: &str, key: &Key) -> Result<String> {
    transform(text, key, Direction::Encrypt)
}

/// Decrypts text using the Vigenère cipher.
pub fn decrypt(text: &str, key: &Key) -> Result<String> {
    transform(text, key, Direction::Decrypt)
}
