//! # Vigenère Analysis Library
//!
//! Classical cryptanalysis of the Vigenère cipher over the 26-letter Latin alphabet.
//!
//! ## Pipeline
//!
//! - **Normalize** - keep only letters, upper-cased
//! - **Estimate key length** - pick the period whose columns have an Index of
//!   Coincidence closest to that of natural language
//! - **Recover key** - per column, map the most frequent letter onto 'E'
//! - **Decrypt** - undo the shifts on the original text, keeping its punctuation
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{decrypt, encrypt, normalize, estimate_length, recover_key, Key, Symbol};
//!
//! let key: Key = "LEMON".parse()?;
//! let ciphertext = encrypt("Attack at dawn!", &key)?;
//! assert_eq!(ciphertext, "LXFOPV EF RNHR!");
//! assert_eq!(decrypt(&ciphertext, &key)?, "ATTACK AT DAWN!");
//!
//! // Far too short for statistics, but every step is total
//! let normalized = normalize(&ciphertext);
//! let period = estimate_length(&normalized, 16, 0.065);
//! let guess = recover_key(&normalized, period, Symbol::E);
//! assert_eq!(guess.len(), period);
//! # Ok::<(), vigenere_analysis::VigenereError>(())
//! ```

pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod error;
pub mod key;
pub mod key_length;
pub mod key_recovery;
pub mod normalize;

pub use alphabet::{Symbol, ALPHABET_LEN};
pub use cipher::{decrypt, encrypt, transform, Direction};
pub use config::{Analysis, AnalysisConfig};
pub use error::{Result, VigenereError};
pub use key::Key;
pub use key_length::{estimate_length, index_of_coincidence, key_length_candidates, KeyLengthCandidate};
pub use key_recovery::{most_frequent_symbol, recover_key};
pub use normalize::{normalize, NormalizedText};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
