//! Error types for rapid_stemmer
//!
//! The step pipeline itself is total: every word maps to a stem and no rule
//! raises. Errors exist only at the API boundary, for callers that opt into
//! the strict charset policy.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StemError>;

/// Main error type for rapid_stemmer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StemError {
    /// Input contains a character outside the lowercase ASCII alphabet
    /// while the strict charset policy is active
    #[error("non-alphabetic character {character:?} at byte {position} of {word:?}")]
    NonAlphabetic {
        word: String,
        position: usize,
        character: char,
    },
}

impl StemError {
    /// Create a non-alphabetic input error
    pub fn non_alphabetic(word: impl Into<String>, position: usize, character: char) -> Self {
        Self::NonAlphabetic {
            word: word.into(),
            position,
            character,
        }
    }
}
