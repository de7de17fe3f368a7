//! Core types for rapid_stemmer
//!
//! This module defines the word buffer threaded through the step pipeline
//! and the charset policy governing input outside the algorithm's alphabet.

use serde::{Deserialize, Serialize};

// ============================================================================
// Charset Policy
// ============================================================================

/// Policy for characters outside the 26 lowercase ASCII letters.
///
/// The Porter rule table is defined over `a-z` only. ASCII digits and
/// punctuation classify as consonants, so words containing them flow
/// through the pipeline (usually unchanged); what to do with anything
/// beyond ASCII is a policy decision this enum makes explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharsetPolicy {
    /// Process ASCII input as-is; return words containing non-ASCII
    /// characters unchanged after normalization.
    #[default]
    Lenient,
    /// Reject any character outside `a-z` after normalization.
    Strict,
}

impl CharsetPolicy {
    /// Returns `true` when out-of-alphabet characters are rejected.
    pub fn is_strict(self) -> bool {
        matches!(self, CharsetPolicy::Strict)
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "strict" => CharsetPolicy::Strict,
            _ => CharsetPolicy::Lenient,
        }
    }
}

impl std::str::FromStr for CharsetPolicy {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(CharsetPolicy::parse(value))
    }
}

// ============================================================================
// Word
// ============================================================================

/// An owned, normalized word flowing through the step pipeline.
///
/// Each step consumes the buffer and returns it, possibly truncated or with
/// its ending rewritten. Ownership moves stage to stage, so no two logical
/// words ever share backing storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Build a word from raw input: trim surrounding whitespace, lowercase.
    pub fn normalize(input: &str) -> Self {
        Word(input.trim().to_lowercase())
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the word is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The word as raw bytes, as consumed by the classifier and measure.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Check for a literal suffix.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }

    /// Unwrap into the final stem.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The bytes before the final `suffix_len` positions (the candidate
    /// stem a rule's gate is evaluated over).
    pub(crate) fn stem_of(&self, suffix_len: usize) -> &[u8] {
        &self.0.as_bytes()[..self.0.len() - suffix_len]
    }

    /// Cut the word down to `new_len` bytes.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        self.0.truncate(new_len);
    }

    /// Append a letter.
    pub(crate) fn push(&mut self, letter: char) {
        self.0.push(letter);
    }

    /// Append a literal.
    pub(crate) fn push_str(&mut self, literal: &str) {
        self.0.push_str(literal);
    }

    /// Drop the final letter.
    pub(crate) fn drop_last(&mut self) {
        self.0.pop();
    }

    /// Rewrite the final letter.
    pub(crate) fn replace_last(&mut self, letter: char) {
        self.0.pop();
        self.0.push(letter);
    }
}
