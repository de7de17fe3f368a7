//! The public stemming API.
//!
//! [`stem`] is the one-call entry point: normalize, guard short words, run
//! the eight-step pipeline. [`PorterStemmer`] wraps the same pipeline with
//! a configurable charset policy and batch helpers.

use rayon::prelude::*;

use crate::errors::{Result, StemError};
use crate::steps;
use crate::types::{CharsetPolicy, Word};

/// Trait for stemming algorithms.
pub trait Stemmer {
    /// Stem a single word to its root form.
    fn stem(&self, word: &str) -> Result<String>;

    /// Stem a batch of tokens, preserving input order.
    fn stem_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
        tokens
            .iter()
            .map(|token| self.stem(token.as_ref()))
            .collect()
    }
}

/// Porter stemmer over lowercase ASCII words.
///
/// Stateless and `Copy`: one value can serve any number of threads
/// concurrently, since every call owns its word buffer and no state is
/// shared between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PorterStemmer {
    policy: CharsetPolicy,
}

impl PorterStemmer {
    /// Create a stemmer with the default lenient charset policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the charset policy.
    pub fn with_charset_policy(mut self, policy: CharsetPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active charset policy.
    pub fn charset_policy(&self) -> CharsetPolicy {
        self.policy
    }

    /// Stem a batch of tokens in parallel, preserving input order.
    pub fn stem_parallel<S>(&self, tokens: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        tokens
            .par_iter()
            .map(|token| self.stem(token.as_ref()))
            .collect()
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, input: &str) -> Result<String> {
        let word = Word::normalize(input);
        if self.policy.is_strict() {
            if let Some((position, character)) = word
                .as_str()
                .char_indices()
                .find(|(_, c)| !c.is_ascii_lowercase())
            {
                return Err(StemError::non_alphabetic(word.as_str(), position, character));
            }
        }
        Ok(stem_word(word))
    }
}

/// Stem a single word with the default lenient policy. Never fails.
///
/// The input is trimmed and lowercased. Words shorter than three
/// characters bypass the pipeline, as do words containing non-ASCII
/// characters — the rule table does not define them, and the documented
/// lenient policy is to return them as normalized.
pub fn stem(input: &str) -> String {
    stem_word(Word::normalize(input))
}

fn stem_word(word: Word) -> String {
    if word.len() < 3 || !word.as_str().is_ascii() {
        return word.into_string();
    }
    steps::run(word).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_bypass_the_pipeline() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("is"), "is");
        assert_eq!(stem(" I "), "i");
        // Three characters is enough to enter it.
        assert_eq!(stem("ties"), "ti");
    }

    #[test]
    fn test_normalization() {
        assert_eq!(stem("  Caresses\t"), "caress");
        assert_eq!(stem("MOTORING"), "motor");
    }

    #[test]
    fn test_non_ascii_returned_as_normalized() {
        assert_eq!(stem("café"), "café");
        assert_eq!(stem("Naïve"), "naïve");
    }

    #[test]
    fn test_ascii_non_letters_flow_through() {
        // Digits and punctuation classify as consonants; no rule matches.
        assert_eq!(stem("r2d2"), "r2d2");
        assert_eq!(stem("don't"), "don't");
    }

    #[test]
    fn test_strict_policy_rejects_non_letters() {
        let stemmer = PorterStemmer::new().with_charset_policy(CharsetPolicy::Strict);
        assert_eq!(stemmer.stem("Caresses").unwrap(), "caress");
        let err = stemmer.stem("don't").unwrap_err();
        assert_eq!(
            err,
            StemError::non_alphabetic("don't", 3, '\'')
        );
    }

    #[test]
    fn test_stem_tokens_preserves_order() {
        let stemmer = PorterStemmer::new();
        let stemmed = stemmer
            .stem_tokens(&["running", "caresses", "easily"])
            .unwrap();
        assert_eq!(stemmed, vec!["run", "caress", "easili"]);
    }

    #[test]
    fn test_stem_parallel_matches_sequential() {
        let stemmer = PorterStemmer::new();
        let words: Vec<String> = ["caresses", "ponies", "motoring", "hopefulness", "roll"]
            .iter()
            .cycle()
            .take(200)
            .map(|w| w.to_string())
            .collect();
        assert_eq!(
            stemmer.stem_parallel(&words).unwrap(),
            stemmer.stem_tokens(&words).unwrap()
        );
    }
}
