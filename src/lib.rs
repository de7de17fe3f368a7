//! # rapid_stemmer
//!
//! A high-performance Porter stemmer for text indexing and search.
//!
//! This library reduces an inflected English word to its stem through a
//! fixed sequence of suffix-stripping rule sets, each gated by phonetic
//! conditions over the word (vowel/consonant classification and the
//! "measure" of consonant-vowel alternations). Search and indexing systems
//! use it so that "caresses", "caress", and "caressed" all match a common
//! root.
//!
//! ## Features
//!
//! - **Fast**: classification runs as a single forward scan; no allocation
//!   beyond the word buffer itself
//! - **Total**: every input maps to an output — rejection of out-of-alphabet
//!   characters is an opt-in policy
//! - **Auditable**: each step's suffix table is an explicit ordered decision
//!   list, testable in isolation
//! - **Python bindings**: optional integration via PyO3

pub mod errors;
pub mod morph;
pub mod rules;
pub mod stemmer;
pub mod steps;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used items
pub use errors::{Result, StemError};
pub use morph::letters::{contains_vowel, ends_cvc, is_consonant, is_vowel, measure, LetterKind};
pub use stemmer::{stem, PorterStemmer, Stemmer};
pub use types::{CharsetPolicy, Word};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
