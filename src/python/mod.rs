//! Python bindings via PyO3
//!
//! This module provides the Python interface for rapid_stemmer.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::stemmer::PorterStemmer;
use crate::types::CharsetPolicy;

/// Register all Python functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(stem, m)?)?;
    m.add_function(wrap_pyfunction!(stem_words, m)?)?;
    Ok(())
}

/// Stem one word with the lenient charset policy.
#[pyfunction]
fn stem(word: &str) -> String {
    crate::stemmer::stem(word)
}

/// Stem a batch of words in parallel, preserving order.
///
/// With `strict=True`, words containing characters outside `a-z` raise
/// `ValueError` instead of passing through.
#[pyfunction]
#[pyo3(signature = (words, strict = false))]
fn stem_words(words: Vec<String>, strict: bool) -> PyResult<Vec<String>> {
    let policy = if strict {
        CharsetPolicy::Strict
    } else {
        CharsetPolicy::Lenient
    };
    PorterStemmer::new()
        .with_charset_policy(policy)
        .stem_parallel(&words)
        .map_err(|err| PyValueError::new_err(err.to_string()))
}
