//! Morphological analysis primitives: letter classification, the Porter
//! measure, and the derived predicates the step gates are built from.

pub mod letters;
