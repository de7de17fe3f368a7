//! Step 5 — final `e` removal and double-`l` simplification.

use crate::morph::letters::{ends_cvc, measure};
use crate::types::Word;

/// Remove a final `e` from long stems, and from m=1 stems that do not end
/// consonant-vowel-consonant: `probate -> probat`, `cease -> ceas`,
/// `rate` unchanged.
pub fn step_5a(mut word: Word) -> Word {
    if word.ends_with("e") {
        let m = measure(word.stem_of(1));
        if m > 1 || (m == 1 && !ends_cvc(word.stem_of(1))) {
            word.drop_last();
        }
    }
    word
}

/// Collapse a final double `l` on long stems: `controll -> control`,
/// `roll` unchanged.
pub fn step_5b(mut word: Word) -> Word {
    if word.ends_with("ll") && measure(word.as_bytes()) > 1 {
        word.drop_last();
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_5a_final_e() {
        for (input, expected) in [
            ("probate", "probat"),
            ("rate", "rate"),
            ("cease", "ceas"),
            ("agree", "agre"),
            ("e", "e"),
        ] {
            assert_eq!(
                step_5a(Word::normalize(input)).as_str(),
                expected,
                "step_5a({input})"
            );
        }
    }

    #[test]
    fn test_step_5b_double_l() {
        for (input, expected) in [
            ("controll", "control"),
            ("roll", "roll"),
            ("oscill", "oscil"),
            ("ll", "ll"),
        ] {
            assert_eq!(
                step_5b(Word::normalize(input)).as_str(),
                expected,
                "step_5b({input})"
            );
        }
    }
}
