//! Priority-ordered suffix rewrite tables.
//!
//! Each step's rule set is an ordered decision list, not a bag of
//! independent conditions: the first rule whose suffix matches selects the
//! rewrite, and its gate then decides whether the rewrite fires. A failed
//! gate never falls through to a later rule — `caress` matches `ss` and
//! stops there; it is never re-matched against the bare `s` rule.

use crate::morph::letters::measure;
use crate::types::Word;

/// One suffix rewrite: pattern, condition, replacement.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Literal suffix that selects this rule.
    pub suffix: &'static str,
    /// Replacement appended once the suffix is removed.
    pub replacement: &'static str,
    /// Condition deciding whether the selected rewrite fires.
    pub gate: Gate,
}

/// Gate conditions over the candidate stem.
#[derive(Debug, Clone, Copy)]
pub enum Gate {
    /// Fires unconditionally.
    Always,
    /// `measure` of the word minus the suffix must exceed the threshold.
    StemMeasureAbove(usize),
    /// `measure` of the rewritten word must exceed the threshold.
    ///
    /// Only `tional -> tion` gates on the rewrite result rather than the
    /// bare stem; see the Step 2 table.
    ResultMeasureAbove(usize),
    /// `measure` of the word minus the suffix must exceed the threshold,
    /// and the stem's final letter must be one of `finals`.
    StemMeasureAboveEndingIn(usize, &'static [u8]),
}

/// Apply the first rule of `rules` whose suffix matches `word`.
///
/// Returns the word unchanged when no suffix matches, or when the selected
/// rule's gate fails.
pub fn apply_first_match(mut word: Word, rules: &[Rule]) -> Word {
    for rule in rules {
        if !word.ends_with(rule.suffix) {
            continue;
        }
        let stem_len = word.len() - rule.suffix.len();
        let fires = match rule.gate {
            Gate::Always => true,
            Gate::StemMeasureAbove(min) => measure(word.stem_of(rule.suffix.len())) > min,
            Gate::ResultMeasureAbove(min) => {
                let mut rewritten = word.stem_of(rule.suffix.len()).to_vec();
                rewritten.extend_from_slice(rule.replacement.as_bytes());
                measure(&rewritten) > min
            }
            Gate::StemMeasureAboveEndingIn(min, finals) => {
                let stem = word.stem_of(rule.suffix.len());
                stem.last().is_some_and(|b| finals.contains(b)) && measure(stem) > min
            }
        };
        if fires {
            word.truncate(stem_len);
            word.push_str(rule.replacement);
        }
        return word;
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::normalize(s)
    }

    #[test]
    fn test_first_match_wins() {
        let rules = &[
            Rule {
                suffix: "ss",
                replacement: "ss",
                gate: Gate::Always,
            },
            Rule {
                suffix: "s",
                replacement: "",
                gate: Gate::Always,
            },
        ];
        // "caress" selects the identity `ss` rule, never the bare `s` strip.
        assert_eq!(apply_first_match(w("caress"), rules).as_str(), "caress");
        assert_eq!(apply_first_match(w("cats"), rules).as_str(), "cat");
        assert_eq!(apply_first_match(w("cat"), rules).as_str(), "cat");
    }

    #[test]
    fn test_failed_gate_stops_the_scan() {
        let rules = &[
            Rule {
                suffix: "ational",
                replacement: "ate",
                gate: Gate::StemMeasureAbove(0),
            },
            Rule {
                suffix: "al",
                replacement: "",
                gate: Gate::Always,
            },
        ];
        // "rational" selects `ational`, whose gate fails on the bare "r"
        // stem; the `al` rule must not get a second chance.
        assert_eq!(apply_first_match(w("rational"), rules).as_str(), "rational");
        assert_eq!(apply_first_match(w("relational"), rules).as_str(), "relate");
    }

    #[test]
    fn test_result_measure_gate() {
        let rules = &[Rule {
            suffix: "tional",
            replacement: "tion",
            gate: Gate::ResultMeasureAbove(0),
        }];
        // The gate sees the rewritten word "tion" (measure 1), not the
        // empty stem.
        assert_eq!(apply_first_match(w("tional"), rules).as_str(), "tion");
        assert_eq!(
            apply_first_match(w("conditional"), rules).as_str(),
            "condition"
        );
    }

    #[test]
    fn test_stem_final_letter_gate() {
        let rules = &[Rule {
            suffix: "ion",
            replacement: "",
            gate: Gate::StemMeasureAboveEndingIn(1, b"st"),
        }];
        assert_eq!(apply_first_match(w("adoption"), rules).as_str(), "adopt");
        // Stem ends in 'n', not 's' or 't'.
        assert_eq!(apply_first_match(w("communion"), rules).as_str(), "communion");
        // Empty stem has no final letter.
        assert_eq!(apply_first_match(w("ion"), rules).as_str(), "ion");
    }
}
