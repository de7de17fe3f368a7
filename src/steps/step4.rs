//! Step 4 — residual suffixes, stripped only from long stems (m > 1).

use crate::rules::{apply_first_match, Gate, Rule};
use crate::types::Word;

/// Every rule here deletes its suffix outright. `able`/`ible` are matched
/// as four-letter literals; `ion` additionally requires the stem to end in
/// `s` or `t` (`adoption -> adopt`, `communion` unchanged).
const RULES: &[Rule] = &[
    Rule {
        suffix: "al",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "er",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ic",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ance",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ence",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "able",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ible",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ement",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ment",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ent",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ant",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ate",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ive",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ize",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ism",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ous",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "iti",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ou",
        replacement: "",
        gate: Gate::StemMeasureAbove(1),
    },
    Rule {
        suffix: "ion",
        replacement: "",
        gate: Gate::StemMeasureAboveEndingIn(1, b"st"),
    },
];

/// Strip one residual suffix from a long stem.
pub fn step_4(word: Word) -> Word {
    apply_first_match(word, RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_4_strips() {
        for (input, expected) in [
            ("revival", "reviv"),
            ("allowance", "allow"),
            ("inference", "infer"),
            ("airliner", "airlin"),
            ("gyroscopic", "gyroscop"),
            ("adjustable", "adjust"),
            ("defensible", "defens"),
            ("irritant", "irrit"),
            ("replacement", "replac"),
            ("adjustment", "adjust"),
            ("dependent", "depend"),
            ("adoption", "adopt"),
            ("homologou", "homolog"),
            ("communism", "commun"),
            ("activate", "activ"),
            ("angulariti", "angular"),
            ("homologous", "homolog"),
            ("effective", "effect"),
            ("bowdlerize", "bowdler"),
        ] {
            assert_eq!(
                step_4(Word::normalize(input)).as_str(),
                expected,
                "step_4({input})"
            );
        }
    }

    #[test]
    fn test_step_4_ion_needs_s_or_t_stem() {
        assert_eq!(step_4(Word::normalize("communion")).as_str(), "communion");
        assert_eq!(step_4(Word::normalize("adoption")).as_str(), "adopt");
    }

    #[test]
    fn test_step_4_short_stems_unchanged() {
        // Measure of the stem must exceed 1, not 0.
        for word in ["cement", "feudal", "rate", "ble", "trouble"] {
            assert_eq!(step_4(Word::normalize(word)).as_str(), word);
        }
    }
}
