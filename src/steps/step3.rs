//! Step 3 — `-ic-`, `-ful`, `-ness` style derivational endings.

use crate::rules::{apply_first_match, Gate, Rule};
use crate::types::Word;

const RULES: &[Rule] = &[
    Rule {
        suffix: "icate",
        replacement: "ic",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "ative",
        replacement: "",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "alize",
        replacement: "al",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "iciti",
        replacement: "ic",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "ical",
        replacement: "ic",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "ful",
        replacement: "",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "ness",
        replacement: "",
        gate: Gate::StemMeasureAbove(0),
    },
];

/// Strip or rewrite one further derivational suffix.
pub fn step_3(word: Word) -> Word {
    apply_first_match(word, RULES)
}
