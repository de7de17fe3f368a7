//! Step 2 — the long derivational suffix family.

use crate::rules::{apply_first_match, Gate, Rule};
use crate::types::Word;

/// The Step 2 decision list, longest / most specific suffix first within
/// each family (`ational` before `tional`, `ization` before `ation`,
/// `abli` before `bli`). Families end in distinct letters, so relative
/// family order cannot change which rule a word selects.
///
/// Two deliberate departures from the published table, kept so existing
/// indexes built against this stemmer keep matching:
/// - `logi -> log`
/// - `tional` gates on the measure of the rewritten word, not of the stem
const DERIVATIONAL_RULES: &[Rule] = &[
    Rule {
        suffix: "ational",
        replacement: "ate",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "tional",
        replacement: "tion",
        gate: Gate::ResultMeasureAbove(0),
    },
    Rule {
        suffix: "enci",
        replacement: "ence",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "anci",
        replacement: "ance",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "izer",
        replacement: "ize",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "abli",
        replacement: "able",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "bli",
        replacement: "ble",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "alli",
        replacement: "al",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "entli",
        replacement: "ent",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "ousli",
        replacement: "ous",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "eli",
        replacement: "e",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "ization",
        replacement: "ize",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "ation",
        replacement: "ate",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "ator",
        replacement: "ate",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "alism",
        replacement: "al",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "iveness",
        replacement: "ive",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "fulness",
        replacement: "ful",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "ousness",
        replacement: "ous",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "iviti",
        replacement: "ive",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "aliti",
        replacement: "al",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "biliti",
        replacement: "ble",
        gate: Gate::StemMeasureAbove(0),
    },
    Rule {
        suffix: "logi",
        replacement: "log",
        gate: Gate::StemMeasureAbove(0),
    },
];

/// Rewrite one derivational suffix when the stem is long enough.
pub fn step_2(word: Word) -> Word {
    apply_first_match(word, DERIVATIONAL_RULES)
}
