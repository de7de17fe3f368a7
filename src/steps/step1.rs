//! Step 1 — plurals, past tense, gerunds, and terminal `y`.

use crate::morph::letters::{contains_vowel, ends_cvc, is_consonant, measure};
use crate::rules::{apply_first_match, Gate, Rule};
use crate::types::Word;

/// Step 1a:
///
/// ```text
/// SSES -> SS      caresses -> caress
/// IES  -> I       ponies   -> poni
/// SS   -> SS      caress   -> caress
/// S    ->         cats     -> cat
/// ```
const PLURAL_RULES: &[Rule] = &[
    Rule {
        suffix: "sses",
        replacement: "ss",
        gate: Gate::Always,
    },
    Rule {
        suffix: "ies",
        replacement: "i",
        gate: Gate::Always,
    },
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

/// Strip plural and possessive-like endings.
pub fn step_1a(word: Word) -> Word {
    apply_first_match(word, PLURAL_RULES)
}

/// Strip past-tense and gerund endings:
///
/// ```text
/// (m>0) EED -> EE     agreed    -> agree    (feed unchanged)
/// (*v*) ED  ->        plastered -> plaster  (bled unchanged)
/// (*v*) ING ->        motoring  -> motor    (sing unchanged)
/// ```
///
/// A successful `ed`/`ing` strip continues into [`restore_ending`].
pub fn step_1b(mut word: Word) -> Word {
    let n = word.len();
    if word.ends_with("eed") {
        if measure(word.stem_of(3)) > 0 {
            word.drop_last();
        }
        word
    } else if word.ends_with("ed") {
        if contains_vowel(word.stem_of(2)) {
            word.truncate(n - 2);
            restore_ending(word)
        } else {
            word
        }
    } else if word.ends_with("ing") {
        if contains_vowel(word.stem_of(3)) {
            word.truncate(n - 3);
            restore_ending(word)
        } else {
            word
        }
    } else {
        word
    }
}

/// Continuation after a successful `ed`/`ing` strip:
///
/// ```text
/// AT -> ATE                       conflat(ed) -> conflate
/// BL -> BLE                       troubl(ed)  -> trouble
/// IZ -> IZE                       siz(ed)     -> size
/// (*d and not (*L or *S or *Z))
///    -> single letter             hopp(ing)   -> hop, hiss(ing) -> hiss
/// (m=1 and *o) -> E               fil(ing)    -> file
/// ```
fn restore_ending(mut word: Word) -> Word {
    if word.ends_with("at") || word.ends_with("iz") || word.ends_with("bl") {
        word.push('e');
    } else if ends_doubled_consonant(word.as_bytes()) {
        if !matches!(word.as_bytes()[word.len() - 1], b'l' | b's' | b'z') {
            word.drop_last();
        }
    } else if measure(word.as_bytes()) == 1 && ends_cvc(word.as_bytes()) {
        word.push('e');
    }
    word
}

/// *d — the word ends with a doubled letter whose final occurrence
/// classifies as a consonant.
fn ends_doubled_consonant(word: &[u8]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

/// Step 1c — rewrite a terminal `y` to `i` when the prefix holds a vowel:
/// `happy -> happi`, `sky -> sky`.
pub fn step_1c(mut word: Word) -> Word {
    if word.ends_with("y") && contains_vowel(word.stem_of(1)) {
        word.replace_last('i');
    }
    word
}
