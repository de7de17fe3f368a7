//! The ordered transformation pipeline.
//!
//! Eight stages applied strictly in sequence; each consumes the word and
//! returns the input of the next. Stages never fail and never consult
//! anything but the current word.

pub mod step1;
pub mod step2;
pub mod step3;
pub mod step4;
pub mod step5;

pub use step1::{step_1a, step_1b, step_1c};
pub use step2::step_2;
pub use step3::step_3;
pub use step4::step_4;
pub use step5::{step_5a, step_5b};

use crate::types::Word;

/// Run the full pipeline over a normalized word.
pub fn run(word: Word) -> Word {
    let word = step_1a(word);
    let word = step_1b(word);
    let word = step_1c(word);
    let word = step_2(word);
    let word = step_3(word);
    let word = step_4(word);
    let word = step_5a(word);
    step_5b(word)
}
