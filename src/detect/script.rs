//! Script-range detector: distinctive alphabets and letters.
//!
//! Check order is fixed and significant — Ukrainian before Kazakh because
//! the two letter sets share dotted `і`, and the letter sets before nothing
//! else: whole-block Georgian/Armenian membership cannot collide with any
//! of them.

use crate::detect::Detector;
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;
use crate::unicode::{
    is_armenian, is_belarusian_letter, is_georgian, is_kazakh_letter, is_ukrainian_letter,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptRange;

impl Detector for ScriptRange {
    fn name(&self) -> &'static str {
        "script_range"
    }

    fn detect(&self, input: &NameInput<'_>, _lexicon: &Lexicon) -> Option<Nationality> {
        let text = input.cleaned.as_str();
        if text.chars().any(is_ukrainian_letter) {
            return Some(Nationality::Ukrainian);
        }
        if text.chars().any(is_belarusian_letter) {
            return Some(Nationality::Belarusian);
        }
        if text.chars().any(is_georgian) {
            return Some(Nationality::Georgian);
        }
        if text.chars().any(is_armenian) {
            return Some(Nationality::Armenian);
        }
        if text.chars().any(is_kazakh_letter) {
            return Some(Nationality::Kazakh);
        }
        None
    }
}
