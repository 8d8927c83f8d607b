//! Moderation detector: vulgar vocabulary anywhere in the cleaned text.
//! Runs before every ethnic lexicon check — a flagged name must never be
//! laundered into an ethnicity by a stray given-name hit.

use crate::detect::{Detector, contains_any};
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct VulgarWord;

impl Detector for VulgarWord {
    fn name(&self) -> &'static str {
        "vulgar_word"
    }

    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality> {
        contains_any(&input.cleaned_lower, lexicon.vulgar.iter().map(String::as_str))
            .then_some(Nationality::Vulgar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn matches_case_insensitively_as_substring() {
        let lex = Lexicon::standard();
        for name in ["дурак", "ДУРАК", "Полный Дурак 😂"] {
            let input = normalize(name, &lex);
            assert_eq!(VulgarWord.detect(&input, &lex), Some(Nationality::Vulgar));
        }
    }

    #[test]
    fn clean_names_pass() {
        let lex = Lexicon::standard();
        let input = normalize("Иван Петров", &lex);
        assert_eq!(VulgarWord.detect(&input, &lex), None);
    }
}
