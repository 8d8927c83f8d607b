//! Affectionate pet-name detector. The list is Russian-language by
//! construction, so a hit always classifies as Russian.

use crate::detect::{Detector, contains_any};
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct AffectionateNickname;

impl Detector for AffectionateNickname {
    fn name(&self) -> &'static str {
        "affectionate_nickname"
    }

    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality> {
        contains_any(
            &input.cleaned_lower,
            lexicon.nicknames.iter().map(String::as_str),
        )
        .then_some(Nationality::Russian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn pet_names_map_to_russian() {
        let lex = Lexicon::standard();
        for name in ["Зайка", "Моё Солнышко", "котик 😻"] {
            let input = normalize(name, &lex);
            assert_eq!(
                AffectionateNickname.detect(&input, &lex),
                Some(Nationality::Russian),
                "{name}"
            );
        }
    }
}
