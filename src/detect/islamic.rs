//! Islamic-name detector, backed by the optional external name list.
//! With no list loaded the detector is inert — absence of the data file is
//! degraded coverage, never an error.

use crate::detect::Detector;
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct IslamicName;

impl Detector for IslamicName {
    fn name(&self) -> &'static str {
        "islamic_name"
    }

    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality> {
        if lexicon.islamic.is_empty() {
            return None;
        }
        input
            .tokens
            .iter()
            .any(|token| lexicon.islamic.contains(&token.to_lowercase()))
            .then_some(Nationality::Islam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn inert_without_a_loaded_list() {
        let lex = Lexicon::standard();
        let input = normalize("Мухаммад", &lex);
        assert_eq!(IslamicName.detect(&input, &lex), None);
    }

    #[test]
    fn exact_token_membership_once_loaded() {
        let lex = Lexicon::builder()
            .islamic_names(["Мухаммад", "Фатима"])
            .build();
        let input = normalize("мухаммад Петров", &lex);
        assert_eq!(IslamicName.detect(&input, &lex), Some(Nationality::Islam));
        let input = normalize("Мухаммаддин", &lex);
        assert_eq!(IslamicName.detect(&input, &lex), None);
    }
}
