//! Corporate-keyword detector. The curated brand list is Russian-market by
//! construction, so a hit always classifies as Russian.

use crate::detect::{Detector, contains_any};
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct CorporateKeyword;

impl Detector for CorporateKeyword {
    fn name(&self) -> &'static str {
        "corporate_keyword"
    }

    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality> {
        contains_any(
            &input.cleaned_lower,
            lexicon.companies.iter().map(String::as_str),
        )
        .then_some(Nationality::Russian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn brand_names_classify_as_russian() {
        let lex = Lexicon::standard();
        for name in ["Олег Сбербанк", "менеджер ГАЗПРОМ", "Вика Wildberries"] {
            let input = normalize(name, &lex);
            assert_eq!(
                CorporateKeyword.detect(&input, &lex),
                Some(Nationality::Russian),
                "{name}"
            );
        }
    }
}
