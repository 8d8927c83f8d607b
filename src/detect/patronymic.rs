//! Patronymic-suffix detector, applicable only to the three-token
//! first/middle/last convention: the third token is the patronymic
//! candidate. First nationality in declaration order with a matching
//! suffix wins.

use crate::detect::Detector;
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct PatronymicSuffix;

impl Detector for PatronymicSuffix {
    fn name(&self) -> &'static str {
        "patronymic_suffix"
    }

    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality> {
        if input.tokens.len() != 3 {
            return None;
        }
        let patronymic = input.tokens[2].to_lowercase();
        lexicon
            .nations
            .iter()
            .find(|nation| {
                nation
                    .patronymic
                    .iter()
                    .any(|suffix| patronymic.ends_with(suffix.as_str()))
            })
            .map(|nation| nation.nationality)
    }
}
