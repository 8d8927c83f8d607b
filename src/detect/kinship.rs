//! Profession and kinship vocabulary ("Мама", "Дядя Коля", "врач Ольга").
//! Both lists are Russian-language, so a hit classifies as Russian.
//!
//! A given-name hit always outranks this detector — that rule is enforced
//! by cascade position (given-name runs earlier), not by code here.

use crate::detect::{Detector, contains_any};
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct ProfessionOrKin;

impl Detector for ProfessionOrKin {
    fn name(&self) -> &'static str {
        "profession_or_kin"
    }

    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality> {
        contains_any(
            &input.cleaned_lower,
            lexicon.professions_and_kin.iter().map(String::as_str),
        )
        .then_some(Nationality::Russian)
    }
}
