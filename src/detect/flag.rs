//! Flag-emoji detector — the highest-priority signal in the cascade.
//! An explicit flag in a contact name is an unambiguous self-description,
//! so it wins over every lexicon-derived guess. Must search the *raw* text:
//! the cleaner strips regional-indicator pairs.

use crate::detect::Detector;
use crate::lexicon::{Lexicon, data::FLAG_TABLE};
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct FlagGlyph;

impl Detector for FlagGlyph {
    fn name(&self) -> &'static str {
        "flag_glyph"
    }

    fn detect(&self, input: &NameInput<'_>, _lexicon: &Lexicon) -> Option<Nationality> {
        FLAG_TABLE
            .iter()
            .find(|(flag, _)| input.raw.contains(flag))
            .map(|(_, nationality)| *nationality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::normalize::normalize;

    #[test]
    fn finds_flag_in_raw_text() {
        let lex = Lexicon::standard();
        let input = normalize("Иван 🇺🇦", &lex);
        assert_eq!(FlagGlyph.detect(&input, &lex), Some(Nationality::Ukrainian));
    }

    #[test]
    fn first_table_flag_wins_on_conflict() {
        let lex = Lexicon::standard();
        let input = normalize("🇰🇿🇷🇺", &lex);
        // Russia precedes Kazakhstan in the table
        assert_eq!(FlagGlyph.detect(&input, &lex), Some(Nationality::Russian));
    }

    #[test]
    fn no_flag_no_result() {
        let lex = Lexicon::standard();
        let input = normalize("Иван Петров", &lex);
        assert_eq!(FlagGlyph.detect(&input, &lex), None);
    }
}
