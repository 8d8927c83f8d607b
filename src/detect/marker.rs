//! The single designated marker glyph, checked against the raw text
//! (the cleaner strips emoji).

use crate::detect::Detector;
use crate::lexicon::{Lexicon, data::MARKER_GLYPH};
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkerGlyph;

impl Detector for MarkerGlyph {
    fn name(&self) -> &'static str {
        "marker_glyph"
    }

    fn detect(&self, input: &NameInput<'_>, _lexicon: &Lexicon) -> Option<Nationality> {
        input
            .raw
            .contains(MARKER_GLYPH)
            .then_some(Nationality::Shalavy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn marker_in_raw_text() {
        let lex = Lexicon::standard();
        let input = normalize("Настя 💦", &lex);
        assert_eq!(MarkerGlyph.detect(&input, &lex), Some(Nationality::Shalavy));
        let input = normalize("Настя", &lex);
        assert_eq!(MarkerGlyph.detect(&input, &lex), None);
    }
}
