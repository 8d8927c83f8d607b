//! Typical-given-name detector.
//!
//! Canonical policy (the source system disagreed with itself): every token
//! is checked, not just the first; the first nationality in table
//! declaration order whose list contains any token wins. Matching is exact
//! per token — equality against the native or transliterated form, never a
//! substring — which keeps short names from firing inside longer words.

use crate::detect::Detector;
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct GivenName;

impl Detector for GivenName {
    fn name(&self) -> &'static str {
        "given_name"
    }

    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality> {
        if input.tokens.is_empty() {
            return None;
        }
        let lowered: Vec<String> = input.tokens.iter().map(|t| t.to_lowercase()).collect();
        for nation in &lexicon.nations {
            if nation.given.is_empty() {
                continue;
            }
            if lowered.iter().any(|token| nation.given.contains(token)) {
                return Some(nation.nationality);
            }
        }
        None
    }
}
