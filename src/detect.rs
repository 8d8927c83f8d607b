//! Signal detectors: independent, stateless predicates mapping one
//! normalized input to an optional nationality.
//!
//! Every detector is referentially transparent over the shared read-only
//! [`Lexicon`] — no detector mutates anything, returns an error, or looks
//! at another detector's result. Priority lives entirely in the cascade
//! (`crate::cascade`); a detector never knows its own position.

pub mod company;
pub mod ethnic_hint;
pub mod flag;
pub mod geo;
pub mod given_name;
pub mod islamic;
pub mod kinship;
pub mod marker;
pub mod nickname;
pub mod patronymic;
pub mod script;
pub mod suffix_vote;
pub mod vulgar;

use memchr::memmem;

use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

/// A single rule check consulted by the cascade.
pub trait Detector: Send + Sync {
    /// Human-readable name — used in logs and error messages.
    fn name(&self) -> &'static str;

    /// `Some(tag)` if the rule fires, `None` otherwise. Never fails.
    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality>;
}

/// Substring scan shared by the keyword detectors. Both sides must already
/// be lowercased.
#[inline]
pub(crate) fn contains_any<'a, I>(haystack_lower: &str, needles_lower: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    needles_lower
        .into_iter()
        .any(|needle| memmem::find(haystack_lower.as_bytes(), needle.as_bytes()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_any_is_plain_substring() {
        assert!(contains_any("мама дорогая", ["мама"]));
        assert!(contains_any("прямо мамаша", ["мама"]));
        assert!(!contains_any("мам", ["мама"]));
        assert!(!contains_any("", ["мама"]));
    }
}
