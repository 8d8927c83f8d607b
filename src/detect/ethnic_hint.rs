//! External ethnicity-classifier capability.
//!
//! The engine depends on this polymorphically: anything that can map a
//! (last, first, middle) triple to a set of ethnic tags can be plugged in,
//! and tests substitute a stub. Failures are swallowed — a broken external
//! classifier degrades to "no opinion", never to a classification error.
//! Consulted only on the full-name path, where distinct first/last tokens
//! exist (at least two name parts).

use std::sync::Arc;

use log::debug;

use crate::detect::Detector;
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

/// Tags an external classifier may emit, in the vocabulary this engine
/// understands. Unknown tags are simply ignored.
pub const KNOWN_TAGS: &[(&str, Nationality)] = &[
    ("kaz", Nationality::Kazakh),
    ("tur", Nationality::Kazakh),
    ("geo", Nationality::Georgian),
    ("arm", Nationality::Armenian),
    ("aze", Nationality::Azerbaijani),
    ("che", Nationality::Chechen),
    ("dag", Nationality::Dagestani),
    ("ing", Nationality::Ingush),
    ("slav", Nationality::Russian),
];

/// Injectable capability: classify a split full name into ethnic tags.
pub trait EthnicClassifier: Send + Sync {
    fn classify(
        &self,
        last: &str,
        first: &str,
        middle: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Detector wrapper around an [`EthnicClassifier`].
pub struct EthnicHint {
    classifier: Arc<dyn EthnicClassifier>,
}

impl EthnicHint {
    pub fn new(classifier: Arc<dyn EthnicClassifier>) -> Self {
        Self { classifier }
    }
}

impl Detector for EthnicHint {
    fn name(&self) -> &'static str {
        "ethnic_hint"
    }

    fn detect(&self, input: &NameInput<'_>, _lexicon: &Lexicon) -> Option<Nationality> {
        if input.tokens.len() < 2 {
            return None;
        }
        let first = input.tokens[0].as_str();
        let last = input.tokens.last().map(String::as_str).unwrap_or("");
        let middle = if input.tokens.len() == 3 {
            input.tokens[1].as_str()
        } else {
            ""
        };

        let tags = match self.classifier.classify(last, first, middle) {
            Ok(tags) => tags,
            Err(err) => {
                debug!("ethnic classifier failed, ignoring: {err}");
                return None;
            }
        };

        KNOWN_TAGS
            .iter()
            .find(|(tag, _)| tags.iter().any(|t| t == tag))
            .map(|(_, nationality)| *nationality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    struct Fixed(&'static [&'static str]);

    impl EthnicClassifier for Fixed {
        fn classify(
            &self,
            _last: &str,
            _first: &str,
            _middle: &str,
        ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    struct Failing;

    impl EthnicClassifier for Failing {
        fn classify(
            &self,
            _last: &str,
            _first: &str,
            _middle: &str,
        ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
            Err("backend unavailable".into())
        }
    }

    #[test]
    fn maps_known_tags() {
        let lex = Lexicon::standard();
        let hint = EthnicHint::new(Arc::new(Fixed(&["geo"])));
        let input = normalize("Вахтанг Церетели", &lex);
        assert_eq!(hint.detect(&input, &lex), Some(Nationality::Georgian));
    }

    #[test]
    fn tur_aliases_to_kazakh() {
        let lex = Lexicon::standard();
        let hint = EthnicHint::new(Arc::new(Fixed(&["tur"])));
        let input = normalize("Канат Омаров", &lex);
        assert_eq!(hint.detect(&input, &lex), Some(Nationality::Kazakh));
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let lex = Lexicon::standard();
        let hint = EthnicHint::new(Arc::new(Fixed(&["esp", "fin"])));
        let input = normalize("Вахтанг Церетели", &lex);
        assert_eq!(hint.detect(&input, &lex), None);
    }

    #[test]
    fn errors_are_swallowed() {
        let lex = Lexicon::standard();
        let hint = EthnicHint::new(Arc::new(Failing));
        let input = normalize("Вахтанг Церетели", &lex);
        assert_eq!(hint.detect(&input, &lex), None);
    }

    #[test]
    fn needs_two_name_parts() {
        let lex = Lexicon::standard();
        let hint = EthnicHint::new(Arc::new(Fixed(&["geo"])));
        let input = normalize("Вахтанг", &lex);
        assert_eq!(hint.detect(&input, &lex), None);
    }
}
