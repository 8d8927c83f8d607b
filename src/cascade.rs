//! The cascade orchestrator: a fixed, priority-ordered evaluation of the
//! signal detectors where the first non-empty answer wins.
//!
//! Canonical order (resolving the source system's two divergent variants):
//! flag → script → vulgar → marker → given-name → Islamic → nickname →
//! geo → corporate → profession/kinship → patronymic →
//! ethnic-hint (full-name path only) → suffix vote.
//!
//! `classify` is total and deterministic: identical input and lexicon data
//! always produce the same tag, and nothing in the cascade can fail. The
//! classifier is immutable after construction and safe to share across
//! worker threads for batch runs.

use std::sync::Arc;

use log::debug;

use crate::detect::{
    Detector, company::CorporateKeyword, ethnic_hint::EthnicClassifier,
    ethnic_hint::EthnicHint, flag::FlagGlyph, geo::GeoKeyword, given_name::GivenName,
    islamic::IslamicName, kinship::ProfessionOrKin, marker::MarkerGlyph,
    nickname::AffectionateNickname, patronymic::PatronymicSuffix, script::ScriptRange,
    suffix_vote::SuffixVote, vulgar::VulgarWord,
};
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::normalize;

pub struct Classifier {
    lexicon: Arc<Lexicon>,
    detectors: Vec<Arc<dyn Detector>>,
    ethnic_hint: Option<Arc<dyn Detector>>,
    last_resort: SuffixVote,
}

impl Classifier {
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::default()
    }

    /// Standard cascade over the standard lexicon.
    pub fn standard() -> Self {
        Self::builder().build()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classify a free-text identifier. Total: empty and whitespace-only
    /// input short-circuits to `Undetermined` before any detector runs.
    pub fn classify(&self, name: &str) -> Nationality {
        self.run(name, false)
    }

    /// Classify a split legal name. Empty fields are dropped; the remaining
    /// fields are joined with single spaces and sent through the same
    /// cascade, with the external ethnicity classifier (if any) consulted
    /// between the patronymic check and suffix voting.
    pub fn classify_full_name(&self, first: &str, last: &str, middle: &str) -> Nationality {
        let full: Vec<&str> = [first, last, middle]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if full.is_empty() {
            return Nationality::Undetermined;
        }
        self.run(&full.join(" "), true)
    }

    fn run(&self, name: &str, full_name: bool) -> Nationality {
        // Empty and whitespace-only input never reaches the detectors. The
        // check is on the raw text: a bare flag emoji cleans to an empty
        // string but must still classify.
        if name.trim().is_empty() {
            return Nationality::Undetermined;
        }
        let input = normalize(name, &self.lexicon);

        for detector in &self.detectors {
            if let Some(nationality) = detector.detect(&input, &self.lexicon) {
                debug!("{} fired: {nationality:?}", detector.name());
                return nationality;
            }
        }

        if full_name {
            if let Some(hint) = &self.ethnic_hint {
                if let Some(nationality) = hint.detect(&input, &self.lexicon) {
                    debug!("{} fired: {nationality:?}", hint.name());
                    return nationality;
                }
            }
        }

        self.last_resort
            .detect(&input, &self.lexicon)
            .unwrap_or(Nationality::Undetermined)
    }
}

#[derive(Default)]
pub struct ClassifierBuilder {
    lexicon: Option<Lexicon>,
    ethnic: Option<Arc<dyn EthnicClassifier>>,
}

impl ClassifierBuilder {
    /// Use a custom lexicon (synthetic tables in tests, or one enriched
    /// with external data files).
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Plug in an external ethnicity classifier for the full-name path.
    pub fn ethnic_classifier(mut self, classifier: Arc<dyn EthnicClassifier>) -> Self {
        self.ethnic = Some(classifier);
        self
    }

    pub fn build(self) -> Classifier {
        let detectors: Vec<Arc<dyn Detector>> = vec![
            Arc::new(FlagGlyph),
            Arc::new(ScriptRange),
            Arc::new(VulgarWord),
            Arc::new(MarkerGlyph),
            Arc::new(GivenName),
            Arc::new(IslamicName),
            Arc::new(AffectionateNickname),
            Arc::new(GeoKeyword),
            Arc::new(CorporateKeyword),
            Arc::new(ProfessionOrKin),
            Arc::new(PatronymicSuffix),
        ];

        Classifier {
            lexicon: Arc::new(self.lexicon.unwrap_or_else(Lexicon::standard)),
            detectors,
            ethnic_hint: self
                .ethnic
                .map(|classifier| Arc::new(EthnicHint::new(classifier)) as Arc<dyn Detector>),
            last_resort: SuffixVote,
        }
    }
}
