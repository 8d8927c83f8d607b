//! Name normalization: the fixed preprocessing every classification call
//! runs once, before any detector sees the input.
//!
//! Order matters and the pipeline must not be re-applied to its own output
//! (diminutive rewriting and filler dropping are not idempotent as a pair):
//! 1. NFC-compose the raw text;
//! 2. strip everything that is neither a word character nor whitespace,
//!    then strip digits;
//! 3. split on whitespace;
//! 4. rewrite diminutive tokens to their formal form (exact, case-sensitive
//!    whole-token match — substring rewriting would corrupt unrelated
//!    tokens);
//! 5. drop tokens containing a configured filler word.
//!
//! Flag emoji and the marker glyph survive only in the raw text, which is
//! why the raw string travels alongside the cleaned one in [`NameInput`].

use std::sync::LazyLock;

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use smallvec::SmallVec;

use crate::lexicon::{Lexicon, data::DIMINUTIVE_TO_FORMAL};
use crate::unicode::is_word_char;

static NFC: LazyLock<ComposingNormalizerBorrowed> = LazyLock::new(ComposingNormalizer::new_nfc);

/// Everything the detectors need from one input, computed once.
/// Ephemeral: created per classification call, never stored.
#[derive(Debug)]
pub struct NameInput<'a> {
    /// Original text, unstripped — flag and marker glyph detection only.
    pub raw: &'a str,
    /// Cleaned whole string for substring detectors. Keeps token order and
    /// filler words; only punctuation, digits and emoji are gone.
    pub cleaned: String,
    /// Lowercased `cleaned`, computed once — every substring detector scans
    /// this instead of re-folding per check.
    pub cleaned_lower: String,
    /// Whitespace tokens after diminutive rewrite and filler removal.
    pub tokens: SmallVec<[String; 4]>,
}

impl<'a> NameInput<'a> {
    pub fn is_empty(&self) -> bool {
        self.cleaned.is_empty() && self.tokens.is_empty()
    }
}

fn clean(raw: &str) -> String {
    let composed = NFC.normalize(raw);
    let mut out = String::with_capacity(composed.len());
    for c in composed.chars() {
        if c.is_whitespace() {
            out.push(c);
        } else if is_word_char(c) && !c.is_numeric() {
            out.push(c);
        }
    }
    out.trim().to_string()
}

fn is_filler(token: &str, lexicon: &Lexicon) -> bool {
    let lower = token.to_lowercase();
    lexicon.fillers.iter().any(|f| lower.contains(f.as_str()))
}

/// Run the full normalization pipeline over one raw input.
pub fn normalize<'a>(raw: &'a str, lexicon: &Lexicon) -> NameInput<'a> {
    let cleaned = clean(raw);

    let tokens = cleaned
        .split_whitespace()
        .map(|token| match DIMINUTIVE_TO_FORMAL.get(token) {
            Some(formal) => (*formal).to_string(),
            None => token.to_string(),
        })
        .filter(|token| !is_filler(token, lexicon))
        .collect();

    let cleaned_lower = cleaned.to_lowercase();

    NameInput {
        raw,
        cleaned,
        cleaned_lower,
        tokens,
    }
}
