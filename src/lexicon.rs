//! The lexicon store: every curated table the detectors consult, built once
//! at startup and shared read-only for the process lifetime.
//!
//! Static tables (see [`data`]) keep their authored casing. Construction
//! lowercases everything into query-shaped collections and expands each
//! entry through [`crate::translit`], so Cyrillic and Latin spellings of
//! the same word match interchangeably without transliterating inputs at
//! query time.

pub mod data;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::nationality::Nationality;
use crate::translit::transliterate;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed typical-names file `{path}`: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One nationality's row in the static word tables.
#[derive(Clone, Copy, Debug)]
pub struct NationEntry {
    pub nationality: Nationality,
    pub given: &'static [&'static str],
    pub suffixes: &'static [&'static str],
    pub patronymic: &'static [&'static str],
}

/// One country's row in the static geo table.
#[derive(Clone, Copy, Debug)]
pub struct GeoEntry {
    pub country: &'static str,
    pub nationality: Nationality,
    pub keywords: &'static [&'static str],
}

/// Native and transliterated spellings of one word list, lowercased for
/// O(1) case-insensitive membership. Replaces the source system's fragile
/// even/odd positional pairing of a single interleaved list.
#[derive(Debug, Default, Clone)]
pub struct WordSet {
    native: HashSet<String>,
    latin: HashSet<String>,
}

impl WordSet {
    fn insert(&mut self, word: &str) {
        self.native.insert(word.to_lowercase());
        self.latin.insert(transliterate(word).to_lowercase());
    }

    /// Membership test; `token_lower` must already be lowercased.
    #[inline]
    pub fn contains(&self, token_lower: &str) -> bool {
        self.native.contains(token_lower) || self.latin.contains(token_lower)
    }

    pub fn is_empty(&self) -> bool {
        self.native.is_empty()
    }

    pub fn len(&self) -> usize {
        self.native.len()
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut set = Self::default();
        for w in words {
            set.insert(w);
        }
        set
    }
}

/// Suffix lists stay ordered (authored order first, transliterated extras
/// appended) because suffix matching is `ends_with`, not set membership.
fn expand_suffixes(authored: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(authored.len() * 2);
    for s in authored {
        let lower = s.to_lowercase();
        if !out.contains(&lower) {
            out.push(lower);
        }
    }
    for s in authored {
        let latin = transliterate(s).to_lowercase();
        if !out.contains(&latin) {
            out.push(latin);
        }
    }
    out
}

fn lower_all(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

/// One nationality's built word lists.
#[derive(Debug, Clone)]
pub struct NationLexicon {
    pub nationality: Nationality,
    pub given: WordSet,
    pub suffixes: Vec<String>,
    pub patronymic: Vec<String>,
}

/// Lowercased geo row, ready for substring scans.
#[derive(Debug, Clone)]
pub struct GeoKeywords {
    pub country: &'static str,
    pub nationality: Nationality,
    pub keywords: Vec<String>,
}

/// Immutable, process-wide lexicon store. Built once via [`Lexicon::builder`];
/// never mutated afterwards, so `classify` is safe to call from any number
/// of threads over the same store.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Declaration-ordered: iteration order is the tie-break everywhere.
    pub nations: Vec<NationLexicon>,
    pub geo: Vec<GeoKeywords>,
    pub islamic: HashSet<String>,
    pub companies: Vec<String>,
    pub professions_and_kin: Vec<String>,
    pub nicknames: Vec<String>,
    pub vulgar: Vec<String>,
    pub fillers: Vec<String>,
}

impl Lexicon {
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Static tables only, no external files.
    pub fn standard() -> Self {
        Self::builder().build()
    }

    pub fn nation(&self, nationality: Nationality) -> Option<&NationLexicon> {
        self.nations.iter().find(|n| n.nationality == nationality)
    }
}

#[derive(Deserialize)]
struct TypicalNamesFile {
    #[serde(default)]
    typical_names: HashMap<String, Vec<String>>,
}

/// Builder over the static tables plus optional external data files.
/// A missing file degrades coverage silently (logged); a present but
/// malformed file is a hard error — the caller asked for it.
#[derive(Default)]
pub struct LexiconBuilder {
    extra_given: Vec<(Nationality, Vec<String>)>,
    islamic: Vec<String>,
}

impl LexiconBuilder {
    /// Extra given names for one nationality (test seam and JSON merge target).
    pub fn given_names<I, S>(mut self, nationality: Nationality, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_given
            .push((nationality, names.into_iter().map(Into::into).collect()));
        self
    }

    /// Islamic names from an iterator (test seam).
    pub fn islamic_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.islamic.extend(names.into_iter().map(Into::into));
        self
    }

    /// Load the flat Islamic-name list: one name per line, `---`-prefixed
    /// section headers and blank lines skipped. Missing file is tolerated.
    pub fn islamic_names_file(mut self, path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("islamic name list {} not found, detector disabled", path.display());
            return Ok(self);
        }
        let file = fs::File::open(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| LexiconError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("---") {
                continue;
            }
            self.islamic.push(trimmed.to_string());
        }
        debug!("loaded {} islamic names from {}", self.islamic.len(), path.display());
        Ok(self)
    }

    /// Merge a typical-names seed file:
    /// `{"typical_names": {"RUSSIAN": ["Пётр", ...], ...}}`.
    /// Unknown nationality keys are skipped; missing file is tolerated.
    pub fn typical_names_file(mut self, path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("typical-names file {} not found, using static tables only", path.display());
            return Ok(self);
        }
        let raw = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let parsed: TypicalNamesFile =
            serde_json::from_str(&raw).map_err(|source| LexiconError::Malformed {
                path: path.display().to_string(),
                source,
            })?;
        for (key, names) in parsed.typical_names {
            match Nationality::from_key(&key) {
                Some(nationality) => self.extra_given.push((nationality, names)),
                None => debug!("typical-names key {key:?} is not a known nationality, skipped"),
            }
        }
        Ok(self)
    }

    pub fn build(self) -> Lexicon {
        let mut nations: Vec<NationLexicon> = data::NATION_TABLE
            .iter()
            .map(|entry| NationLexicon {
                nationality: entry.nationality,
                given: entry.given.iter().copied().collect(),
                suffixes: expand_suffixes(entry.suffixes),
                patronymic: expand_suffixes(entry.patronymic),
            })
            .collect();

        for (nationality, names) in self.extra_given {
            match nations.iter_mut().find(|n| n.nationality == nationality) {
                Some(nation) => {
                    for name in &names {
                        nation.given.insert(name);
                    }
                }
                None => {
                    // A nationality without a static row (e.g. Turkmen) can
                    // still be seeded entirely from a data file.
                    let mut given = WordSet::default();
                    for name in &names {
                        given.insert(name);
                    }
                    nations.push(NationLexicon {
                        nationality,
                        given,
                        suffixes: Vec::new(),
                        patronymic: Vec::new(),
                    });
                }
            }
        }

        let geo = data::GEO_TABLE
            .iter()
            .map(|entry| GeoKeywords {
                country: entry.country,
                nationality: entry.nationality,
                keywords: lower_all(entry.keywords),
            })
            .collect();

        let islamic = self
            .islamic
            .iter()
            .map(|name| name.to_lowercase())
            .collect();

        let mut professions_and_kin = lower_all(data::PROFESSIONS);
        professions_and_kin.extend(lower_all(data::FAMILY_RELATIONSHIPS));

        Lexicon {
            nations,
            geo,
            islamic,
            companies: lower_all(data::COMPANY_KEYWORDS),
            professions_and_kin,
            nicknames: lower_all(data::AFFECTIONATE_NICKNAMES),
            vulgar: lower_all(data::VULGAR_WORDS),
            fillers: lower_all(data::NON_NAME_FILLERS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn word_set_matches_both_scripts_case_insensitively() {
        let set: WordSet = ["Александр"].into_iter().collect();
        assert!(set.contains("александр"));
        assert!(set.contains("aleksandr"));
        assert!(!set.contains("Александр")); // caller must lowercase
        assert!(!set.contains("boris"));
    }

    #[test]
    fn suffix_expansion_keeps_authored_order_first() {
        let suffixes = expand_suffixes(&["енко", "enko", "чук"]);
        assert_eq!(&suffixes[..3], &["енко", "enko", "чук"]);
        // transliterated extras deduplicate against authored Latin forms
        assert_eq!(suffixes.iter().filter(|s| *s == "enko").count(), 1);
        assert!(suffixes.contains(&"chuk".to_string()));
    }

    #[test]
    fn standard_lexicon_is_declaration_ordered() {
        let lex = Lexicon::standard();
        assert_eq!(lex.nations[0].nationality, Nationality::Russian);
        assert!(lex.nation(Nationality::Georgian).is_some());
        assert!(lex.islamic.is_empty());
    }

    #[test]
    fn missing_files_are_tolerated() {
        let lex = Lexicon::builder()
            .islamic_names_file("/nonexistent/islam_names.txt")
            .unwrap()
            .typical_names_file("/nonexistent/typical_names.json")
            .unwrap()
            .build();
        assert!(lex.islamic.is_empty());
    }

    #[test]
    fn islamic_file_skips_section_headers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "--- Boy Names ---").unwrap();
        writeln!(file, "Мухаммад").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Фатима").unwrap();
        let lex = Lexicon::builder()
            .islamic_names_file(file.path())
            .unwrap()
            .build();
        assert_eq!(lex.islamic.len(), 2);
        assert!(lex.islamic.contains("мухаммад"));
    }

    #[test]
    fn typical_names_file_merges_and_skips_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"typical_names": {{"TURKMEN": ["Сердар"], "MARTIAN": ["Zork"]}}}}"#
        )
        .unwrap();
        let lex = Lexicon::builder()
            .typical_names_file(file.path())
            .unwrap()
            .build();
        let turkmen = lex.nation(Nationality::Turkmen).unwrap();
        assert!(turkmen.given.contains("сердар"));
        assert!(turkmen.given.contains("serdar"));
    }

    #[test]
    fn malformed_typical_names_is_loud() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();
        let result = Lexicon::builder().typical_names_file(file.path());
        assert!(matches!(result, Err(LexiconError::Malformed { .. })));
    }
}
