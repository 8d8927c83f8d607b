//! Phone-prefix region resolution — a flat table scan, deliberately not a
//! cascade. Used by batch callers as the last-resort fallback: when a name
//! classifies as `Undetermined` but the number's country is known, the
//! country's nationality stands in.
//!
//! An optional pattern file refines Russian mobile numbers to a named
//! region; without it the resolver still yields the country.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::nationality::Nationality;

#[derive(Debug, Error)]
pub enum PhoneError {
    #[error("failed to read region patterns `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Country-code prefixes, longest-match-first: `77` (Kazakhstan) must be
/// tested before `7` (Russia).
static PREFIX_TABLE: &[(&str, &str, Nationality)] = &[
    ("77", "Казахстан", Nationality::Kazakh),
    ("7", "Россия", Nationality::Russian),
    ("375", "Беларусь", Nationality::Belarusian),
    ("380", "Украина", Nationality::Ukrainian),
    ("998", "Узбекистан", Nationality::Uzbek),
    ("994", "Азербайджан", Nationality::Azerbaijani),
    ("995", "Грузия", Nationality::Georgian),
    ("374", "Армения", Nationality::Armenian),
    ("996", "Киргизия", Nationality::Kyrgyz),
    ("992", "Таджикистан", Nationality::Tajik),
    ("993", "Туркменистан", Nationality::Turkmen),
    ("370", "Литва", Nationality::Lithuanian),
    ("371", "Латвия", Nationality::Latvian),
    ("372", "Эстония", Nationality::Estonian),
];

/// Resolved geography of one phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRegion {
    pub country: &'static str,
    /// Refined region, only when a pattern file matched.
    pub region: Option<String>,
    pub nationality: Nationality,
}

impl PhoneRegion {
    /// Report label: `Россия, Московская область` or bare country.
    pub fn label(&self) -> String {
        match &self.region {
            Some(region) => format!("{}, {}", self.country, region),
            None => self.country.to_string(),
        }
    }
}

/// One row of the mobile pattern table: `code` then `pattern` where `x`
/// matches any single digit.
#[derive(Debug, Clone)]
struct RegionPattern {
    code: String,
    pattern: String,
    region: String,
}

impl RegionPattern {
    /// Full match of `code + pattern` against the national number.
    fn matches(&self, number: &str) -> bool {
        let Some(rest) = number.strip_prefix(self.code.as_str()) else {
            return false;
        };
        if rest.len() != self.pattern.len() {
            return false;
        }
        rest.bytes()
            .zip(self.pattern.bytes())
            .all(|(digit, pat)| pat == b'x' || digit == pat)
    }
}

#[derive(Debug, Default)]
pub struct PhoneResolver {
    patterns: Vec<RegionPattern>,
}

impl PhoneResolver {
    /// Prefix table only, no regional refinement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load mobile region patterns from a CSV file with a header row and
    /// `code,pattern,operator,region` columns. A `code-` prefix repeated
    /// inside the pattern column is tolerated. Missing file degrades to
    /// country-only resolution.
    pub fn with_patterns_file(path: impl AsRef<Path>) -> Result<Self, PhoneError> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("region patterns {} not found, resolving country only", path.display());
            return Ok(Self::new());
        }
        let file = fs::File::open(path).map_err(|source| PhoneError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut patterns = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| PhoneError::Io {
                path: path.display().to_string(),
                source,
            })?;
            if idx == 0 {
                continue; // header
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != 4 {
                continue;
            }
            let code = fields[0].to_string();
            let mut pattern = fields[1].to_string();
            if let Some(stripped) = pattern.strip_prefix(&format!("{code}-")) {
                pattern = stripped.to_string();
            }
            patterns.push(RegionPattern {
                code,
                pattern,
                region: fields[3].to_string(),
            });
        }
        Ok(Self { patterns })
    }

    /// Resolve a number to its country (and region, when patterns are
    /// loaded). `None` for empty input or an unknown prefix.
    pub fn resolve(&self, phone: &str) -> Option<PhoneRegion> {
        let digits = normalize_number(phone)?;

        let (prefix, country, nationality) = PREFIX_TABLE
            .iter()
            .find(|(prefix, _, _)| digits.starts_with(prefix))
            .copied()?;

        // Regional refinement applies to Russian numbers only: the pattern
        // table is keyed on the national (post-`7`) number.
        let region = if prefix == "7" {
            let national = &digits[1..];
            self.patterns
                .iter()
                .find(|p| p.matches(national))
                .map(|p| p.region.clone())
        } else {
            None
        };

        Some(PhoneRegion {
            country,
            region,
            nationality,
        })
    }
}

/// Strip `+` / `00` international prefixes; reject anything that is not
/// all digits afterwards.
fn normalize_number(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return None;
    }
    let stripped = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix("00"))
        .unwrap_or(trimmed);
    if stripped.is_empty() || !stripped.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(stripped.to_string())
}
