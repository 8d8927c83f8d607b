//! Surname-suffix voting — the cascade's unconditional last resort.
//!
//! Every token votes at most once per nationality (a token ending in two
//! of the same nationality's suffixes is still one vote). The nationality
//! with the most votes wins; on a tie the earlier table entry wins, which
//! makes the declaration order of `NATION_TABLE` part of the contract.

use crate::detect::Detector;
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct SuffixVote;

impl Detector for SuffixVote {
    fn name(&self) -> &'static str {
        "suffix_vote"
    }

    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality> {
        let mut best: Option<(Nationality, usize)> = None;

        for nation in &lexicon.nations {
            if nation.suffixes.is_empty() {
                continue;
            }
            let votes = input
                .tokens
                .iter()
                .filter(|token| {
                    let lower = token.to_lowercase();
                    nation
                        .suffixes
                        .iter()
                        .any(|suffix| lower.ends_with(suffix.as_str()))
                })
                .count();
            // Strict comparison keeps the earliest maximum: a later
            // nationality must beat the count outright to take over.
            if votes > 0 && best.map_or(true, |(_, top)| votes > top) {
                best = Some((nation.nationality, votes));
            }
        }

        best.map(|(nationality, _)| nationality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn detect(name: &str) -> Option<Nationality> {
        let lex = Lexicon::standard();
        let input = normalize(name, &lex);
        SuffixVote.detect(&input, &lex)
    }

    #[test]
    fn single_surname() {
        assert_eq!(detect("Петренко"), Some(Nationality::Ukrainian));
        assert_eq!(detect("Церетели дзе"), Some(Nationality::Georgian));
    }

    #[test]
    fn majority_wins() {
        // two Ukrainian endings against one Russian
        assert_eq!(
            detect("Шевченко Ковальчук Иванов"),
            Some(Nationality::Ukrainian)
        );
    }

    #[test]
    fn tie_resolves_to_earlier_table_entry() {
        // one Russian ending ("-ов") and one Ukrainian ("-енко"):
        // Russian is declared first and takes the tie.
        assert_eq!(detect("Иванов Петренко"), Some(Nationality::Russian));
    }

    #[test]
    fn transliterated_suffixes_vote_too() {
        assert_eq!(detect("Ivanov"), Some(Nationality::Russian));
        assert_eq!(detect("Petrenko"), Some(Nationality::Ukrainian));
    }

    #[test]
    fn no_matches_no_result() {
        assert_eq!(detect("Цфыхз"), None);
    }
}
