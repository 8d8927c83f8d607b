//! Geographic-keyword detector: city and region names embedded in contact
//! names ("Ашот Ереван", "Сергей Москва такси"). First matching table
//! entry wins; the table orders sovereign states before Russian republics.

use crate::detect::{Detector, contains_any};
use crate::lexicon::Lexicon;
use crate::nationality::Nationality;
use crate::normalize::NameInput;

#[derive(Debug, Default, Clone, Copy)]
pub struct GeoKeyword;

impl Detector for GeoKeyword {
    fn name(&self) -> &'static str {
        "geo_keyword"
    }

    fn detect(&self, input: &NameInput<'_>, lexicon: &Lexicon) -> Option<Nationality> {
        lexicon
            .geo
            .iter()
            .find(|entry| {
                contains_any(&input.cleaned_lower, entry.keywords.iter().map(String::as_str))
            })
            .map(|entry| entry.nationality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn detect(name: &str) -> Option<Nationality> {
        let lex = Lexicon::standard();
        let input = normalize(name, &lex);
        GeoKeyword.detect(&input, &lex)
    }

    #[test]
    fn city_names_in_both_scripts() {
        assert_eq!(detect("Ашот Ереван"), Some(Nationality::Armenian));
        assert_eq!(detect("Tbilisi Tours"), Some(Nationality::Georgian));
    }

    #[test]
    fn republic_cities_map_to_their_nationality() {
        assert_eq!(detect("Ильдар Казань"), Some(Nationality::Tatar));
        assert_eq!(detect("Махачкала рынок"), Some(Nationality::Dagestani));
    }

    #[test]
    fn first_table_entry_wins() {
        // Moscow (Russia, first row) beats Kyiv (Ukraine, second row)
        assert_eq!(detect("Москва Киев"), Some(Nationality::Russian));
    }
}
