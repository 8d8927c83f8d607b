#[cfg(test)]
mod integration_tests {

    use std::sync::Arc;

    use crate::detect::ethnic_hint::EthnicClassifier;
    use crate::{Classifier, Nationality};

    #[test]
    fn representative_contact_names() {
        let c = Classifier::standard();
        let cases = [
            ("Александр Иванов", Nationality::Russian),
            ("Сергій Ковальчук", Nationality::Ukrainian),
            ("Быкаў", Nationality::Belarusian),
            ("გიორგი ბერიძე", Nationality::Georgian),
            ("Тигран Petrosyan", Nationality::Armenian),
            ("Leyla мама Баку", Nationality::Azerbaijani),
            ("Нұрлан", Nationality::Kazakh),
            ("Ильдар Казань", Nationality::Tatar),
            ("Зайка моя 💕", Nationality::Russian),
            ("Олег Сбербанк", Nationality::Russian),
            ("Сантехник", Nationality::Russian),
            ("мраЗЬ какая-то", Nationality::Vulgar),
            ("qwrtp", Nationality::Undetermined),
        ];
        for (name, expected) in cases {
            assert_eq!(c.classify(name), expected, "{name:?}");
        }
    }

    #[test]
    fn transliteration_equivalent_spellings() {
        let c = Classifier::standard();
        let pairs = [
            ("Шота", "Shota"),
            ("Тигран", "Tigran"),
            ("Александр", "Aleksandr"),
            ("Петренко", "Petrenko"),
            ("Церетели дзе", "Tsereteli dze"),
        ];
        for (native, latin) in pairs {
            assert_eq!(c.classify(native), c.classify(latin), "{native} vs {latin}");
        }
    }

    #[test]
    fn pipeline_is_noise_tolerant() {
        let c = Classifier::standard();
        // decoration must never change the verdict
        let noisy = [
            ("Ваня", "Ваня!!! 🚗 2022"),
            ("Петренко", "~*~Петренко~*~"),
            ("Ильдар Казань", "Ильдар (Казань) 24/7"),
        ];
        for (clean, messy) in noisy {
            assert_eq!(c.classify(clean), c.classify(messy), "{messy:?}");
        }
    }

    #[test]
    fn full_name_path_matches_plain_path_without_hint() {
        let c = Classifier::standard();
        assert_eq!(
            c.classify_full_name("Иван", "Петров", "Сергеевич"),
            Nationality::Russian
        );
        assert_eq!(
            c.classify_full_name("Вахтанг", "Церетели", ""),
            c.classify("Вахтанг Церетели")
        );
    }

    struct StubParser(&'static str);

    impl EthnicClassifier for StubParser {
        fn classify(
            &self,
            _last: &str,
            _first: &str,
            _middle: &str,
        ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(vec![self.0.to_string()])
        }
    }

    #[test]
    fn ethnic_hint_runs_before_suffix_voting_on_full_names() {
        let with_hint = Classifier::builder()
            .ethnic_classifier(Arc::new(StubParser("che")))
            .build();
        // "Джабраилов" alone would suffix-vote to Russian ("-ов"); the
        // full-name path consults the external classifier first
        assert_eq!(
            with_hint.classify_full_name("Турпал", "Джабраилов", ""),
            Nationality::Chechen
        );
        // the plain path never consults the classifier
        assert_eq!(
            with_hint.classify("Турпал Джабраилов"),
            Nationality::Russian
        );
    }

    #[test]
    fn failing_hint_degrades_to_suffix_voting() {
        struct Broken;
        impl EthnicClassifier for Broken {
            fn classify(
                &self,
                _last: &str,
                _first: &str,
                _middle: &str,
            ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
                Err("io error".into())
            }
        }
        let c = Classifier::builder().ethnic_classifier(Arc::new(Broken)).build();
        assert_eq!(
            c.classify_full_name("Турпал", "Джабраилов", ""),
            Nationality::Russian
        );
    }
}
