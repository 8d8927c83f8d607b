use std::fmt;

/// Closed set of classification outcomes.
///
/// Every classification call returns exactly one of these; [`Nationality::Undetermined`]
/// is the floor when no detector fires. `Vulgar` and `Shalavy` are moderation
/// outcomes, not ethnicities, and take priority over lexicon-driven tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nationality {
    Russian,
    Ukrainian,
    Belarusian,
    Uzbek,
    Kazakh,
    Georgian,
    Armenian,
    Azerbaijani,
    Tajik,
    Moldovan,
    Lithuanian,
    Latvian,
    Estonian,
    Turkmen,
    Kyrgyz,
    Chechen,
    Dagestani,
    Ingush,
    Tatar,
    Buryat,
    Islam,
    Caucasian,
    Asian,
    AngloSaxon,
    Vulgar,
    Shalavy,
    Undetermined,
}

/// All tags in declaration order. This order is load-bearing: suffix-vote
/// ties and any "first table entry wins" rule resolve against it.
pub const ALL: &[Nationality] = &[
    Nationality::Russian,
    Nationality::Ukrainian,
    Nationality::Belarusian,
    Nationality::Uzbek,
    Nationality::Kazakh,
    Nationality::Georgian,
    Nationality::Armenian,
    Nationality::Azerbaijani,
    Nationality::Tajik,
    Nationality::Moldovan,
    Nationality::Lithuanian,
    Nationality::Latvian,
    Nationality::Estonian,
    Nationality::Turkmen,
    Nationality::Kyrgyz,
    Nationality::Chechen,
    Nationality::Dagestani,
    Nationality::Ingush,
    Nationality::Tatar,
    Nationality::Buryat,
    Nationality::Islam,
    Nationality::Caucasian,
    Nationality::Asian,
    Nationality::AngloSaxon,
    Nationality::Vulgar,
    Nationality::Shalavy,
    Nationality::Undetermined,
];

impl Nationality {
    /// Human-readable display label, as written into reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Russian => "Русский",
            Self::Ukrainian => "Украинец",
            Self::Belarusian => "Белорус",
            Self::Uzbek => "Узбек",
            Self::Kazakh => "Казах",
            Self::Georgian => "Грузин",
            Self::Armenian => "Армянин",
            Self::Azerbaijani => "Азербайджанец",
            Self::Tajik => "Таджик",
            Self::Moldovan => "Молдаванин",
            Self::Lithuanian => "Литовец",
            Self::Latvian => "Латыш",
            Self::Estonian => "Эстонец",
            Self::Turkmen => "Туркмен",
            Self::Kyrgyz => "Киргиз",
            Self::Chechen => "Чеченец",
            Self::Dagestani => "Дагестанец",
            Self::Ingush => "Ингуш",
            Self::Tatar => "Татарин",
            Self::Buryat => "Бурят",
            Self::Islam => "Ислам",
            Self::Caucasian => "Кавказ",
            Self::Asian => "Азия",
            Self::AngloSaxon => "Англосакс",
            Self::Vulgar => "Вульгарное",
            Self::Shalavy => "Шалавы",
            Self::Undetermined => "Не определено",
        }
    }

    /// Stable ASCII key, used to address lexicon sections in external data
    /// files (`typical_names.json`).
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Russian => "RUSSIAN",
            Self::Ukrainian => "UKRAINIAN",
            Self::Belarusian => "BELARUSIAN",
            Self::Uzbek => "UZBEK",
            Self::Kazakh => "KAZAKH",
            Self::Georgian => "GEORGIAN",
            Self::Armenian => "ARMENIAN",
            Self::Azerbaijani => "AZERBAIJANI",
            Self::Tajik => "TAJIK",
            Self::Moldovan => "MOLDOVAN",
            Self::Lithuanian => "LITHUANIAN",
            Self::Latvian => "LATVIAN",
            Self::Estonian => "ESTONIAN",
            Self::Turkmen => "TURKMEN",
            Self::Kyrgyz => "KYRGYZ",
            Self::Chechen => "CHECHEN",
            Self::Dagestani => "DAGESTANI",
            Self::Ingush => "INGUSH",
            Self::Tatar => "TATAR",
            Self::Buryat => "BURYAT",
            Self::Islam => "ISLAM",
            Self::Caucasian => "CAUCASIAN",
            Self::Asian => "ASIAN",
            Self::AngloSaxon => "ANGLO_SAXON",
            Self::Vulgar => "VULGAR",
            Self::Shalavy => "SHALAVY",
            Self::Undetermined => "UNDETERMINED",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ALL.iter().copied().find(|n| n.key() == key)
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
