//! Static lexicon tables — the single source of truth for every curated
//! word list. Entries keep their authored casing; the [`Lexicon`] builder
//! lowercases and transliterates into query sets.
//!
//! Declaration order is semantic: suffix-vote ties and multi-match keyword
//! scans resolve to the earliest table entry.

use crate::lexicon::{GeoEntry, NationEntry};
use crate::nationality::Nationality;

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates per-nationality word lists from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_nations {
    ($(
        $nat:ident => {
            given: [ $($g:literal),* $(,)? ],
            suffixes: [ $($s:literal),* $(,)? ],
            patronymic: [ $($p:literal),* $(,)? ]
        }
    ),* $(,)?) => {
        // Per-nationality static data modules
        $(
            paste! {
                mod [<$nat:lower _data>] {
                    pub static GIVEN: &[&str] = &[$($g),*];
                    pub static SUFFIXES: &[&str] = &[$($s),*];
                    pub static PATRONYMIC: &[&str] = &[$($p),*];
                }
            }
        )*

        // Declaration-ordered table (public)
        paste! {
            pub static NATION_TABLE: &[NationEntry] = &[
                $(
                    NationEntry {
                        nationality: Nationality::$nat,
                        given: [<$nat:lower _data>]::GIVEN,
                        suffixes: [<$nat:lower _data>]::SUFFIXES,
                        patronymic: [<$nat:lower _data>]::PATRONYMIC,
                    }
                ),*
            ];
        }
    };
}

// ---------------------------------------------------------------------------
//    Nationality word lists (single source of truth)
//
//    `given` mixes native script and the Latin/Cyrillic spellings the lists
//    were collected with; the index builder adds the transliterated form of
//    every entry, so only one spelling needs to be authored.
// ---------------------------------------------------------------------------
define_nations! {
    Russian => {
        given: [
            "Александр", "Сергей", "Дмитрий", "Андрей", "Алексей", "Максим",
            "Евгений", "Иван", "Михаил", "Николай", "Владимир", "Артем",
            "Денис", "Павел", "Антон", "Виктор", "Роман", "Игорь",
            "Константин", "Олег", "Василий", "Кирилл", "Юрий", "Илья",
            "Петр", "Никита", "Григорий", "Борис", "Георгий", "Анатолий",
            "Захар", "Арсений", "Даниил", "Егор", "Матвей", "Тимофей",
            "Станислав", "Леонид", "Валерий", "Виталий", "Вячеслав", "Глеб",
            "Артур", "Тимур", "Руслан", "Владислав", "Степан", "Федор",
            "Семен", "Геннадий", "Аркадий", "Лев", "Эдуард", "Валентин",
            "Вадим",
            "Татьяна", "Елена", "Ольга", "Наталья", "Ирина", "Светлана",
            "Анна", "Екатерина", "Мария", "Юлия", "Анастасия", "Людмила",
            "Галина", "Валентина", "Нина", "Марина", "Надежда", "Любовь",
            "Вера", "Оксана", "Дарья", "Ксения", "Алина", "Евгения",
            "Софья", "Полина", "Маргарита", "Лариса", "Алла", "Инна",
            "Яна", "Кристина", "Виктория", "Лидия", "Елизавета", "Диана",
            "Карина", "Жанна", "Зоя", "Тамара", "Алиса", "Варвара",
            "Евдокия", "Зинаида", "Клавдия", "Раиса", "Ульяна", "Эмма",
            "Арина",
            // Diminutive and slang spellings seen in the wild
            "Саша", "Дима", "Миша", "Костя", "Коля", "Ваня", "Паша",
            "Женя", "Леша", "Андрюша", "Вова", "Вован", "Захарка", "Ксюша",
            "Ксюха", "Маша", "Даша", "Наташа", "Катя", "Аня", "Оля",
            "Света", "Лена", "Настя", "Лиза", "Люба", "Вика", "Ника",
            "Сережа", "Жора", "Юля", "Гена", "Толик", "Тоха", "Макс",
            "Игорек", "Ярик", "Слава", "Славик", "Витя", "Виталя",
            "Артемка", "Женька", "Леха", "Гоша", "Стас", "Лева", "Лёва",
            "Левчик", "Мишаня", "Мишка", "Артём", "Дениска", "Антоха",
            "Тёма", "Тема", "Данил", "Данилл",
        ],
        suffixes: [
            "ов", "ев", "ov", "ev", "ин", "in", "sky", "skiy", "ykh", "ikh",
            "ий", "oy", "ова", "ева", "ина", "ская", "eva", "ina", "skaya",
        ],
        patronymic: ["ович", "евич", "овна", "евна"]
    },
    Ukrainian => {
        given: [
            "Олександр", "Сергій", "Андрій", "Володимир", "Дмитро", "Іван",
            "Микола", "Михайло", "Петро", "Василь", "Віктор", "Олег",
            "Юрій", "Ярослав", "Євген", "Тарас", "Богдан", "Анатолій",
            "Валерій", "Григорій", "Павло", "Степан", "Ігор", "Леонід",
            "Віталій", "Олексій", "Костянтин", "Станіслав", "Геннадій",
            "Владислав", "Данило", "Назар", "Остап", "Матвій", "Тимофій",
            "Арсен", "Гліб", "Кирило", "Федір", "Семен", "Георгій",
            "Едуард", "Марк", "Ростислав", "Святослав",
            "Ольга", "Тетяна", "Наталія", "Ірина", "Світлана", "Марія",
            "Катерина", "Юлія", "Людмила", "Оксана", "Галина", "Лариса",
            "Надія", "Вікторія", "Любов", "Олена", "Лідія", "Інна",
            "Софія", "Дарина", "Христина", "Олександра", "Євгенія",
            "Поліна", "Анастасія", "Вероніка", "Діана", "Аліна",
            "Ангеліна", "Олеся", "Мирослава", "Лілія", "Ніна", "Раїса",
            "Зінаїда", "Уляна", "Божена", "Злата", "Орися", "Соломія",
            "Леся", "Роксолана", "Богдана",
        ],
        suffixes: [
            "енко", "enko", "чук", "chuk", "ко", "ko", "ук", "uk",
            "юк", "yuk", "ык", "yk",
        ],
        patronymic: ["ович", "евич", "овна", "евна", "івич", "іївна"]
    },
    Belarusian => {
        given: [],
        suffixes: ["вич", "vich", "вичус", "vichus", "вичик", "vichyk"],
        patronymic: ["ович", "евич", "овна", "евна", "овіч", "евіч"]
    },
    Uzbek => {
        given: [
            "Акром", "Улугбек", "Беҳзод", "Жамшид", "Алишер", "Темур",
            "Бобур", "Ислом", "Мирзо", "Саидакрам", "Шавкат", "Шухрат",
            "Шерзод", "Азиз", "Акмал", "Фаррух",
        ],
        suffixes: ["зода", "zoda", "заде", "zade", "zada"],
        patronymic: ["зода", "заде", "zada"]
    },
    Kazakh => {
        given: [
            "Асем", "Канат", "Нурсултан", "Бакыт", "Айгерим", "Данияр",
            "Алмаз", "Айсулу", "Ержан", "Багдат", "Гульжан", "Мадина",
            "Серик", "Алия", "Бахыт", "Жанар",
        ],
        suffixes: [
            "ұлы", "uly", "кызы", "kyzy", "бек", "bek", "бай", "bay",
            "тай", "tai",
        ],
        patronymic: ["улы", "ұлы", "кызы"]
    },
    Georgian => {
        given: [
            "გიორგი", "Георгий", "ნინო", "Нино", "თამარ", "Тамара",
            "ლაშა", "Лаша", "ლევან", "Леван", "ზურაბ", "Зураб",
            "მიხეილ", "დავით", "Давид", "ირაკლი", "Ираклий",
            "ბესო", "Бесо", "მარიამ", "Мариам", "ნატო", "Нато",
            "თეონა", "Теона", "შოთა", "Шота", "ეკა", "Эка",
            "გუგა", "Гуга", "ელენე", "Элене", "კახა", "Каха",
            "თემურ", "Теймур", "ზვიად", "Звиад",
        ],
        suffixes: [
            "швили", "shvili", "дзе", "dze", "адзе", "adze", "ия", "ia",
            "ури", "uri",
        ],
        patronymic: ["швили", "дзе"]
    },
    Armenian => {
        given: [
            "Արմեն", "Армен", "Տիգրան", "Тигран", "Նարեկ", "Нарек",
            "Հրանտ", "Грант", "Գայանե", "Гаянэ", "Անահիտ", "Анахит",
            "Արա", "Ара", "Վարդան", "Вардан", "Սերժ", "Серж",
            "Կարեն", "Карен", "Հակոբ", "Акоб", "Արտյոմ", "Սոֆիա",
            "Լեւոն", "Левон", "Մանե", "Мане", "Անուշ", "Ануш",
            "Արման", "Арман", "Գոռ", "Гор", "Հայկ", "Айк",
        ],
        suffixes: ["ян", "an", "янц", "yants"],
        patronymic: ["ян", "янц"]
    },
    Azerbaijani => {
        given: [
            "Əli", "Али", "Məmməd", "Мамед", "Murad", "Мурад",
            "Leyla", "Лейла", "Rəşad", "Рашад", "Nigar", "Нигар",
            "Əfqan", "Афган", "Aysel", "Айсель", "Zaur", "Заур",
            "Elvin", "Эльвин", "Gülnarə", "Гюльнара", "Kamran", "Камран",
            "Cavid", "Джавид", "Sevda", "Севда", "Eldar", "Эльдар",
            "Xanım", "Xanim", "Ханым", "Səbinə", "Сабина", "Fərid", "Фарид",
            "Zeynəb", "Зейнаб", "Fuad", "Фуад",
        ],
        suffixes: ["оглы", "ogly", "заде", "zade"],
        patronymic: ["оглы", "кызы"]
    },
    Tajik => {
        given: [],
        suffixes: ["заде", "zade", "зода", "zoda"],
        patronymic: ["зода", "заде", "zada"]
    },
    Moldovan => {
        given: [],
        suffixes: ["ару", "aru", "еску", "escu"],
        patronymic: []
    },
    Lithuanian => {
        given: [],
        suffixes: [
            "ас", "as", "ис", "is", "ус", "us", "юс", "jus",
            "айтис", "aitis", "йте", "ytė", "ене", "iene",
        ],
        patronymic: []
    },
    Latvian => {
        given: [],
        suffixes: [
            "анс", "ans", "калнс", "kalns", "вецмуктанс", "vecmuktans",
            "сонс", "sons", "бергс", "bergs",
        ],
        patronymic: []
    },
    Estonian => {
        given: [],
        suffixes: [
            "мяэ", "mäe", "пылд", "põld", "оя", "oja", "вяли", "väli",
            "мяги", "mägi", "метс", "mets", "соо", "soo",
        ],
        patronymic: []
    },
    Chechen => {
        given: [
            "Ахмад", "Ахмат", "Рамзан", "Зелимхан", "Зелим", "Мовлади",
            "Ислам", "Шамиль", "Адам", "Магомед", "Мовсар", "Лема",
        ],
        suffixes: [
            "хадж", "khadzh", "хаджи", "khadzhi", "хож", "khozh",
            "хаджиев", "khadzhiev",
        ],
        patronymic: []
    },
    Dagestani => {
        given: [
            "Абдулла", "Расул", "Гаджи", "Рашид", "Абдул", "Усман",
            "Хабиб", "Гамзат",
        ],
        suffixes: ["гаджиев", "gadzhiev", "хадж", "khadzh", "гаджи", "gadji"],
        patronymic: []
    },
    Ingush => {
        given: ["Юнус-Бек", "Мурат", "Муса", "Беслан", "Иса", "Магомед-Бек"],
        suffixes: ["гов", "вов", "ив", "ме"],
        patronymic: []
    },
    Tatar => {
        given: [
            "Ринат", "Фарит", "Ильдар", "Рамиль", "Рушан", "Гульнара",
            "Марат", "Рафис", "Дамир", "Damir",
        ],
        suffixes: ["уллин", "гуллин", "уллов", "улов"],
        patronymic: []
    },
    Buryat => {
        given: [],
        suffixes: ["доржиев", "дугаров", "баир"],
        patronymic: []
    },
    Caucasian => {
        given: [],
        suffixes: ["пш", "psh", "шев", "shev"],
        patronymic: []
    },
    Asian => {
        given: [],
        suffixes: [
            "баев", "baev", "медов", "medov", "гулов", "gulov",
            "кулов", "kulov", "гул", "gul",
        ],
        patronymic: []
    },
    AngloSaxon => {
        given: [],
        suffixes: [
            "сон", "son", "тон", "ton", "лей", "ley", "форд", "ford",
            "вуд", "wood", "ман", "man", "филд", "field", "брук", "brook",
        ],
        patronymic: []
    },
}

// ---------------------------------------------------------------------------
//    Flag emoji → nationality (ordered: first flag found in the raw text wins)
// ---------------------------------------------------------------------------
pub static FLAG_TABLE: &[(&str, Nationality)] = &[
    ("🇷🇺", Nationality::Russian),
    ("🇺🇦", Nationality::Ukrainian),
    ("🇧🇾", Nationality::Belarusian),
    ("🇰🇿", Nationality::Kazakh),
    ("🇺🇿", Nationality::Uzbek),
    ("🇹🇯", Nationality::Tajik),
    ("🇬🇪", Nationality::Georgian),
    ("🇦🇲", Nationality::Armenian),
    ("🇦🇿", Nationality::Azerbaijani),
    ("🇲🇩", Nationality::Moldovan),
    ("🇱🇹", Nationality::Lithuanian),
    ("🇱🇻", Nationality::Latvian),
    ("🇪🇪", Nationality::Estonian),
];

/// Single designated marker glyph mapped unconditionally to `Shalavy`.
pub const MARKER_GLYPH: &str = "💦";

// ---------------------------------------------------------------------------
//    Geo keywords: country / region → nationality, first match wins.
//    Republics of the Russian Federation come after the sovereign states so
//    e.g. "Казань" (Tatarstan) is never shadowed by a broader entry.
// ---------------------------------------------------------------------------
pub static GEO_TABLE: &[GeoEntry] = &[
    GeoEntry {
        country: "Russia",
        nationality: Nationality::Russian,
        keywords: &[
            "Москва", "Moscow", "Санкт-Петербург", "Saint Petersburg",
            "Новосибирск", "Novosibirsk", "Екатеринбург", "Yekaterinburg",
            "Ростов-на-Дону", "Нижний Новгород",
        ],
    },
    GeoEntry {
        country: "Ukraine",
        nationality: Nationality::Ukrainian,
        keywords: &[
            "Киев", "Kyiv", "Львов", "Lviv", "Одесса", "Odesa", "Днепр",
            "Dnipro", "Харьков", "Kharkiv", "Херсон", "Запорожье",
        ],
    },
    GeoEntry {
        country: "Belarus",
        nationality: Nationality::Belarusian,
        keywords: &["Минск", "Minsk", "Гомель", "Gomel", "Могилев", "Mogilev", "Брест", "Brest"],
    },
    GeoEntry {
        country: "Kazakhstan",
        nationality: Nationality::Kazakh,
        keywords: &[
            "Алматы", "Almaty", "Астана", "Нур-Султан", "Nur-Sultan",
            "Шымкент", "Shymkent", "Караганда", "Karaganda",
        ],
    },
    GeoEntry {
        country: "Uzbekistan",
        nationality: Nationality::Uzbek,
        keywords: &["Ташкент", "Tashkent", "Самарканд", "Samarkand", "Бухара", "Bukhara"],
    },
    GeoEntry {
        country: "Georgia",
        nationality: Nationality::Georgian,
        keywords: &["Тбилиси", "Tbilisi", "Батуми", "Batumi", "Кутаиси", "Kutaisi", "Сухуми", "Sukhumi"],
    },
    GeoEntry {
        country: "Armenia",
        nationality: Nationality::Armenian,
        keywords: &["Ереван", "Yerevan", "Гюмри", "Gyumri", "Ванадзор", "Vanadzor"],
    },
    GeoEntry {
        country: "Azerbaijan",
        nationality: Nationality::Azerbaijani,
        keywords: &["Баку", "Baku", "Гянджа", "Ganja", "Сумгаит", "Sumgait"],
    },
    GeoEntry {
        country: "Moldova",
        nationality: Nationality::Moldovan,
        keywords: &["Кишинёв", "Chisinau", "Бельцы"],
    },
    GeoEntry {
        country: "Kyrgyzstan",
        nationality: Nationality::Kyrgyz,
        keywords: &["Бишкек", "Bishkek", "Ош", "Jalal-Abad"],
    },
    GeoEntry {
        country: "Tajikistan",
        nationality: Nationality::Tajik,
        keywords: &["Душанбе", "Dushanbe", "Худжанд", "Khujand", "Куляб", "Kulob"],
    },
    GeoEntry {
        country: "Turkmenistan",
        nationality: Nationality::Turkmen,
        keywords: &["Ашхабад", "Ashgabat", "Turkmenabat", "Мары"],
    },
    GeoEntry {
        country: "Latvia",
        nationality: Nationality::Latvian,
        keywords: &["Рига", "Riga", "Даугавпилс", "Daugavpils", "Юрмала", "Jurmala"],
    },
    GeoEntry {
        country: "Lithuania",
        nationality: Nationality::Lithuanian,
        keywords: &["Вильнюс", "Vilnius", "Каунас", "Kaunas", "Клайпеда", "Klaipeda"],
    },
    GeoEntry {
        country: "Estonia",
        nationality: Nationality::Estonian,
        keywords: &["Таллин", "Tallinn", "Тарту", "Tartu", "Нарва", "Narva"],
    },
    GeoEntry {
        country: "Chechnya",
        nationality: Nationality::Chechen,
        keywords: &["Грозный", "Grozny", "Шали", "Shali", "Аргун", "Argun"],
    },
    GeoEntry {
        country: "Dagestan",
        nationality: Nationality::Dagestani,
        keywords: &["Махачкала", "Makhachkala", "Дербент", "Derbent", "Каспийск", "Kaspiysk"],
    },
    GeoEntry {
        country: "Ingushetia",
        nationality: Nationality::Ingush,
        keywords: &["Назрань", "Nazran", "Магас", "Magas"],
    },
    GeoEntry {
        country: "Tatarstan",
        nationality: Nationality::Tatar,
        keywords: &[
            "Казань", "Kazan", "Набережные Челны", "Naberezhnye Chelny",
            "Альметьевск", "Almetyevsk",
        ],
    },
    GeoEntry {
        country: "Buryatia",
        nationality: Nationality::Buryat,
        keywords: &[
            "Улан-Удэ", "Ulan-Ude", "Северобайкальск", "Severobaykalsk",
            "Гусиноозёрск", "Gusinoozersk",
        ],
    },
    GeoEntry {
        country: "Bashkortostan",
        nationality: Nationality::Tatar,
        keywords: &["Уфа", "Ufa", "Стерлитамак", "Sterlitamak", "Салават", "Salavat"],
    },
    GeoEntry {
        country: "Komi",
        nationality: Nationality::Russian,
        keywords: &["Сыктывкар", "Syktyvkar", "Воркута", "Vorkuta", "Ухта", "Ukhta"],
    },
    GeoEntry {
        country: "Kalmykia",
        nationality: Nationality::Russian,
        keywords: &["Элиста", "Elista", "Лагань", "Lagan", "Городовиковск", "Gorodovikovsk"],
    },
    GeoEntry {
        country: "Karelia",
        nationality: Nationality::Russian,
        keywords: &["Петрозаводск", "Petrozavodsk", "Кондопога", "Kondopoga", "Сортавала", "Sortavala"],
    },
    GeoEntry {
        country: "Sakha (Yakutia)",
        nationality: Nationality::Russian,
        keywords: &["Якутск", "Yakutsk", "Нерюнгри", "Neryungri", "Мирный", "Mirny"],
    },
];

// ---------------------------------------------------------------------------
//    Corporate / brand keywords. The curated list is Russian-market brands,
//    so a hit always classifies as Russian.
// ---------------------------------------------------------------------------
pub static COMPANY_KEYWORDS: &[&str] = &[
    "Сбербанк", "Тинькофф", "ВТБ", "Газпромбанк", "Газпром", "Роснефть",
    "Лукойл", "РЖД", "Яндекс", "Магнит", "МТС", "Мегафон", "Билайн",
    "Ростелеком", "Mail.ru", "Озон", "Wildberries", "Почта России",
    "Аэрофлот", "UTair", "S7 Airlines", "Школа программирования",
    "Код будущего", "Пятерочка", "Перекресток", "М.Видео", "Эльдорадо",
    "Детский Мир", "Тануки", "Япоша", "Росгосстрах", "Росатом", "Роскосмос",
    "Росморпорт", "Сургутнефтегаз", "Новатэк", "Норникель", "Полюс Золото",
    "Спартака Ремонт", "Gazprom", "Lukoil",
];

// ---------------------------------------------------------------------------
//    Profession and kinship vocabulary (substring hits → Russian)
// ---------------------------------------------------------------------------
pub static PROFESSIONS: &[&str] = &[
    "военный", "аниматор", "бухгалтер", "адвокат", "генерал", "пожарный",
    "директор", "пилот", "официант", "эколог", "механик", "судья",
    "лейтенант", "видеограф", "шахтер", "фармацевт", "менеджер", "электрик",
    "профессор", "водитель", "сварщик", "бармен", "журналист", "хирург",
    "учёный", "майор", "провизор", "повар", "агроном", "ученый", "инженер",
    "сантехник", "лётчик", "рекрутер", "врач", "архитектор", "солдат",
    "логист", "программист", "строитель", "фотограф", "бизнесмен",
    "маркетолог", "полковник", "учительница", "учитель", "фермер", "доктор",
    "полиция", "юрист", "медсестра", "диспетчер", "дизайнер", "музыкант",
    "капитан", "психолог", "летчик", "парикмахер", "фельдшер",
];

pub static FAMILY_RELATIONSHIPS: &[&str] = &[
    "мама", "папа", "брат", "сестра", "дядя", "тетя", "теть", "тёть",
    "тять", "дять", "бабушка", "дедушка", "сын", "дочь", "кума", "кум",
    "крестный", "крестная", "батя", "супруга", "муж", "жена", "любимый",
    "любимая", "братишка", "сестрёнка", "батюшка", "матушка", "отец",
    "мать", "дядька", "тётя", "внучка", "внук", "свекровь", "свекр",
    "тесть", "теща", "зять", "невестка", "братан", "сеструха", "батяня",
    "бабуля", "дедуля",
];

// ---------------------------------------------------------------------------
//    Affectionate pet names (Russian-language, substring hits → Russian)
// ---------------------------------------------------------------------------
pub static AFFECTIONATE_NICKNAMES: &[&str] = &[
    "Бусинка", "Зайчик", "Котик", "Малыш", "Малышка", "Ласточка",
    "Солнышко", "Зайка", "Пупсик", "Зайчонок", "Киска", "Масик", "Крошка",
    "Рыбка", "Котёнок", "Чапа", "Васька", "Сеня", "Тоша", "Петька", "Лёша",
];

// ---------------------------------------------------------------------------
//    Moderation word list (substring hits → Vulgar)
// ---------------------------------------------------------------------------
pub static VULGAR_WORDS: &[&str] = &[
    "идиот", "дурак", "шалава", "шлюха", "мразь", "сволочь", "пидор",
    "какашка",
];

// ---------------------------------------------------------------------------
//    Diminutive → formal rewrite (exact, case-sensitive token match)
// ---------------------------------------------------------------------------
pub static DIMINUTIVE_TO_FORMAL: Map<&'static str, &'static str> = phf_map! {
    "Саша" => "Александр",
    "Саня" => "Александр",
    "Коля" => "Николай",
    "Ваня" => "Иван",
    "Дима" => "Дмитрий",
};

// ---------------------------------------------------------------------------
//    Non-name filler tokens: business/service words that pollute contact
//    names ("Спартака Ремонт", "Митсубиси Танк", ...)
// ---------------------------------------------------------------------------
pub static NON_NAME_FILLERS: &[&str] = &[
    "Ремонт", "Танк", "Авто", "Митсубиси", "Спартака", "Рядовой",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nation_table_order_matches_declaration() {
        assert_eq!(NATION_TABLE[0].nationality, Nationality::Russian);
        assert_eq!(NATION_TABLE[1].nationality, Nationality::Ukrainian);
        let last = NATION_TABLE.last().unwrap();
        assert_eq!(last.nationality, Nationality::AngloSaxon);
    }

    #[test]
    fn every_nation_entry_is_unique() {
        use std::collections::HashSet;
        let nats: HashSet<_> = NATION_TABLE.iter().map(|e| e.nationality).collect();
        assert_eq!(nats.len(), NATION_TABLE.len());
    }

    #[test]
    fn flag_table_entries_are_flag_pairs() {
        for (flag, _) in FLAG_TABLE {
            assert_eq!(flag.chars().count(), 2, "{flag} is not a two-glyph flag");
            assert!(flag.chars().all(crate::unicode::is_regional_indicator));
        }
    }

    #[test]
    fn geo_sovereign_states_precede_republics() {
        let russia = GEO_TABLE.iter().position(|e| e.country == "Russia").unwrap();
        let tatarstan = GEO_TABLE.iter().position(|e| e.country == "Tatarstan").unwrap();
        assert!(russia < tatarstan);
        // "Казань" must belong to Tatarstan, not the broader Russia entry
        assert!(!GEO_TABLE[russia].keywords.contains(&"Казань"));
    }
}
