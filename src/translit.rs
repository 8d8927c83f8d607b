//! Context-free transliteration of Cyrillic, Georgian and Armenian script
//! to Latin.
//!
//! Applied per token when the lexicon index is built, never at query time.
//! The mapping is letter-for-letter with a fixed output per source letter;
//! characters with no rule (Latin included) pass through unchanged, so the
//! function is idempotent on already-Latin input. The lexicon build relies
//! on that: feeding an expanded list back through the expansion must not
//! corrupt tokens.

use std::borrow::Cow;

/// Latin replacement for a single source-script letter, or `None` for
/// pass-through. Hard signs and soft signs map to the empty string.
const fn map_char(c: char) -> Option<&'static str> {
    Some(match c {
        // Cyrillic, lowercase
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        // Cyrillic, uppercase
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Е' => "E",
        'Ё' => "E",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "I",
        'Й' => "J",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "Kh",
        'Ц' => "Ts",
        'Ч' => "Ch",
        'Ш' => "Sh",
        'Щ' => "Shch",
        'Ъ' => "",
        'Ы' => "Y",
        'Ь' => "",
        'Э' => "E",
        'Ю' => "Yu",
        'Я' => "Ya",
        // Ukrainian extensions
        'і' => "i",
        'І' => "I",
        'ї' => "yi",
        'Ї' => "Yi",
        'є' => "ye",
        'Є' => "Ye",
        'ґ' => "g",
        'Ґ' => "G",
        // Belarusian
        'ў' => "u",
        'Ў' => "U",
        // Kazakh / Turkic extensions
        'ә' => "a",
        'Ә' => "A",
        'ғ' => "gh",
        'Ғ' => "Gh",
        'қ' => "q",
        'Қ' => "Q",
        'ң' => "ng",
        'Ң' => "Ng",
        'ө' => "o",
        'Ө' => "O",
        'ұ' => "u",
        'Ұ' => "U",
        'ү' => "u",
        'Ү' => "U",
        'һ' => "h",
        'Һ' => "H",
        // Georgian (mkhedruli, caseless)
        'ა' => "a",
        'ბ' => "b",
        'გ' => "g",
        'დ' => "d",
        'ე' => "e",
        'ვ' => "v",
        'ზ' => "z",
        'თ' => "t",
        'ი' => "i",
        'კ' => "k",
        'ლ' => "l",
        'მ' => "m",
        'ნ' => "n",
        'ო' => "o",
        'პ' => "p",
        'ჟ' => "zh",
        'რ' => "r",
        'ს' => "s",
        'ტ' => "t",
        'უ' => "u",
        'ფ' => "p",
        'ქ' => "k",
        'ღ' => "gh",
        'ყ' => "q",
        'შ' => "sh",
        'ჩ' => "ch",
        'ც' => "ts",
        'ძ' => "dz",
        'წ' => "ts",
        'ჭ' => "ch",
        'ხ' => "kh",
        'ჯ' => "j",
        'ჰ' => "h",
        // Armenian, lowercase
        'ա' => "a",
        'բ' => "b",
        'գ' => "g",
        'դ' => "d",
        'ե' => "e",
        'զ' => "z",
        'է' => "e",
        'ը' => "e",
        'թ' => "t",
        'ժ' => "zh",
        'ի' => "i",
        'լ' => "l",
        'խ' => "kh",
        'ծ' => "ts",
        'կ' => "k",
        'հ' => "h",
        'ձ' => "dz",
        'ղ' => "gh",
        'ճ' => "ch",
        'մ' => "m",
        'յ' => "y",
        'ն' => "n",
        'շ' => "sh",
        'ո' => "o",
        'չ' => "ch",
        'պ' => "p",
        'ջ' => "j",
        'ռ' => "r",
        'ս' => "s",
        'վ' => "v",
        'տ' => "t",
        'ր' => "r",
        'ց' => "ts",
        'ւ' => "w",
        'փ' => "p",
        'ք' => "k",
        'օ' => "o",
        'ֆ' => "f",
        'և' => "ev",
        // Armenian, uppercase
        'Ա' => "A",
        'Բ' => "B",
        'Գ' => "G",
        'Դ' => "D",
        'Ե' => "E",
        'Զ' => "Z",
        'Է' => "E",
        'Ը' => "E",
        'Թ' => "T",
        'Ժ' => "Zh",
        'Ի' => "I",
        'Լ' => "L",
        'Խ' => "Kh",
        'Ծ' => "Ts",
        'Կ' => "K",
        'Հ' => "H",
        'Ձ' => "Dz",
        'Ղ' => "Gh",
        'Ճ' => "Ch",
        'Մ' => "M",
        'Յ' => "Y",
        'Ն' => "N",
        'Շ' => "Sh",
        'Ո' => "O",
        'Չ' => "Ch",
        'Պ' => "P",
        'Ջ' => "J",
        'Ռ' => "R",
        'Ս' => "S",
        'Վ' => "V",
        'Տ' => "T",
        'Ր' => "R",
        'Ց' => "Ts",
        'Ւ' => "W",
        'Փ' => "P",
        'Ք' => "K",
        'Օ' => "O",
        'Ֆ' => "F",
        _ => return None,
    })
}

/// True if any character of `text` has a transliteration rule.
#[inline]
pub fn needs_transliteration(text: &str) -> bool {
    text.chars().any(|c| map_char(c).is_some())
}

/// Transliterate a single token. Zero-copy when nothing maps.
pub fn transliterate(token: &str) -> Cow<'_, str> {
    if !needs_transliteration(token) {
        return Cow::Borrowed(token);
    }
    // Worst case per mapped char is 4 output bytes ("shch"); reserve a
    // little extra instead of counting exactly.
    let mut out = String::with_capacity(token.len() + token.len() / 2);
    for c in token.chars() {
        match map_char(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_passes_through_unchanged() {
        let input = "Aleksandr Petrov-Smith";
        let result = transliterate(input);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn russian_name() {
        assert_eq!(transliterate("Александр"), "Aleksandr");
        assert_eq!(transliterate("Щербаков"), "Shcherbakov");
        assert_eq!(transliterate("Юрьев"), "Yurev");
    }

    #[test]
    fn ukrainian_letters() {
        assert_eq!(transliterate("Сергій"), "Sergij");
        assert_eq!(transliterate("Україна"), "Ukrayina");
    }

    #[test]
    fn georgian_name() {
        assert_eq!(transliterate("გიორგი"), "giorgi");
        assert_eq!(transliterate("შოთა"), "shota");
    }

    #[test]
    fn armenian_name() {
        assert_eq!(transliterate("Արմեն"), "Armen");
        assert_eq!(transliterate("Տիգրան"), "Tigran");
    }

    #[test]
    fn kazakh_letters() {
        assert_eq!(transliterate("Ұлы"), "Uly");
        assert_eq!(transliterate("қызы"), "qyzy");
    }

    #[test]
    fn idempotent_on_own_output() {
        for name in ["Александр", "გიორგი", "Արմեն", "Нұрсұлтан"] {
            let once = transliterate(name).into_owned();
            let twice = transliterate(&once).into_owned();
            assert_eq!(once, twice, "double transliteration changed {name:?}");
        }
    }

    #[test]
    fn mixed_script_token() {
        assert_eq!(transliterate("Иван2000"), "Ivan2000");
    }
}
