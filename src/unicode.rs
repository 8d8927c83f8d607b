//! Script-range predicates used by the cascade's highest-confidence
//! detectors. Distinctive letters beat whole-block membership: a Ukrainian
//! `ї` is a stronger signal than generic Cyrillic, so the letter sets come
//! first in the detector and the block checks later.

/// Georgian block (Mkhedruli + Asomtavruli), U+10A0–U+10FF.
#[inline(always)]
pub const fn is_georgian(c: char) -> bool {
    matches!(c as u32, 0x10A0..=0x10FF)
}

/// Armenian block, U+0530–U+058F.
#[inline(always)]
pub const fn is_armenian(c: char) -> bool {
    matches!(c as u32, 0x0530..=0x058F)
}

/// Letters that occur in Ukrainian orthography but not in Russian.
#[inline(always)]
pub const fn is_ukrainian_letter(c: char) -> bool {
    matches!(c, 'ї' | 'і' | 'є' | 'ґ' | 'І' | 'Ї' | 'Є' | 'Ґ')
}

/// The Belarusian short u, absent from every neighbouring orthography.
#[inline(always)]
pub const fn is_belarusian_letter(c: char) -> bool {
    matches!(c, 'ў' | 'Ў')
}

/// Kazakh Cyrillic extensions. `І`/`і` is shared with Ukrainian, which is
/// why the Ukrainian check must run first in the cascade.
#[inline(always)]
pub const fn is_kazakh_letter(c: char) -> bool {
    matches!(
        c,
        'Ә' | 'ә'
            | 'Ғ'
            | 'ғ'
            | 'Қ'
            | 'қ'
            | 'Ң'
            | 'ң'
            | 'Ө'
            | 'ө'
            | 'Ұ'
            | 'ұ'
            | 'Ү'
            | 'ү'
            | 'Һ'
            | 'һ'
            | 'І'
            | 'і'
    )
}

/// Regional-indicator symbols, U+1F1E6–U+1F1FF. A flag emoji is a pair of
/// these; the raw (unstripped) input must be searched because the cleaner
/// removes them.
#[inline(always)]
pub const fn is_regional_indicator(c: char) -> bool {
    matches!(c as u32, 0x1F1E6..=0x1F1FF)
}

/// Word characters survive cleaning: alphanumerics plus underscore,
/// mirroring the `\w` class the keyword tables were authored against.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn georgian_block() {
        assert!(is_georgian('ა'));
        assert!(is_georgian('ჰ'));
        assert!(!is_georgian('а'));
    }

    #[test]
    fn armenian_block() {
        assert!(is_armenian('Ա'));
        assert!(is_armenian('ֆ'));
        assert!(!is_armenian('A'));
    }

    #[test]
    fn distinctive_letters_do_not_overlap_russian() {
        for c in "абвгдеёжзийклмнопрстуфхцчшщъыьэюя".chars() {
            assert!(!is_ukrainian_letter(c), "{c} misflagged Ukrainian");
            assert!(!is_belarusian_letter(c), "{c} misflagged Belarusian");
            assert!(!is_kazakh_letter(c), "{c} misflagged Kazakh");
        }
    }

    #[test]
    fn kazakh_and_ukrainian_share_dotted_i() {
        assert!(is_ukrainian_letter('і'));
        assert!(is_kazakh_letter('і'));
    }

    #[test]
    fn regional_indicators() {
        let mut flags = "🇺🇦".chars();
        assert!(is_regional_indicator(flags.next().unwrap()));
        assert!(is_regional_indicator(flags.next().unwrap()));
        assert!(!is_regional_indicator('U'));
    }

    #[test]
    fn word_chars() {
        assert!(is_word_char('Ж'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(!is_word_char('💦'));
        assert!(!is_word_char('-'));
    }
}
