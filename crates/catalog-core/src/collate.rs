//! Locale-aware string ordering
//!
//! Approximates root-locale collation (what `localeCompare` does in a
//! browser) with three comparison levels over the canonical decomposition:
//!
//! 1. primary: base characters, case-folded, diacritics ignored
//! 2. secondary: diacritics
//! 3. tertiary: case, lowercase before uppercase
//!
//! Within the primary level whitespace sorts before punctuation and symbols,
//! which sort before digits, which sort before letters.
//!
//! Latin letters without a canonical decomposition (`ø`, `ł`, `æ`, `ß` and a
//! few others) are folded onto their base letters at the primary level and
//! kept apart at the secondary level, so `øl` sorts among the `o` words
//! rather than after `z`. Other scripts fall back to code point order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings the way a root-locale collator would
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let left = CollationKey::new(a);
    let right = CollationKey::new(b);
    left.cmp(&right)
}

/// Coarse character classes, in primary sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Punctuation
        }
    }
}

/// Sort key split by comparison level.
///
/// Field order matters: the derived `Ord` compares primary first, then
/// secondary, then tertiary.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    fn new(s: &str) -> Self {
        let mut key = CollationKey {
            primary: Vec::with_capacity(s.len()),
            secondary: Vec::with_capacity(s.len()),
            tertiary: Vec::with_capacity(s.len()),
        };

        for c in s.nfd() {
            if is_combining_mark(c) {
                match key.secondary.last_mut() {
                    Some(marks) => marks.push(c),
                    None => key.push_base(c),
                }
                continue;
            }
            key.push_base(c);
        }

        key
    }

    fn push_base(&mut self, c: char) {
        if let Some(base) = fold_letter(c) {
            self.primary
                .extend(base.chars().map(|b| (CharClass::Letter, b)));
            self.secondary.push(vec![c]);
            self.tertiary.push(c.is_uppercase());
            return;
        }

        let class = CharClass::of(c);
        for folded in c.to_lowercase() {
            self.primary.push((class, folded));
        }
        self.secondary.push(Vec::new());
        self.tertiary.push(c.is_uppercase());
    }
}

/// Primary weight for Latin letters that NFD leaves intact
fn fold_letter(c: char) -> Option<&'static str> {
    let base = match c {
        'ø' | 'Ø' => "o",
        'ł' | 'Ł' => "l",
        'đ' | 'Đ' => "d",
        'ħ' | 'Ħ' => "h",
        'ı' => "i",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ß' | 'ẞ' => "ss",
        'þ' | 'Þ' => "th",
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_does_not_dominate() {
        // Raw byte order would put "Banana" first.
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("A", "b"), Ordering::Less);
        assert_eq!(locale_cmp("iPhone", "IPhone"), Ordering::Less);
    }

    #[test]
    fn test_accents_are_secondary() {
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_cmp("résumé", "resumes"), Ordering::Less);
        assert_eq!(locale_cmp("coté", "côte"), Ordering::Less);
    }

    #[test]
    fn test_canonical_equivalence() {
        assert_eq!(locale_cmp("e\u{301}", "\u{e9}"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_cmp("", "a"), Ordering::Less);
        assert_eq!(locale_cmp("Fruit", "Fruits"), Ordering::Less);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(locale_cmp(" b", "-a"), Ordering::Less);
        assert_eq!(locale_cmp("-a", "1a"), Ordering::Less);
        assert_eq!(locale_cmp("9", "a"), Ordering::Less);
        assert_eq!(locale_cmp("10", "9"), Ordering::Less);
    }

    #[test]
    fn test_letters_without_decomposition() {
        assert_eq!(locale_cmp("øl", "pære"), Ordering::Less);
        assert_eq!(locale_cmp("ol", "øl"), Ordering::Less);
        assert_eq!(locale_cmp("Łódź", "Lyon"), Ordering::Less);
        assert_eq!(locale_cmp("zebra", "Ærø"), Ordering::Greater);
        assert_eq!(locale_cmp("strasse", "straße"), Ordering::Less);
        assert_eq!(locale_cmp("straße", "strasst"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(locale_cmp("Fruit", "Fruit"), Ordering::Equal);
    }
}
