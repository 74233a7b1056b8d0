//! Character-class tables
//!
//!     The code points that may appear inside a token body, kept as plain data. The
//!     matcher turns these tables into regex character-class fragments once, when the
//!     compiled patterns are first used.
//!
//!     Hashtag bodies are built from three groups:
//!
//!         - letters: the Unicode `L` (letter) and `M` (mark) general categories
//!         - numerals: the Unicode `Nd` (decimal digit) category
//!         - special joiners: a short, fixed list of joiners and script punctuation
//!
//!     Categories are expressed as regex Unicode classes (`\pL`, `\pM`, `\p{Nd}`) so the
//!     engine's own tables decide membership. The enumerated tables below are the parts
//!     that are not a general category.

use std::fmt::Write;

/// Hashtag markers: `#` and FULLWIDTH NUMBER SIGN.
pub const HASH_SIGNS: &[char] = &['#', '\u{FF03}'];

/// Mention and reply markers: `@` and FULLWIDTH COMMERCIAL AT.
pub const AT_SIGNS: &[char] = &['@', '\u{FF20}'];

/// Regex class items for hashtag letters (letters and combining marks).
pub const HASHTAG_LETTERS: &str = r"\pL\pM";

/// Regex class items for hashtag numerals.
pub const HASHTAG_NUMERALS: &str = r"\p{Nd}";

/// Joiners and script punctuation allowed inside a hashtag body.
pub const HASHTAG_SPECIAL_CHARS: &[char] = &[
    '_',        // LOW LINE
    '\u{200C}', // ZERO WIDTH NON-JOINER
    '\u{200D}', // ZERO WIDTH JOINER
    '\u{A67E}', // CYRILLIC KAVYKA
    '\u{05BE}', // HEBREW PUNCTUATION MAQAF
    '\u{05F3}', // HEBREW PUNCTUATION GERESH
    '\u{05F4}', // HEBREW PUNCTUATION GERSHAYIM
    '\u{309B}', // KATAKANA-HIRAGANA VOICED SOUND MARK
    '\u{309C}', // KATAKANA-HIRAGANA SEMI-VOICED SOUND MARK
    '\u{30A0}', // KATAKANA-HIRAGANA DOUBLE HYPHEN
    '\u{30FB}', // KATAKANA MIDDLE DOT
    '\u{3003}', // DITTO MARK
    '\u{0F0B}', // TIBETAN MARK INTERSYLLABIC TSHEG
    '\u{0F0C}', // TIBETAN MARK DELIMITER TSHEG BSTAR
    '\u{0F0D}', // TIBETAN MARK SHAD
];

/// Accented Latin letters that must not directly follow a mention.
pub const LATIN_ACCENT_RANGES: &[(char, char)] = &[
    // Latin-1 Supplement, minus the multiplication and division signs
    ('\u{00C0}', '\u{00D6}'),
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{00FF}'),
    // Latin Extended-A and -B
    ('\u{0100}', '\u{024F}'),
    // IPA Extensions
    ('\u{0253}', '\u{0254}'),
    ('\u{0256}', '\u{0257}'),
    ('\u{0259}', '\u{0259}'),
    ('\u{025B}', '\u{025B}'),
    ('\u{0263}', '\u{0263}'),
    ('\u{0268}', '\u{0268}'),
    ('\u{026F}', '\u{026F}'),
    ('\u{0272}', '\u{0272}'),
    ('\u{0289}', '\u{0289}'),
    ('\u{028B}', '\u{028B}'),
    // Hawaiian okina
    ('\u{02BB}', '\u{02BB}'),
    // Combining diacritical marks
    ('\u{0300}', '\u{036F}'),
    // Latin Extended Additional (mostly Vietnamese)
    ('\u{1E00}', '\u{1EFF}'),
];

/// Whitespace that may precede a reply marker.
///
/// Drawn from the `White_Space` property across Cc, Zs, Zl and Zp. MONGOLIAN VOWEL
/// SEPARATOR is kept even though newer Unicode versions moved it out of Zs.
pub const UNICODE_SPACE_RANGES: &[(char, char)] = &[
    ('\u{0009}', '\u{000D}'),
    ('\u{0020}', '\u{0020}'),
    ('\u{0085}', '\u{0085}'),
    ('\u{00A0}', '\u{00A0}'),
    ('\u{1680}', '\u{1680}'),
    ('\u{180E}', '\u{180E}'),
    ('\u{2000}', '\u{200A}'),
    ('\u{2028}', '\u{2028}'),
    ('\u{2029}', '\u{2029}'),
    ('\u{202F}', '\u{202F}'),
    ('\u{205F}', '\u{205F}'),
    ('\u{3000}', '\u{3000}'),
];

/// Render code points as escaped regex class items (`\x{..}`), ready to be placed
/// inside `[...]`.
pub(crate) fn class_items(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len() * 8);
    for &c in chars {
        push_escaped(&mut out, c);
    }
    out
}

/// Render inclusive ranges as escaped regex class items. Single-point ranges are
/// written as one item.
pub(crate) fn range_items(ranges: &[(char, char)]) -> String {
    let mut out = String::with_capacity(ranges.len() * 18);
    for &(lo, hi) in ranges {
        push_escaped(&mut out, lo);
        if hi != lo {
            out.push('-');
            push_escaped(&mut out, hi);
        }
    }
    out
}

/// Class items for everything allowed in a hashtag body.
pub(crate) fn hashtag_body_items() -> String {
    format!(
        "{HASHTAG_LETTERS}{HASHTAG_NUMERALS}{}",
        class_items(HASHTAG_SPECIAL_CHARS)
    )
}

fn push_escaped(out: &mut String, c: char) {
    // Writing into a String cannot fail.
    let _ = write!(out, "\\x{{{:04X}}}", c as u32);
}

/// True for characters in [`LATIN_ACCENT_RANGES`].
pub fn is_latin_accent(c: char) -> bool {
    in_ranges(LATIN_ACCENT_RANGES, c)
}

fn in_ranges(ranges: &[(char, char)], c: char) -> bool {
    ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_class_items_escapes_every_char() {
        assert_eq!(class_items(&['_', '\u{200C}']), r"\x{005F}\x{200C}");
    }

    #[test]
    fn test_range_items_collapses_single_points() {
        assert_eq!(
            range_items(&[('\u{0009}', '\u{000D}'), ('\u{0020}', '\u{0020}')]),
            r"\x{0009}-\x{000D}\x{0020}"
        );
    }

    #[test]
    fn test_special_chars_table() {
        assert_eq!(HASHTAG_SPECIAL_CHARS.len(), 15);
        assert!(HASHTAG_SPECIAL_CHARS.contains(&'\u{30FB}'));
        assert!(!HASHTAG_SPECIAL_CHARS.contains(&'-'));
    }

    #[test]
    fn test_generated_classes_compile() {
        let body = Regex::new(&format!("^[{}]+$", hashtag_body_items())).unwrap();
        assert!(body.is_match("caf\u{00E9}_\u{200D}\u{05BE}123"));
        assert!(!body.is_match("foo-bar"));

        let accents = Regex::new(&format!("^[{}]$", range_items(LATIN_ACCENT_RANGES))).unwrap();
        assert!(accents.is_match("\u{00E7}"));
        assert!(!accents.is_match("\u{00F7}"));
    }

    #[test]
    fn test_latin_accent_lookup() {
        assert!(is_latin_accent('\u{00E9}'));
        assert!(is_latin_accent('\u{1EA1}'));
        assert!(!is_latin_accent('\u{00D7}'));
        assert!(!is_latin_accent('e'));
    }
}
