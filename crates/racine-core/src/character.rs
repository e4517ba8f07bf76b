// Character classification and case mapping for French text.

/// French vowels (lowercase), including every accented form the
/// stemmer's rules treat as a vowel: a e i o u y â à ë é ê è ï î ô û ù.
pub const FRENCH_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'y', '\u{00E2}', '\u{00E0}', '\u{00EB}', '\u{00E9}', '\u{00EA}',
    '\u{00E8}', '\u{00EF}', '\u{00EE}', '\u{00F4}', '\u{00FB}', '\u{00F9}',
];

/// Check whether a character is a French vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    FRENCH_VOWELS.contains(&simple_lower(c))
}

/// Convert a character to its simple lowercase equivalent.
///
/// Delegates to the standard library's Unicode case mapping; for
/// characters with multi-character lowercase expansions only the first
/// character is kept (one-to-one mapping).
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Lowercase a whole token with the simple one-to-one mapping.
///
/// Stemming rules are case-sensitive (uppercase `U`/`I`/`Y`/`H` are
/// internal sentinels), so callers lowercase tokens before stemming.
pub fn lowercase_word(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_vowels() {
        assert!(is_vowel('a'));
        assert!(is_vowel('A'));
        assert!(is_vowel('\u{00E9}')); // é
        assert!(is_vowel('\u{00C9}')); // É
        assert!(is_vowel('\u{00FB}')); // û
        assert!(!is_vowel('b'));
        assert!(!is_vowel('\u{00E7}')); // ç
        assert!(!is_vowel('1'));
    }

    #[test]
    fn simple_lower_accented() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('\u{00C9}'), '\u{00E9}'); // É -> é
        assert_eq!(simple_lower('\u{00C7}'), '\u{00E7}'); // Ç -> ç
        assert_eq!(simple_lower('a'), 'a');
    }

    #[test]
    fn simple_upper_accented() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('\u{00E9}'), '\u{00C9}');
    }

    #[test]
    fn lowercase_word_maps_per_char() {
        assert_eq!(lowercase_word("CHEVAUX"), "chevaux");
        assert_eq!(lowercase_word("\u{00C9}t\u{00E9}"), "\u{00E9}t\u{00E9}");
        assert_eq!(lowercase_word(""), "");
    }
}
