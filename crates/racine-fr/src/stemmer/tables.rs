// Suffix tables and character groupings for the French stemmer.
//
// Backward tables are sorted on the reversed literal (the order
// `find_among_b` binary-searches in); `verify_table` in the unit tests
// below checks the ordering and the backlink chains, so an editing
// mistake here fails fast instead of silently mismatching suffixes.
//
// `result` values are the rule tags the pass functions dispatch on;
// tables used only as match predicates carry -1.

use racine_snowball::Among;

/// Vowel grouping: a e i o u y and the accented vowels
/// (\u{e2} \u{e0} \u{eb} \u{e9} \u{ea} \u{e8} \u{ef} \u{ee} \u{f4} \u{fb} \u{f9}),
/// packed as a bit set over the codepoint range `V_MIN..=V_MAX`.
pub const V_MIN: u32 = 97;
pub const V_MAX: u32 = 251;
pub const G_V: &[u8] = &[
    17, 65, 16, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 128, 130, 103, 8, 5,
];

/// Characters after which a final `s` is kept: a i o u `\u{e8}` s.
pub const KS_MIN: u32 = 97;
pub const KS_MAX: u32 = 232;
pub const G_KEEP_WITH_S: &[u8] = &[1, 65, 20, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 128];

/// Derivational suffixes for the standard pass. Tags 1-12 pick the
/// region check and replacement; tags 13-15 are the adverbial `ment`
/// family, which substitutes and then forces the pass to report
/// failure so the verb passes still get a look at the word.
pub static STANDARD_SUFFIX: &[Among] = &[
    Among { literal: &['i', 'q', 'U', 'e'], backlink: -1, result: 1, guard: None },
    Among { literal: &['a', 't', 'r', 'i', 'c', 'e'], backlink: -1, result: 2, guard: None },
    Among { literal: &['a', 'n', 'c', 'e'], backlink: -1, result: 1, guard: None },
    Among { literal: &['e', 'n', 'c', 'e'], backlink: -1, result: 5, guard: None },
    Among { literal: &['l', 'o', 'g', 'i', 'e'], backlink: -1, result: 3, guard: None },
    Among { literal: &['a', 'b', 'l', 'e'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 'm', 'e'], backlink: -1, result: 1, guard: None },
    Among { literal: &['e', 'u', 's', 'e'], backlink: -1, result: 11, guard: None },
    Among { literal: &['i', 's', 't', 'e'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'v', 'e'], backlink: -1, result: 8, guard: None },
    Among { literal: &['i', 'f'], backlink: -1, result: 8, guard: None },
    Among { literal: &['u', 's', 'i', 'o', 'n'], backlink: -1, result: 4, guard: None },
    Among { literal: &['a', 't', 'i', 'o', 'n'], backlink: -1, result: 2, guard: None },
    Among { literal: &['u', 't', 'i', 'o', 'n'], backlink: -1, result: 4, guard: None },
    Among { literal: &['a', 't', 'e', 'u', 'r'], backlink: -1, result: 2, guard: None },
    Among { literal: &['i', 'q', 'U', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['a', 't', 'r', 'i', 'c', 'e', 's'], backlink: -1, result: 2, guard: None },
    Among { literal: &['a', 'n', 'c', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['e', 'n', 'c', 'e', 's'], backlink: -1, result: 5, guard: None },
    Among { literal: &['l', 'o', 'g', 'i', 'e', 's'], backlink: -1, result: 3, guard: None },
    Among { literal: &['a', 'b', 'l', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 'm', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['e', 'u', 's', 'e', 's'], backlink: -1, result: 11, guard: None },
    Among { literal: &['i', 's', 't', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'v', 'e', 's'], backlink: -1, result: 8, guard: None },
    Among { literal: &['i', 'f', 's'], backlink: -1, result: 8, guard: None },
    Among { literal: &['u', 's', 'i', 'o', 'n', 's'], backlink: -1, result: 4, guard: None },
    Among { literal: &['a', 't', 'i', 'o', 'n', 's'], backlink: -1, result: 2, guard: None },
    Among { literal: &['u', 't', 'i', 'o', 'n', 's'], backlink: -1, result: 4, guard: None },
    Among { literal: &['a', 't', 'e', 'u', 'r', 's'], backlink: -1, result: 2, guard: None },
    Among { literal: &['m', 'e', 'n', 't', 's'], backlink: -1, result: 15, guard: None },
    Among { literal: &['e', 'm', 'e', 'n', 't', 's'], backlink: 30, result: 6, guard: None },
    Among { literal: &['i', 's', 's', 'e', 'm', 'e', 'n', 't', 's'], backlink: 31, result: 12, guard: None },
    Among { literal: &['i', 't', 'é', 's'], backlink: -1, result: 7, guard: None },
    Among { literal: &['m', 'e', 'n', 't'], backlink: -1, result: 15, guard: None },
    Among { literal: &['e', 'm', 'e', 'n', 't'], backlink: 34, result: 6, guard: None },
    Among { literal: &['i', 's', 's', 'e', 'm', 'e', 'n', 't'], backlink: 35, result: 12, guard: None },
    Among { literal: &['a', 'm', 'm', 'e', 'n', 't'], backlink: 34, result: 13, guard: None },
    Among { literal: &['e', 'm', 'm', 'e', 'n', 't'], backlink: 34, result: 14, guard: None },
    Among { literal: &['a', 'u', 'x'], backlink: -1, result: 10, guard: None },
    Among { literal: &['e', 'a', 'u', 'x'], backlink: 39, result: 9, guard: None },
    Among { literal: &['e', 'u', 'x'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 't', 'é'], backlink: -1, result: 7, guard: None },
];

/// Stems left over after deleting `ement`, trimmed a second time.
pub static EMENT_FOLLOWUP: &[Among] = &[
    Among { literal: &['i', 'q', 'U'], backlink: -1, result: 3, guard: None },
    Among { literal: &['a', 'b', 'l'], backlink: -1, result: 3, guard: None },
    Among { literal: &['I', 'è', 'r'], backlink: -1, result: 4, guard: None },
    Among { literal: &['i', 'è', 'r'], backlink: -1, result: 4, guard: None },
    Among { literal: &['e', 'u', 's'], backlink: -1, result: 2, guard: None },
    Among { literal: &['i', 'v'], backlink: -1, result: 1, guard: None },
];

/// Stems left over after deleting `it\u{e9}`, trimmed a second time.
pub static ITE_FOLLOWUP: &[Among] = &[
    Among { literal: &['i', 'c'], backlink: -1, result: 2, guard: None },
    Among { literal: &['a', 'b', 'i', 'l'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'v'], backlink: -1, result: 3, guard: None },
];

/// Second-conjugation (`-ir`) verb endings. All share one action:
/// delete when preceded by a true consonant inside RV.
pub static I_VERB_SUFFIX: &[Among] = &[
    Among { literal: &['i', 'r', 'a'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'e'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'e'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'a', 'n', 't', 'e'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'a', 'i'], backlink: 4, result: 1, guard: None },
    Among { literal: &['i', 'r'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'a', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['î', 'm', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'a', 'n', 't', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['î', 't', 'e', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'a', 'i', 's'], backlink: 13, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'a', 'i', 's'], backlink: 13, result: 1, guard: None },
    Among { literal: &['i', 'r', 'i', 'o', 'n', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'i', 'o', 'n', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'o', 'n', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'o', 'n', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'a', 'n', 't', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 't'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'a', 'i', 't'], backlink: 21, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'a', 'i', 't'], backlink: 21, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'a', 'n', 't'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'a', 'I', 'e', 'n', 't'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'a', 'I', 'e', 'n', 't'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'e', 'n', 't'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'e', 'n', 't'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'o', 'n', 't'], backlink: -1, result: 1, guard: None },
    Among { literal: &['î', 't'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'i', 'e', 'z'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'i', 'e', 'z'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 'r', 'e', 'z'], backlink: -1, result: 1, guard: None },
    Among { literal: &['i', 's', 's', 'e', 'z'], backlink: -1, result: 1, guard: None },
];

/// First-conjugation (`-er`) and past-tense endings. Tag 1 needs R2,
/// tag 2 deletes in RV, tag 3 deletes and then also takes a bare
/// preceding `e`.
pub static VERB_SUFFIX: &[Among] = &[
    Among { literal: &['a'], backlink: -1, result: 3, guard: None },
    Among { literal: &['e', 'r', 'a'], backlink: 0, result: 2, guard: None },
    Among { literal: &['a', 's', 's', 'e'], backlink: -1, result: 3, guard: None },
    Among { literal: &['a', 'n', 't', 'e'], backlink: -1, result: 3, guard: None },
    Among { literal: &['é', 'e'], backlink: -1, result: 2, guard: None },
    Among { literal: &['a', 'i'], backlink: -1, result: 3, guard: None },
    Among { literal: &['e', 'r', 'a', 'i'], backlink: 5, result: 2, guard: None },
    Among { literal: &['e', 'r'], backlink: -1, result: 2, guard: None },
    Among { literal: &['a', 's'], backlink: -1, result: 3, guard: None },
    Among { literal: &['e', 'r', 'a', 's'], backlink: 8, result: 2, guard: None },
    Among { literal: &['â', 'm', 'e', 's'], backlink: -1, result: 3, guard: None },
    Among { literal: &['a', 's', 's', 'e', 's'], backlink: -1, result: 3, guard: None },
    Among { literal: &['a', 'n', 't', 'e', 's'], backlink: -1, result: 3, guard: None },
    Among { literal: &['â', 't', 'e', 's'], backlink: -1, result: 3, guard: None },
    Among { literal: &['é', 'e', 's'], backlink: -1, result: 2, guard: None },
    Among { literal: &['a', 'i', 's'], backlink: -1, result: 3, guard: None },
    Among { literal: &['e', 'r', 'a', 'i', 's'], backlink: 15, result: 2, guard: None },
    Among { literal: &['i', 'o', 'n', 's'], backlink: -1, result: 1, guard: None },
    Among { literal: &['e', 'r', 'i', 'o', 'n', 's'], backlink: 17, result: 2, guard: None },
    Among { literal: &['a', 's', 's', 'i', 'o', 'n', 's'], backlink: 17, result: 3, guard: None },
    Among { literal: &['e', 'r', 'o', 'n', 's'], backlink: -1, result: 2, guard: None },
    Among { literal: &['a', 'n', 't', 's'], backlink: -1, result: 3, guard: None },
    Among { literal: &['é', 's'], backlink: -1, result: 2, guard: None },
    Among { literal: &['a', 'i', 't'], backlink: -1, result: 3, guard: None },
    Among { literal: &['e', 'r', 'a', 'i', 't'], backlink: 23, result: 2, guard: None },
    Among { literal: &['a', 'n', 't'], backlink: -1, result: 3, guard: None },
    Among { literal: &['a', 'I', 'e', 'n', 't'], backlink: -1, result: 3, guard: None },
    Among { literal: &['e', 'r', 'a', 'I', 'e', 'n', 't'], backlink: 26, result: 2, guard: None },
    Among { literal: &['è', 'r', 'e', 'n', 't'], backlink: -1, result: 2, guard: None },
    Among { literal: &['a', 's', 's', 'e', 'n', 't'], backlink: -1, result: 3, guard: None },
    Among { literal: &['e', 'r', 'o', 'n', 't'], backlink: -1, result: 2, guard: None },
    Among { literal: &['â', 't'], backlink: -1, result: 3, guard: None },
    Among { literal: &['e', 'z'], backlink: -1, result: 2, guard: None },
    Among { literal: &['i', 'e', 'z'], backlink: 32, result: 2, guard: None },
    Among { literal: &['e', 'r', 'i', 'e', 'z'], backlink: 33, result: 2, guard: None },
    Among { literal: &['a', 's', 's', 'i', 'e', 'z'], backlink: 33, result: 3, guard: None },
    Among { literal: &['e', 'r', 'e', 'z'], backlink: 32, result: 2, guard: None },
    Among { literal: &['é'], backlink: -1, result: 2, guard: None },
];

/// Last-resort endings tried only when no earlier pass fired.
pub static RESIDUAL_SUFFIX: &[Among] = &[
    Among { literal: &['e'], backlink: -1, result: 3, guard: None },
    Among { literal: &['I', 'è', 'r', 'e'], backlink: 0, result: 2, guard: None },
    Among { literal: &['i', 'è', 'r', 'e'], backlink: 0, result: 2, guard: None },
    Among { literal: &['i', 'o', 'n'], backlink: -1, result: 1, guard: None },
    Among { literal: &['I', 'e', 'r'], backlink: -1, result: 2, guard: None },
    Among { literal: &['i', 'e', 'r'], backlink: -1, result: 2, guard: None },
];

/// Double consonants undoubled at the end of the stem.
pub static UN_DOUBLE: &[Among] = &[
    Among { literal: &['e', 'l', 'l'], backlink: -1, result: -1, guard: None },
    Among { literal: &['e', 'i', 'l', 'l'], backlink: -1, result: -1, guard: None },
    Among { literal: &['e', 'n', 'n'], backlink: -1, result: -1, guard: None },
    Among { literal: &['o', 'n', 'n'], backlink: -1, result: -1, guard: None },
    Among { literal: &['e', 't', 't'], backlink: -1, result: -1, guard: None },
];

/// Prefixes that place the start of RV immediately after them.
pub static RV_PREFIX: &[Among] = &[
    Among { literal: &['c', 'o', 'l'], backlink: -1, result: -1, guard: None },
    Among { literal: &['p', 'a', 'r'], backlink: -1, result: -1, guard: None },
    Among { literal: &['t', 'a', 'p'], backlink: -1, result: -1, guard: None },
];

/// Sentinel decoding for the final forward sweep. The empty literal
/// (tag 7) matches anywhere and advances the cursor one character.
pub static POSTLUDE: &[Among] = &[
    Among { literal: &[], backlink: -1, result: 7, guard: None },
    Among { literal: &['H'], backlink: 0, result: 6, guard: None },
    Among { literal: &['H', 'e'], backlink: 1, result: 4, guard: None },
    Among { literal: &['H', 'i'], backlink: 1, result: 5, guard: None },
    Among { literal: &['I'], backlink: 0, result: 1, guard: None },
    Among { literal: &['U'], backlink: 0, result: 2, guard: None },
    Among { literal: &['Y'], backlink: 0, result: 3, guard: None },
];

#[cfg(test)]
mod tests {
    use super::*;
    use racine_snowball::{verify_table, Direction, SnowballBuffer};

    #[test]
    fn backward_tables_are_well_formed() {
        for table in [
            STANDARD_SUFFIX,
            EMENT_FOLLOWUP,
            ITE_FOLLOWUP,
            I_VERB_SUFFIX,
            VERB_SUFFIX,
            RESIDUAL_SUFFIX,
            UN_DOUBLE,
        ] {
            verify_table(table, Direction::Backward).unwrap();
        }
    }

    #[test]
    fn forward_tables_are_well_formed() {
        verify_table(RV_PREFIX, Direction::Forward).unwrap();
        verify_table(POSTLUDE, Direction::Forward).unwrap();
    }

    fn in_group(c: char, set: &[u8], min: u32, max: u32) -> bool {
        let mut buf = SnowballBuffer::new(&c.to_string());
        buf.in_grouping(set, min, max)
    }

    #[test]
    fn vowel_bitset_matches_vowel_inventory() {
        for &c in racine_core::character::FRENCH_VOWELS {
            assert!(in_group(c, G_V, V_MIN, V_MAX), "missing vowel {c}");
        }
        for c in ['b', 'h', 's', 'x', 'z', '\u{e7}', 'H', 'I', 'U', 'Y', '-'] {
            assert!(!in_group(c, G_V, V_MIN, V_MAX), "{c} must not be a vowel");
        }
    }

    #[test]
    fn keep_with_s_bitset() {
        for c in ['a', 'i', 'o', 'u', 's', '\u{e8}'] {
            assert!(in_group(c, G_KEEP_WITH_S, KS_MIN, KS_MAX));
        }
        for c in ['e', '\u{e9}', 't', 'n', 'H'] {
            assert!(!in_group(c, G_KEEP_WITH_S, KS_MIN, KS_MAX));
        }
    }
}
