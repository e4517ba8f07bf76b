//! French stop word list.
//!
//! Function words (articles, pronouns, and the high-frequency forms of
//! `avoir` and `être`) that carry no indexing value. The list matches
//! the one shipped by the common French search stacks, so indexes built
//! with this crate agree with them on which tokens to drop.

use std::sync::OnceLock;

use hashbrown::HashSet;

use racine_core::character::lowercase_word;

/// The stop word inventory, lowercase, in no significant order.
pub static STOP_WORDS: &[&str] = &[
    "ai", "aie", "aient", "aies", "ait", "as", "au", "aura", "aurai",
    "auraient", "aurais", "aurait", "auras", "aurez", "auriez", "aurions",
    "aurons", "auront", "aux", "avaient", "avais", "avait", "avec", "avez",
    "aviez", "avions", "avons", "ayant", "ayez", "ayons", "c", "ce", "ceci",
    "celà", "ces", "cet", "cette", "d", "dans", "de", "des", "du", "elle",
    "en", "es", "est", "et", "eu", "eue", "eues", "eurent", "eus", "eusse",
    "eussent", "eusses", "eussiez", "eussions", "eut", "eux", "eûmes",
    "eût", "eûtes", "furent", "fus", "fusse", "fussent", "fusses",
    "fussiez", "fussions", "fut", "fûmes", "fût", "fûtes", "ici", "il",
    "ils", "j", "je", "l", "la", "le", "les", "leur", "leurs", "lui", "m",
    "ma", "mais", "me", "mes", "moi", "mon", "même", "n", "ne", "nos",
    "notre", "nous", "on", "ont", "ou", "où", "par", "pas", "pour", "qu",
    "que", "quel", "quelle", "quelles", "quels", "qui", "s", "sa", "sans",
    "se", "sera", "serai", "seraient", "serais", "serait", "seras",
    "serez", "seriez", "serions", "serons", "seront", "ses", "soi",
    "soient", "sois", "soit", "sommes", "son", "sont", "soyez", "soyons",
    "suis", "sur", "t", "ta", "te", "tes", "toi", "ton", "tu", "un", "une",
    "vos", "votre", "vous", "y", "à", "étaient", "étais", "était",
    "étant", "été", "étée", "étées", "étés", "êtes",
];

fn stop_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// True if `word` is a French stop word. Case-insensitive.
pub fn is_stop_word(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    // Fast path for tokens that are already lowercase.
    if stop_set().contains(word) {
        return true;
    }
    if word.chars().all(|c| c.is_lowercase() || !c.is_alphabetic()) {
        return false;
    }
    stop_set().contains(lowercase_word(word).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_function_words() {
        for w in ["le", "la", "et", "où", "été", "aurions", "même"] {
            assert!(is_stop_word(w), "{w} should be a stop word");
        }
    }

    #[test]
    fn content_words_pass_through() {
        for w in ["cheval", "manger", "boulangère", ""] {
            assert!(!is_stop_word(w), "{w} must not be a stop word");
        }
    }

    #[test]
    fn case_insensitive() {
        assert!(is_stop_word("Le"));
        assert!(is_stop_word("ÉTÉ"));
        assert!(!is_stop_word("Cheval"));
    }

    #[test]
    fn inventory_is_all_lowercase_and_unique() {
        use hashbrown::HashSet;
        let mut seen = HashSet::new();
        for w in STOP_WORDS {
            assert_eq!(*w, lowercase_word(w).as_str());
            assert!(seen.insert(*w), "duplicate stop word {w}");
        }
    }
}
