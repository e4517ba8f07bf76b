//! Golden vector tests for the French stemmer.
//!
//! `tests/golden/vectors.json` maps surface forms to their expected
//! stems. Keep the file sorted; every entry is also re-checked for the
//! structural guarantees (stem no longer than input, no sentinel
//! characters in the output).

use std::collections::BTreeMap;
use std::path::PathBuf;

use racine_fr::stem_word;

fn load_vectors() -> BTreeMap<String, String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join("vectors.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

#[test]
fn golden_vectors() {
    let vectors = load_vectors();
    assert!(!vectors.is_empty());

    let mut failures = Vec::new();
    for (word, expected) in &vectors {
        let got = stem_word(word);
        if got != *expected {
            failures.push(format!("{word}: expected {expected}, got {got}"));
        }
    }
    assert!(failures.is_empty(), "mismatches:\n{}", failures.join("\n"));
}

#[test]
fn stems_are_bounded_and_clean() {
    for word in load_vectors().keys() {
        let stem = stem_word(word);
        assert!(
            stem.chars().count() <= word.chars().count(),
            "{word} grew to {stem}"
        );
        assert!(
            !stem.chars().any(|c| matches!(c, 'H' | 'I' | 'U' | 'Y')),
            "sentinel leaked from {word}: {stem}"
        );
    }
}

#[test]
fn pipeline_lowercases_before_stemming() {
    // The stemmer itself expects lowercase input; the indexing pipeline
    // lowercases first, so the pair must compose.
    let word = racine_core::character::lowercase_word("Chevaux");
    assert_eq!(stem_word(&word), "cheval");
}

#[cfg(feature = "stopwords")]
#[test]
fn stopword_filter_runs_before_stemming() {
    use racine_fr::stopwords::is_stop_word;

    let tokens = ["les", "chevaux", "sont", "joyeux"];
    let stems: Vec<String> = tokens
        .iter()
        .filter(|t| !is_stop_word(t))
        .map(|t| stem_word(t))
        .collect();
    assert_eq!(stems, ["cheval", "joyeux"]);
}
