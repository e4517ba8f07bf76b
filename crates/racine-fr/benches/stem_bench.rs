// Criterion benchmarks for racine-fr.
//
// Run:
//   cargo bench -p racine-fr

use criterion::{Criterion, criterion_group, criterion_main};

/// Mixed inflected forms covering every pass of the pipeline.
static WORDS: &[&str] = &[
    "continuellement",
    "nationalement",
    "majestueusement",
    "abondamment",
    "puissamment",
    "sérieusement",
    "logiquement",
    "essentiellement",
    "chevaux",
    "châteaux",
    "animaux",
    "boulangère",
    "boulanger",
    "donnerait",
    "donneraient",
    "finissait",
    "finissaient",
    "préférât",
    "attention",
    "ondulation",
    "réalité",
    "spécialité",
    "joyeux",
    "aboyer",
    "naïve",
    "villes",
    "vraiment",
    "inquiétude",
    "yeux",
    "bois",
];

fn bench_stem_words(c: &mut Criterion) {
    c.bench_function("stem_30_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(racine_fr::stem_word(word));
            }
        });
    });
}

fn bench_stem_long_word(c: &mut Criterion) {
    c.bench_function("stem_long_word", |b| {
        b.iter(|| std::hint::black_box(racine_fr::stem_word("anticonstitutionnellement")));
    });
}

#[cfg(feature = "stopwords")]
fn bench_stopword_lookup(c: &mut Criterion) {
    c.bench_function("stopword_lookup", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(racine_fr::stopwords::is_stop_word(word));
            }
        });
    });
}

#[cfg(feature = "stopwords")]
criterion_group!(
    benches,
    bench_stem_words,
    bench_stem_long_word,
    bench_stopword_lookup
);
#[cfg(not(feature = "stopwords"))]
criterion_group!(benches, bench_stem_words, bench_stem_long_word);
criterion_main!(benches);
