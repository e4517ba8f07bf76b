//! French language module for Racine: a suffix-stripping stemmer and
//! the matching stop word list.
//!
//! The stemmer is rule-based and dictionary-free. It reduces inflected
//! and derived forms to a shared stem that is not necessarily a real
//! word (`majestueusement` becomes `majestu`); the point is that
//! related forms collide, not that the output is readable.
//!
//! ```
//! use racine_fr::stem_word;
//!
//! assert_eq!(stem_word("continuellement"), "continuel");
//! assert_eq!(stem_word("chevaux"), "cheval");
//! ```
//!
//! Input is expected to be lowercase. For search-index pipelines,
//! lowercase with [`racine_core::character::lowercase_word`], drop
//! stop words with [`stopwords::is_stop_word`], then stem.

pub mod stemmer;
#[cfg(feature = "stopwords")]
pub mod stopwords;

pub use stemmer::stem_word;
