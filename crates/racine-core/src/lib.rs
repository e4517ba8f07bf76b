//! Shared character-level utilities for the racine French stemmer.
//!
//! The stemming engine itself works on packed character-class bitsets;
//! this crate holds the human-readable side of the same facts (the
//! French vowel inventory, simple case mapping) used by the language
//! crate's tests and the CLI front ends.

pub mod character;
