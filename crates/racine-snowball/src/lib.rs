//! Snowball string-rewriting runtime.
//!
//! This crate provides the substrate every Snowball-style stemming
//! algorithm is built on: a mutable cursor buffer with position-based
//! string primitives, and ordered "among" tables searched with a
//! longest-match binary search. The language rulesets themselves live
//! in the per-language crates (e.g. `racine-fr`).
//!
//! # Architecture
//!
//! - [`buffer`] -- Cursor buffer: character-class tests, literal
//!   matches, bounded slice replacement, among-table lookup
//! - [`among`] -- Among entry type, table direction, and table shape
//!   validation
//!
//! Every primitive is a boolean predicate: `false` means "this rule
//! step does not apply here", never an error. Rule code saves the
//! cursor before an attempt and restores it before trying an
//! alternative; nothing in this crate panics on ordinary non-matching
//! input.

pub mod among;
pub mod buffer;

pub use among::{Among, Direction, Guard, verify_table};
pub use buffer::SnowballBuffer;

/// Error type for among-table shape validation.
///
/// Table order is part of the algorithm's correctness, not incidental:
/// the longest-match binary search assumes entries are sorted (by
/// reversed literal for backward tables) and that backlinks point to
/// earlier entries holding a proper affix of the literal.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("entry {index} is out of sort order for {direction:?} matching")]
    Unordered { index: usize, direction: Direction },
    #[error("entry {index} has backlink {backlink} which is not an earlier proper affix entry")]
    Backlink { index: usize, backlink: i32 },
}
