// Among tables: ordered suffix/prefix dictionaries for longest-match lookup.

use crate::TableError;
use crate::buffer::SnowballBuffer;

/// Optional per-entry guard: a capture-free predicate over buffer state,
/// checked after the literal has matched and before the entry is accepted.
/// The buffer's cursor sits just past the matched literal when the guard
/// runs; the lookup restores it afterwards regardless of the outcome.
pub type Guard = fn(&mut SnowballBuffer) -> bool;

/// One entry of an among table.
///
/// `backlink` indexes the next-longest entry whose literal is a proper
/// affix of this one (a proper suffix for backward tables, a proper
/// prefix for forward tables), or -1. When a literal matches but its
/// guard rejects, the lookup follows the backlink chain to shorter
/// candidates.
///
/// `result` is the tag returned on a successful match; 0 is reserved as
/// the "no match" sentinel, and match-only tables use -1.
#[derive(Debug, Clone, Copy)]
pub struct Among {
    pub literal: &'static [char],
    pub backlink: i32,
    pub result: i32,
    pub guard: Option<Guard>,
}

/// Matching direction of an among table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Literals are matched left-to-right at the cursor.
    Forward,
    /// Literals are matched right-to-left ending at the cursor.
    Backward,
}

/// Sort key for one literal: the code-point sequence the binary search
/// effectively compares, i.e. reversed for backward tables.
fn sort_key(literal: &[char], direction: Direction) -> Vec<u32> {
    match direction {
        Direction::Forward => literal.iter().map(|&c| c as u32).collect(),
        Direction::Backward => literal.iter().rev().map(|&c| c as u32).collect(),
    }
}

/// Check that a hand-written among table has the shape the lookup
/// relies on: strictly sorted entries (under the direction's key) and
/// backlinks that point to an earlier entry holding a proper affix.
pub fn verify_table(table: &[Among], direction: Direction) -> Result<(), TableError> {
    for index in 1..table.len() {
        let prev = sort_key(table[index - 1].literal, direction);
        let this = sort_key(table[index].literal, direction);
        if prev >= this {
            return Err(TableError::Unordered { index, direction });
        }
    }
    for (index, entry) in table.iter().enumerate() {
        let backlink = entry.backlink;
        if backlink < 0 {
            continue;
        }
        let target = backlink as usize;
        let is_affix = target < index
            && table[target].literal.len() < entry.literal.len()
            && match direction {
                Direction::Forward => entry.literal.starts_with(table[target].literal),
                Direction::Backward => entry.literal.ends_with(table[target].literal),
            };
        if !is_affix {
            return Err(TableError::Backlink { index, backlink });
        }
    }
    Ok(())
}
