// Cursor buffer: the mutable string-processing context for one stemming run.

use crate::among::Among;

/// Mutable processing state for one word.
///
/// The buffer holds the working text as a `Vec<char>` (rules address
/// characters, not bytes) together with a cursor, the active window
/// bounds `limit`/`limit_backward`, and the `bra`/`ket` markers of the
/// slice a rule is about to delete or replace.
///
/// Invariant maintained by every destructive operation:
/// `bra <= ket <= limit <= text.len()`.
///
/// A buffer is created fresh per input word and discarded after the
/// run; there is no cross-call state.
#[derive(Debug)]
pub struct SnowballBuffer {
    text: Vec<char>,
    pub cursor: usize,
    pub limit: usize,
    pub limit_backward: usize,
    pub bra: usize,
    pub ket: usize,
}

impl SnowballBuffer {
    /// Load a word into a fresh buffer, cursor at the start, window
    /// covering the whole text.
    pub fn new(word: &str) -> Self {
        let text: Vec<char> = word.chars().collect();
        let limit = text.len();
        Self { text, cursor: 0, limit, limit_backward: 0, bra: 0, ket: limit }
    }

    /// The current working text.
    pub fn text(&self) -> &[char] {
        &self.text
    }

    /// The current working text as an owned string.
    pub fn word(&self) -> String {
        self.text.iter().collect()
    }

    /// Switch to backward processing: the left bound becomes the current
    /// cursor and the cursor jumps to the right end of the window.
    pub fn enter_backward(&mut self) {
        self.limit_backward = self.cursor;
        self.cursor = self.limit;
    }

    // -----------------------------------------------------------------
    // Character-class membership
    //
    // Groupings are packed bit arrays indexed by `char code - min`;
    // codes outside [min, max] are outside the group by definition.
    // -----------------------------------------------------------------

    fn group_contains(s: &[u8], min: u32, max: u32, ch: char) -> bool {
        let code = ch as u32;
        if code < min || code > max {
            return false;
        }
        let bit = (code - min) as usize;
        s[bit >> 3] & (1 << (bit & 0x7)) != 0
    }

    /// If the character at the cursor is in the group, advance one
    /// character and succeed; otherwise fail without moving.
    pub fn in_grouping(&mut self, s: &[u8], min: u32, max: u32) -> bool {
        if self.cursor >= self.limit {
            return false;
        }
        if !Self::group_contains(s, min, max, self.text[self.cursor]) {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Backward variant of [`in_grouping`](Self::in_grouping): tests the
    /// character before the cursor and retreats on success.
    pub fn in_grouping_b(&mut self, s: &[u8], min: u32, max: u32) -> bool {
        if self.cursor <= self.limit_backward {
            return false;
        }
        if !Self::group_contains(s, min, max, self.text[self.cursor - 1]) {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Complement of [`in_grouping`](Self::in_grouping): succeeds (and
    /// advances) when the character is outside the group or out of range.
    pub fn out_grouping(&mut self, s: &[u8], min: u32, max: u32) -> bool {
        if self.cursor >= self.limit {
            return false;
        }
        if Self::group_contains(s, min, max, self.text[self.cursor]) {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Backward variant of [`out_grouping`](Self::out_grouping).
    pub fn out_grouping_b(&mut self, s: &[u8], min: u32, max: u32) -> bool {
        if self.cursor <= self.limit_backward {
            return false;
        }
        if Self::group_contains(s, min, max, self.text[self.cursor - 1]) {
            return false;
        }
        self.cursor -= 1;
        true
    }

    // -----------------------------------------------------------------
    // Literal matches
    // -----------------------------------------------------------------

    /// Exact match of `s` at the cursor; advances past it on success,
    /// no movement on failure.
    pub fn eq_s(&mut self, s: &[char]) -> bool {
        if self.limit - self.cursor < s.len() {
            return false;
        }
        if self.text[self.cursor..self.cursor + s.len()] != *s {
            return false;
        }
        self.cursor += s.len();
        true
    }

    /// Exact match of `s` ending at the cursor; retreats before it on
    /// success.
    pub fn eq_s_b(&mut self, s: &[char]) -> bool {
        if self.cursor - self.limit_backward < s.len() {
            return false;
        }
        if self.text[self.cursor - s.len()..self.cursor] != *s {
            return false;
        }
        self.cursor -= s.len();
        true
    }

    // -----------------------------------------------------------------
    // Among-table longest match
    //
    // Binary search over the sorted table, tracking the common prefix
    // length already confirmed against the lower and upper brackets
    // (`common_i` / `common_j`) so characters are never re-compared.
    // When the bracket collapses onto index 0 without the deepest
    // candidate having been inspected, the search goes round once more
    // (`first_key_inspected`); terminating one step earlier would skip
    // a valid longest match.
    // -----------------------------------------------------------------

    /// Forward longest match at the cursor. Returns the matched entry's
    /// result tag and advances past the literal, or returns 0 with the
    /// cursor untouched when nothing (guard-satisfying) matches.
    pub fn find_among(&mut self, v: &[Among]) -> i32 {
        let mut i: i32 = 0;
        let mut j: i32 = v.len() as i32;
        let c = self.cursor;
        let l = self.limit;
        let mut common_i = 0usize;
        let mut common_j = 0usize;
        let mut first_key_inspected = false;

        loop {
            let k = i + ((j - i) >> 1);
            let mut diff: i32 = 0;
            let mut common = common_i.min(common_j);
            let w = &v[k as usize];
            while common < w.literal.len() {
                if c + common == l {
                    diff = -1;
                    break;
                }
                diff = self.text[c + common] as i32 - w.literal[common] as i32;
                if diff != 0 {
                    break;
                }
                common += 1;
            }
            if diff < 0 {
                j = k;
                common_j = common;
            } else {
                i = k;
                common_i = common;
            }
            if j - i <= 1 {
                if i > 0 || j == i || first_key_inspected {
                    break;
                }
                first_key_inspected = true;
            }
        }

        let mut i = i;
        loop {
            let w = &v[i as usize];
            if common_i >= w.literal.len() {
                self.cursor = c + w.literal.len();
                let Some(guard) = w.guard else {
                    return w.result;
                };
                let accepted = guard(self);
                self.cursor = c + w.literal.len();
                if accepted {
                    return w.result;
                }
            }
            i = w.backlink;
            if i < 0 {
                return 0;
            }
        }
    }

    /// Backward longest match ending at the cursor. Mirror image of
    /// [`find_among`](Self::find_among): literals are compared from
    /// their last character leftwards and the cursor retreats before
    /// the match on success.
    pub fn find_among_b(&mut self, v: &[Among]) -> i32 {
        let mut i: i32 = 0;
        let mut j: i32 = v.len() as i32;
        let c = self.cursor;
        let lb = self.limit_backward;
        let mut common_i = 0usize;
        let mut common_j = 0usize;
        let mut first_key_inspected = false;

        loop {
            let k = i + ((j - i) >> 1);
            let mut diff: i32 = 0;
            let mut common = common_i.min(common_j);
            let w = &v[k as usize];
            while common < w.literal.len() {
                if c - common == lb {
                    diff = -1;
                    break;
                }
                diff = self.text[c - common - 1] as i32
                    - w.literal[w.literal.len() - 1 - common] as i32;
                if diff != 0 {
                    break;
                }
                common += 1;
            }
            if diff < 0 {
                j = k;
                common_j = common;
            } else {
                i = k;
                common_i = common;
            }
            if j - i <= 1 {
                if i > 0 || j == i || first_key_inspected {
                    break;
                }
                first_key_inspected = true;
            }
        }

        let mut i = i;
        loop {
            let w = &v[i as usize];
            if common_i >= w.literal.len() {
                self.cursor = c - w.literal.len();
                let Some(guard) = w.guard else {
                    return w.result;
                };
                let accepted = guard(self);
                self.cursor = c - w.literal.len();
                if accepted {
                    return w.result;
                }
            }
            i = w.backlink;
            if i < 0 {
                return 0;
            }
        }
    }

    // -----------------------------------------------------------------
    // Slice replacement
    // -----------------------------------------------------------------

    /// `bra <= ket <= limit <= text.len()` -- checked before every
    /// destructive slice operation. A violation means the rule wiring
    /// drifted, not a property of the input.
    pub fn slice_check(&self) -> bool {
        self.bra <= self.ket && self.ket <= self.limit && self.limit <= self.text.len()
    }

    /// Replace `text[bra..ket]` with `replacement`, adjusting `limit`
    /// by the length delta and repositioning the cursor: at or after
    /// `ket` it shifts with the delta, strictly inside the replaced
    /// range it snaps to `bra`. Returns the delta.
    pub fn replace_range(&mut self, bra: usize, ket: usize, replacement: &[char]) -> isize {
        let adjustment = replacement.len() as isize - (ket - bra) as isize;
        self.text.splice(bra..ket, replacement.iter().copied());
        self.limit = (self.limit as isize + adjustment) as usize;
        if self.cursor >= ket {
            self.cursor = (self.cursor as isize + adjustment) as usize;
        } else if self.cursor > bra {
            self.cursor = bra;
        }
        adjustment
    }

    /// Replace the current `[bra, ket)` slice. On a violated slice
    /// invariant this asserts in debug builds and is a no-op reporting
    /// failure in release builds rather than corrupting the buffer.
    pub fn slice_from(&mut self, replacement: &[char]) -> bool {
        debug_assert!(
            self.slice_check(),
            "slice invariant violated: bra={} ket={} limit={} len={}",
            self.bra,
            self.ket,
            self.limit,
            self.text.len()
        );
        if !self.slice_check() {
            return false;
        }
        self.replace_range(self.bra, self.ket, replacement);
        true
    }

    /// Delete the current `[bra, ket)` slice.
    pub fn slice_del(&mut self) -> bool {
        self.slice_from(&[])
    }

    /// Like [`replace_range`](Self::replace_range), but also shifts the
    /// buffer's own `bra`/`ket` markers when the edit happens at or
    /// before them. Needed when a rule inserts a replacement for a
    /// later slice while an earlier slice boundary is still tracked.
    pub fn insert(&mut self, bra: usize, ket: usize, s: &[char]) {
        let adjustment = self.replace_range(bra, ket, s);
        if bra <= self.bra {
            self.bra = (self.bra as isize + adjustment) as usize;
        }
        if bra <= self.ket {
            self.ket = (self.ket as isize + adjustment) as usize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test grouping over [a, z]: vowels a e i o u y.
    const VOWELS: &[u8] = &[0x11, 0x41, 0x10, 0x01];
    const MIN: u32 = 'a' as u32;
    const MAX: u32 = 'z' as u32;

    const fn entry(literal: &'static [char], backlink: i32, result: i32) -> Among {
        Among { literal, backlink, result, guard: None }
    }

    #[test]
    fn grouping_bitset_layout() {
        // a(0) e(4) -> 0x11, i(8) o(14) -> 0x41, u(20) -> 0x10, y(24) -> 0x01
        for v in ['a', 'e', 'i', 'o', 'u', 'y'] {
            assert!(SnowballBuffer::group_contains(VOWELS, MIN, MAX, v), "{v}");
        }
        for c in ['b', 'n', 'z', '0', 'é'] {
            assert!(!SnowballBuffer::group_contains(VOWELS, MIN, MAX, c), "{c}");
        }
    }

    #[test]
    fn in_grouping_advances_only_on_success() {
        let mut b = SnowballBuffer::new("an");
        assert!(b.in_grouping(VOWELS, MIN, MAX));
        assert_eq!(b.cursor, 1);
        assert!(!b.in_grouping(VOWELS, MIN, MAX));
        assert_eq!(b.cursor, 1);
        assert!(b.out_grouping(VOWELS, MIN, MAX));
        assert_eq!(b.cursor, 2);
        // at limit both fail
        assert!(!b.in_grouping(VOWELS, MIN, MAX));
        assert!(!b.out_grouping(VOWELS, MIN, MAX));
    }

    #[test]
    fn backward_grouping_respects_limit_backward() {
        let mut b = SnowballBuffer::new("na");
        b.enter_backward();
        assert!(b.in_grouping_b(VOWELS, MIN, MAX));
        assert_eq!(b.cursor, 1);
        assert!(b.out_grouping_b(VOWELS, MIN, MAX));
        assert_eq!(b.cursor, 0);
        assert!(!b.in_grouping_b(VOWELS, MIN, MAX));
        assert!(!b.out_grouping_b(VOWELS, MIN, MAX));
    }

    #[test]
    fn eq_s_forward_and_backward() {
        let mut b = SnowballBuffer::new("continu");
        assert!(b.eq_s(&['c', 'o', 'n']));
        assert_eq!(b.cursor, 3);
        assert!(!b.eq_s(&['x']));
        assert_eq!(b.cursor, 3);

        b.enter_backward();
        assert!(b.eq_s_b(&['n', 'u']));
        assert_eq!(b.cursor, 5);
        assert!(!b.eq_s_b(&['n', 'u']));
    }

    #[test]
    fn eq_s_rejects_longer_than_window() {
        let mut b = SnowballBuffer::new("ab");
        assert!(!b.eq_s(&['a', 'b', 'c']));
        b.enter_backward();
        assert!(!b.eq_s_b(&['x', 'a', 'b']));
    }

    #[test]
    fn replace_range_repositions_cursor() {
        // Cursor after the replaced range shifts by the delta.
        let mut b = SnowballBuffer::new("abcdef");
        b.cursor = 5;
        b.replace_range(1, 3, &['X']);
        assert_eq!(b.word(), "aXdef");
        assert_eq!(b.cursor, 4);
        assert_eq!(b.limit, 5);

        // Cursor strictly inside the replaced range snaps to bra.
        let mut b = SnowballBuffer::new("abcdef");
        b.cursor = 2;
        b.replace_range(1, 4, &[]);
        assert_eq!(b.word(), "aef");
        assert_eq!(b.cursor, 1);
        assert_eq!(b.limit, 3);
    }

    #[test]
    fn slice_del_uses_marked_slice() {
        let mut b = SnowballBuffer::new("cheval");
        b.enter_backward();
        assert!(b.eq_s_b(&['a', 'l']));
        b.ket = 6;
        b.bra = b.cursor;
        assert!(b.slice_del());
        assert_eq!(b.word(), "chev");
        assert_eq!(b.limit, 4);
    }

    #[test]
    fn slice_from_rejects_drifted_markers() {
        let mut b = SnowballBuffer::new("abc");
        b.bra = 2;
        b.ket = 1;
        // Invariant violated: no-op failure, buffer intact.
        // (debug builds assert instead)
        if !cfg!(debug_assertions) {
            assert!(!b.slice_from(&['x']));
            assert_eq!(b.word(), "abc");
        }
    }

    #[test]
    fn insert_shifts_tracked_markers() {
        let mut b = SnowballBuffer::new("abcd");
        b.bra = 2;
        b.ket = 4;
        b.insert(1, 1, &['X', 'Y']);
        assert_eq!(b.word(), "aXYbcd");
        assert_eq!(b.bra, 4);
        assert_eq!(b.ket, 6);
    }

    // -- find_among --

    // Forward table over {"e", "eu", "eus", "euse"}; longest match wins.
    const CHAIN: &[Among] = &[
        entry(&['e'], -1, 1),
        entry(&['e', 'u'], 0, 2),
        entry(&['e', 'u', 's'], 1, 3),
        entry(&['e', 'u', 's', 'e'], 2, 4),
    ];

    #[test]
    fn find_among_prefers_longest() {
        let mut b = SnowballBuffer::new("euse");
        assert_eq!(b.find_among(CHAIN), 4);
        assert_eq!(b.cursor, 4);

        let mut b = SnowballBuffer::new("eusx");
        assert_eq!(b.find_among(CHAIN), 3);
        assert_eq!(b.cursor, 3);

        let mut b = SnowballBuffer::new("ex");
        assert_eq!(b.find_among(CHAIN), 1);
        assert_eq!(b.cursor, 1);

        let mut b = SnowballBuffer::new("x");
        assert_eq!(b.find_among(CHAIN), 0);
        assert_eq!(b.cursor, 0);
    }

    #[test]
    fn find_among_b_overlapping_suffixes() {
        // Backward table: "eus" and "euse" both candidates; the longer
        // one must win when both match.
        const T: &[Among] = &[
            entry(&['e', 'u', 's', 'e'], -1, 2),
            entry(&['e', 'u', 's'], -1, 1),
        ];
        let mut b = SnowballBuffer::new("heureuse");
        b.enter_backward();
        assert_eq!(b.find_among_b(T), 2);
        assert_eq!(b.cursor, 4);

        let mut b = SnowballBuffer::new("heureus");
        b.enter_backward();
        assert_eq!(b.find_among_b(T), 1);
        assert_eq!(b.cursor, 4);
    }

    #[test]
    fn find_among_first_entry_needs_extra_round() {
        // The deepest candidate sits at index 0; the bracket collapses
        // there without inspecting it, and only the extra round finds
        // the match.
        const T: &[Among] = &[
            entry(&['a', 'a', 'a'], -1, 1),
            entry(&['b'], -1, 2),
            entry(&['c'], -1, 3),
            entry(&['d'], -1, 4),
        ];
        let mut b = SnowballBuffer::new("aaa");
        assert_eq!(b.find_among(T), 1);
        assert_eq!(b.cursor, 3);
    }

    #[test]
    fn find_among_guard_falls_back_along_backlinks() {
        fn reject(_: &mut SnowballBuffer) -> bool {
            false
        }
        fn next_is_x(b: &mut SnowballBuffer) -> bool {
            b.eq_s(&['x'])
        }
        const T: &[Among] = &[
            entry(&['e'], -1, 1),
            Among { literal: &['e', 'u'], backlink: 0, result: 2, guard: Some(reject) },
        ];
        // "eu" matches but its guard rejects: fall back to "e".
        let mut b = SnowballBuffer::new("eu");
        assert_eq!(b.find_among(T), 1);
        assert_eq!(b.cursor, 1);

        const T2: &[Among] = &[
            Among { literal: &['a'], backlink: -1, result: 1, guard: Some(next_is_x) },
        ];
        // Guard runs with the cursor past the literal and its movement
        // is undone before returning.
        let mut b = SnowballBuffer::new("ax");
        assert_eq!(b.find_among(T2), 1);
        assert_eq!(b.cursor, 1);
        let mut b = SnowballBuffer::new("ay");
        assert_eq!(b.find_among(T2), 0);
    }

    #[test]
    fn find_among_empty_literal_always_matches() {
        const T: &[Among] = &[entry(&[], -1, 9), entry(&['z'], 0, 1)];
        let mut b = SnowballBuffer::new("q");
        assert_eq!(b.find_among(T), 9);
        assert_eq!(b.cursor, 0);
        // even at the limit
        let mut b = SnowballBuffer::new("");
        assert_eq!(b.find_among(T), 9);
    }

    #[test]
    fn find_among_b_restricted_window() {
        const T: &[Among] = &[entry(&['a', 'b'], -1, 1)];
        let mut b = SnowballBuffer::new("ab");
        b.enter_backward();
        b.limit_backward = 1; // window excludes the 'a'
        assert_eq!(b.find_among_b(T), 0);
        assert_eq!(b.cursor, 2);
    }
}
