//! French suffix-stripping stemmer.
//!
//! The algorithm runs a fixed pipeline over a [`SnowballBuffer`]:
//! a forward prelude that recodes `u`/`i`/`y` in hiatus and the
//! diaeresis vowels into single-character sentinels, region marking
//! (RV, R1, R2), a set of backward suffix passes, and a forward
//! postlude that decodes the sentinels again. Every pass is a boolean
//! predicate; a failed pass leaves the buffer rewound and the pipeline
//! simply moves on.
//!
//! The passes are deliberately order-dependent. The standard pass gets
//! first pick, the verb passes only see the word when it declined, and
//! the residual pass only when all three declined. The adverbial
//! `ment` family is the one deliberate twist: it substitutes the
//! underlying `ant`/`ent` stem and then reports failure, handing the
//! rewritten word to the verb passes.

pub mod tables;

use racine_snowball::SnowballBuffer;

use tables::{G_KEEP_WITH_S, G_V, KS_MAX, KS_MIN, V_MAX, V_MIN};

/// Stem a single lowercase French word.
///
/// The input is expected to be lowercased already (see
/// [`racine_core::character::lowercase_word`]); uppercase letters are
/// reserved as internal sentinels and pass through untouched. Words
/// with no matching suffix come back unchanged. Stemming is not
/// idempotent: `boulangère` stems to `boulanger`, which itself stems
/// to `boulang`.
pub fn stem_word(word: &str) -> String {
    let mut stemmer = FrenchStemmer::new(word);
    stemmer.stem();
    stemmer.buf.word()
}

/// One stemming run: the buffer plus the three region marks.
struct FrenchStemmer {
    buf: SnowballBuffer,
    /// Start of RV, the verb-suffix region.
    p_v: usize,
    /// Start of R1.
    p1: usize,
    /// Start of R2. Always `p1 <= p2`.
    p2: usize,
}

impl FrenchStemmer {
    fn new(word: &str) -> Self {
        FrenchStemmer {
            buf: SnowballBuffer::new(word),
            p_v: 0,
            p1: 0,
            p2: 0,
        }
    }

    fn stem(&mut self) {
        self.prelude();
        self.buf.cursor = 0;
        self.mark_regions();
        self.buf.cursor = 0;

        self.buf.enter_backward();
        self.suffix_step();
        self.buf.cursor = self.buf.limit;
        self.un_double();
        self.buf.cursor = self.buf.limit;
        self.un_accent();
        self.buf.cursor = self.buf.limit_backward;

        self.postlude();
    }

    // -- region predicates ------------------------------------------------

    fn in_rv(&self) -> bool {
        self.p_v <= self.buf.cursor
    }

    fn in_r1(&self) -> bool {
        self.p1 <= self.buf.cursor
    }

    fn in_r2(&self) -> bool {
        self.p2 <= self.buf.cursor
    }

    /// Backward-mode checkpoint, stored as the distance from `limit`.
    /// A substitution moves `limit`, so a raw cursor index would drift;
    /// the distance from the end stays valid across slice operations.
    fn checkpoint(&self) -> usize {
        self.buf.limit - self.buf.cursor
    }

    fn rewind(&mut self, saved: usize) {
        self.buf.cursor = self.buf.limit - saved;
    }

    // -- prelude ----------------------------------------------------------

    /// Forward sweep recoding ambiguous vowels into sentinels:
    /// `u`/`i` between vowels and `y` next to a vowel become `U`/`I`/`Y`,
    /// `u` after `q` becomes `U`, and the diaeresis vowels become the
    /// two-character sequences `He`/`Hi`.
    fn prelude(&mut self) {
        while self.prelude_step() {}
    }

    /// Scan forward for the next position where a recoding rule fires,
    /// apply it, and leave the cursor at the rule's start so overlapping
    /// contexts are re-examined. False once the scan hits the end.
    fn prelude_step(&mut self) -> bool {
        loop {
            let here = self.buf.cursor;
            if self.prelude_rule() {
                self.buf.cursor = here;
                return true;
            }
            self.buf.cursor = here;
            if self.buf.cursor >= self.buf.limit {
                return false;
            }
            self.buf.cursor += 1;
        }
    }

    fn prelude_rule(&mut self) -> bool {
        let start = self.buf.cursor;
        if self.prelude_after_vowel() {
            return true;
        }
        self.buf.cursor = start;
        if self.prelude_recode('\u{eb}', &['H', 'e']) {
            return true;
        }
        self.buf.cursor = start;
        if self.prelude_recode('\u{ef}', &['H', 'i']) {
            return true;
        }
        self.buf.cursor = start;
        if self.prelude_y_before_vowel() {
            return true;
        }
        self.buf.cursor = start;
        self.prelude_qu()
    }

    /// `u` or `i` between vowels, or `y` after a vowel.
    fn prelude_after_vowel(&mut self) -> bool {
        let b = &mut self.buf;
        if !b.in_grouping(G_V, V_MIN, V_MAX) {
            return false;
        }
        b.bra = b.cursor;
        let mark = b.cursor;
        if b.eq_s(&['u']) {
            b.ket = b.cursor;
            if b.in_grouping(G_V, V_MIN, V_MAX) {
                return b.slice_from(&['U']);
            }
        }
        b.cursor = mark;
        if b.eq_s(&['i']) {
            b.ket = b.cursor;
            if b.in_grouping(G_V, V_MIN, V_MAX) {
                return b.slice_from(&['I']);
            }
        }
        b.cursor = mark;
        if b.eq_s(&['y']) {
            b.ket = b.cursor;
            return b.slice_from(&['Y']);
        }
        false
    }

    fn prelude_recode(&mut self, from: char, to: &[char]) -> bool {
        let b = &mut self.buf;
        b.bra = b.cursor;
        if !b.eq_s(&[from]) {
            return false;
        }
        b.ket = b.cursor;
        b.slice_from(to)
    }

    fn prelude_y_before_vowel(&mut self) -> bool {
        let b = &mut self.buf;
        b.bra = b.cursor;
        if !b.eq_s(&['y']) {
            return false;
        }
        b.ket = b.cursor;
        if !b.in_grouping(G_V, V_MIN, V_MAX) {
            return false;
        }
        b.slice_from(&['Y'])
    }

    fn prelude_qu(&mut self) -> bool {
        let b = &mut self.buf;
        if !b.eq_s(&['q']) {
            return false;
        }
        b.bra = b.cursor;
        if !b.eq_s(&['u']) {
            return false;
        }
        b.ket = b.cursor;
        b.slice_from(&['U'])
    }

    // -- region marking ---------------------------------------------------

    /// Compute RV, R1 and R2. All three default to the end of the word
    /// when their defining position does not exist.
    fn mark_regions(&mut self) {
        self.p_v = self.buf.limit;
        self.p1 = self.buf.limit;
        self.p2 = self.buf.limit;

        let start = self.buf.cursor;
        if let Some(pv) = self.find_rv_start() {
            self.p_v = pv;
        }
        self.buf.cursor = start;

        if self.gopast_vowel() && self.gopast_non_vowel() {
            self.p1 = self.buf.cursor;
            if self.gopast_vowel() && self.gopast_non_vowel() {
                self.p2 = self.buf.cursor;
            }
        }
        self.buf.cursor = start;
    }

    /// RV starts after the third letter when the word opens with two
    /// vowels, after the prefixes `col`/`par`/`tap`, and otherwise after
    /// the first vowel that is not at the start of the word.
    fn find_rv_start(&mut self) -> Option<usize> {
        let b = &mut self.buf;
        let save = b.cursor;
        if b.in_grouping(G_V, V_MIN, V_MAX)
            && b.in_grouping(G_V, V_MIN, V_MAX)
            && b.cursor < b.limit
        {
            b.cursor += 1;
            return Some(b.cursor);
        }
        b.cursor = save;
        if b.find_among(tables::RV_PREFIX) != 0 {
            return Some(b.cursor);
        }
        b.cursor = save;
        if b.cursor >= b.limit {
            return None;
        }
        b.cursor += 1;
        loop {
            if b.in_grouping(G_V, V_MIN, V_MAX) {
                return Some(b.cursor);
            }
            if b.cursor >= b.limit {
                return None;
            }
            b.cursor += 1;
        }
    }

    fn gopast_vowel(&mut self) -> bool {
        loop {
            if self.buf.in_grouping(G_V, V_MIN, V_MAX) {
                return true;
            }
            if self.buf.cursor >= self.buf.limit {
                return false;
            }
            self.buf.cursor += 1;
        }
    }

    fn gopast_non_vowel(&mut self) -> bool {
        loop {
            if self.buf.out_grouping(G_V, V_MIN, V_MAX) {
                return true;
            }
            if self.buf.cursor >= self.buf.limit {
                return false;
            }
            self.buf.cursor += 1;
        }
    }

    // -- backward suffix passes -------------------------------------------

    /// One-shot suffix removal. The three suffix strategies are tried
    /// first-match-wins; on a hit the `Y`/`\u{e7}` boundary touch-up runs,
    /// otherwise the residual pass gets the word.
    fn suffix_step(&mut self) -> bool {
        let cp = self.checkpoint();
        let mut removed = self.standard_suffix();
        if !removed {
            self.rewind(cp);
            removed = self.i_verb_suffix();
            if !removed {
                self.rewind(cp);
                removed = self.verb_suffix();
            }
        }
        if removed {
            self.rewind(cp);
            self.boundary_touch_up();
            true
        } else {
            self.rewind(cp);
            self.residual_suffix()
        }
    }

    /// After a successful suffix removal the word may now end in a `Y`
    /// sentinel or a cedilla that the postlude would leave exposed;
    /// rewrite them to `i` and `c`.
    fn boundary_touch_up(&mut self) {
        self.buf.ket = self.buf.cursor;
        let cp = self.checkpoint();
        if self.buf.eq_s_b(&['Y']) {
            self.buf.bra = self.buf.cursor;
            self.buf.slice_from(&['i']);
            return;
        }
        self.rewind(cp);
        if self.buf.eq_s_b(&['\u{e7}']) {
            self.buf.bra = self.buf.cursor;
            self.buf.slice_from(&['c']);
        }
    }

    /// Derivational suffixes (`ation`, `euse`, `ement`, `it\u{e9}`, ...).
    /// Returns false when nothing was removed; tags 13-15 substitute and
    /// still return false so the verb passes run on the rewritten word.
    fn standard_suffix(&mut self) -> bool {
        self.buf.ket = self.buf.cursor;
        let tag = self.buf.find_among_b(tables::STANDARD_SUFFIX);
        if tag == 0 {
            return false;
        }
        self.buf.bra = self.buf.cursor;
        match tag {
            // iqUe ance isme able iste eux and plurals: delete in R2
            1 => {
                if !self.in_r2() {
                    return false;
                }
                self.buf.slice_del();
            }
            // atrice ateur ation: delete in R2, then a preceding ic
            // either goes too or is normalized to iqU
            2 => {
                if !self.in_r2() {
                    return false;
                }
                self.buf.slice_del();
                let cp = self.checkpoint();
                self.buf.ket = self.buf.cursor;
                if self.buf.eq_s_b(&['i', 'c']) {
                    self.buf.bra = self.buf.cursor;
                    if self.in_r2() {
                        self.buf.slice_del();
                    } else {
                        self.buf.slice_from(&['i', 'q', 'U']);
                    }
                } else {
                    self.rewind(cp);
                }
            }
            // logie logies
            3 => {
                if !self.in_r2() {
                    return false;
                }
                self.buf.slice_from(&['l', 'o', 'g']);
            }
            // usion ution
            4 => {
                if !self.in_r2() {
                    return false;
                }
                self.buf.slice_from(&['u']);
            }
            // ence ences
            5 => {
                if !self.in_r2() {
                    return false;
                }
                self.buf.slice_from(&['e', 'n', 't']);
            }
            // ement ements: delete in RV, then trim the exposed stem
            6 => {
                if !self.in_rv() {
                    return false;
                }
                self.buf.slice_del();
                self.ement_followup();
            }
            // ité ités: delete in R2, then trim the exposed stem
            7 => {
                if !self.in_r2() {
                    return false;
                }
                self.buf.slice_del();
                self.ite_followup();
            }
            // if ive ifs ives
            8 => {
                if !self.in_r2() {
                    return false;
                }
                self.buf.slice_del();
                self.ive_followup();
            }
            // eaux
            9 => {
                self.buf.slice_from(&['e', 'a', 'u']);
            }
            // aux
            10 => {
                if !self.in_r1() {
                    return false;
                }
                self.buf.slice_from(&['a', 'l']);
            }
            // euse euses
            11 => {
                if self.in_r2() {
                    self.buf.slice_del();
                } else if self.in_r1() {
                    self.buf.slice_from(&['e', 'u', 'x']);
                } else {
                    return false;
                }
            }
            // issement issements: delete in R1 after a consonant
            12 => {
                if !self.in_r1() {
                    return false;
                }
                if !self.buf.out_grouping_b(G_V, V_MIN, V_MAX) {
                    return false;
                }
                self.buf.slice_del();
            }
            // amment: rewrite to ant and hand over to the verb passes
            13 => {
                if !self.in_rv() {
                    return false;
                }
                self.buf.slice_from(&['a', 'n', 't']);
                return false;
            }
            // emment: rewrite to ent, same handover
            14 => {
                if !self.in_rv() {
                    return false;
                }
                self.buf.slice_from(&['e', 'n', 't']);
                return false;
            }
            // ment ments: delete after a vowel in RV, same handover
            15 => {
                let cp = self.checkpoint();
                if !self.buf.in_grouping_b(G_V, V_MIN, V_MAX) {
                    return false;
                }
                if !self.in_rv() {
                    return false;
                }
                self.rewind(cp);
                self.buf.slice_del();
                return false;
            }
            _ => return false,
        }
        true
    }

    /// Secondary trim after `ement` removal (`eus`, `abl`, `iqU`, ...).
    fn ement_followup(&mut self) {
        let cp = self.checkpoint();
        self.buf.ket = self.buf.cursor;
        let tag = self.buf.find_among_b(tables::EMENT_FOLLOWUP);
        if tag == 0 {
            self.rewind(cp);
            return;
        }
        self.buf.bra = self.buf.cursor;
        match tag {
            // iv: delete in R2, then also a preceding at in R2
            1 if self.in_r2() => {
                self.buf.slice_del();
                let cp2 = self.checkpoint();
                self.buf.ket = self.buf.cursor;
                if self.buf.eq_s_b(&['a', 't']) {
                    self.buf.bra = self.buf.cursor;
                    if self.in_r2() {
                        self.buf.slice_del();
                    } else {
                        self.rewind(cp2);
                    }
                } else {
                    self.rewind(cp2);
                }
            }
            // eus: delete in R2, else eux in R1
            2 if self.in_r2() => {
                self.buf.slice_del();
            }
            2 if self.in_r1() => {
                self.buf.slice_from(&['e', 'u', 'x']);
            }
            // abl iqU: delete in R2
            3 if self.in_r2() => {
                self.buf.slice_del();
            }
            // ièr Ièr: replace with i in RV
            4 if self.in_rv() => {
                self.buf.slice_from(&['i']);
            }
            _ => self.rewind(cp),
        }
    }

    /// Secondary trim after `it\u{e9}` removal.
    fn ite_followup(&mut self) {
        let cp = self.checkpoint();
        self.buf.ket = self.buf.cursor;
        let tag = self.buf.find_among_b(tables::ITE_FOLLOWUP);
        if tag == 0 {
            self.rewind(cp);
            return;
        }
        self.buf.bra = self.buf.cursor;
        match tag {
            // abil: delete in R2, else abl
            1 => {
                if self.in_r2() {
                    self.buf.slice_del();
                } else {
                    self.buf.slice_from(&['a', 'b', 'l']);
                }
            }
            // ic: delete in R2, else iqU
            2 => {
                if self.in_r2() {
                    self.buf.slice_del();
                } else {
                    self.buf.slice_from(&['i', 'q', 'U']);
                }
            }
            // iv: delete in R2 only
            3 if self.in_r2() => {
                self.buf.slice_del();
            }
            _ => self.rewind(cp),
        }
    }

    /// Secondary trim after `if`/`ive` removal: a preceding `at` in R2
    /// goes, and a preceding `ic` after that goes or becomes `iqU`.
    fn ive_followup(&mut self) {
        let cp = self.checkpoint();
        self.buf.ket = self.buf.cursor;
        if !self.buf.eq_s_b(&['a', 't']) {
            self.rewind(cp);
            return;
        }
        self.buf.bra = self.buf.cursor;
        if !self.in_r2() {
            self.rewind(cp);
            return;
        }
        self.buf.slice_del();

        let cp2 = self.checkpoint();
        self.buf.ket = self.buf.cursor;
        if !self.buf.eq_s_b(&['i', 'c']) {
            self.rewind(cp2);
            return;
        }
        self.buf.bra = self.buf.cursor;
        if self.in_r2() {
            self.buf.slice_del();
        } else {
            self.buf.slice_from(&['i', 'q', 'U']);
        }
    }

    /// `-ir` verb endings, matched inside RV only: delete when preceded
    /// by a true consonant. The `H` guard keeps endings that only look
    /// verbal because a diaeresis vowel was recoded (`ha\u{ef}r` family).
    fn i_verb_suffix(&mut self) -> bool {
        if self.buf.cursor < self.p_v {
            return false;
        }
        let outer_limit = self.buf.limit_backward;
        self.buf.limit_backward = self.p_v;

        let matched = self.i_verb_suffix_inner();

        self.buf.limit_backward = outer_limit;
        matched
    }

    fn i_verb_suffix_inner(&mut self) -> bool {
        self.buf.ket = self.buf.cursor;
        if self.buf.find_among_b(tables::I_VERB_SUFFIX) == 0 {
            return false;
        }
        self.buf.bra = self.buf.cursor;
        let cp = self.checkpoint();
        if self.buf.eq_s_b(&['H']) {
            return false;
        }
        self.rewind(cp);
        if !self.buf.out_grouping_b(G_V, V_MIN, V_MAX) {
            return false;
        }
        self.buf.slice_del()
    }

    /// `-er` verb and past-tense endings, matched inside RV only.
    fn verb_suffix(&mut self) -> bool {
        if self.buf.cursor < self.p_v {
            return false;
        }
        let outer_limit = self.buf.limit_backward;
        self.buf.limit_backward = self.p_v;

        let matched = self.verb_suffix_inner();

        self.buf.limit_backward = outer_limit;
        matched
    }

    fn verb_suffix_inner(&mut self) -> bool {
        self.buf.ket = self.buf.cursor;
        let tag = self.buf.find_among_b(tables::VERB_SUFFIX);
        if tag == 0 {
            return false;
        }
        self.buf.bra = self.buf.cursor;
        match tag {
            // ions: delete in R2
            1 => {
                if !self.in_r2() {
                    return false;
                }
                self.buf.slice_del();
            }
            // é ée er ez and the future/conditional er- family
            2 => {
                self.buf.slice_del();
            }
            // a ai ait ant asse ... : delete, then also a bare
            // preceding e
            3 => {
                self.buf.slice_del();
                let cp = self.checkpoint();
                self.buf.ket = self.buf.cursor;
                if self.buf.eq_s_b(&['e']) {
                    self.buf.bra = self.buf.cursor;
                    self.buf.slice_del();
                } else {
                    self.rewind(cp);
                }
            }
            _ => return false,
        }
        true
    }

    /// Last-resort endings for words no other pass touched: a bare `s`
    /// (unless the stem asks to keep it), then `ion`/`ier`/`e` inside RV.
    fn residual_suffix(&mut self) -> bool {
        let cp = self.checkpoint();
        if !self.residual_strip_s() {
            self.rewind(cp);
        }

        if self.buf.cursor < self.p_v {
            return false;
        }
        let outer_limit = self.buf.limit_backward;
        self.buf.limit_backward = self.p_v;

        let matched = self.residual_suffix_inner();

        self.buf.limit_backward = outer_limit;
        matched
    }

    /// Strip a trailing `s` unless it follows a keep-with-s character.
    /// A preceding `Hi` sentinel overrides the keep: the `i` there is
    /// really `\u{ef}`, which never protects an `s`.
    fn residual_strip_s(&mut self) -> bool {
        self.buf.ket = self.buf.cursor;
        if !self.buf.eq_s_b(&['s']) {
            return false;
        }
        self.buf.bra = self.buf.cursor;
        let cp = self.checkpoint();
        if !self.buf.eq_s_b(&['H', 'i']) {
            self.rewind(cp);
            if !self.buf.out_grouping_b(G_KEEP_WITH_S, KS_MIN, KS_MAX) {
                return false;
            }
        }
        self.rewind(cp);
        self.buf.slice_del()
    }

    fn residual_suffix_inner(&mut self) -> bool {
        self.buf.ket = self.buf.cursor;
        let tag = self.buf.find_among_b(tables::RESIDUAL_SUFFIX);
        if tag == 0 {
            return false;
        }
        self.buf.bra = self.buf.cursor;
        match tag {
            // ion: delete in R2 when preceded by s or t
            1 => {
                if !self.in_r2() {
                    return false;
                }
                let cp = self.checkpoint();
                let mut preceded = self.buf.eq_s_b(&['s']);
                if !preceded {
                    self.rewind(cp);
                    preceded = self.buf.eq_s_b(&['t']);
                }
                if !preceded {
                    return false;
                }
                self.buf.slice_del();
            }
            // ier ière Ier Ière
            2 => {
                self.buf.slice_from(&['i']);
            }
            // e
            3 => {
                self.buf.slice_del();
            }
            _ => return false,
        }
        true
    }

    /// Undouble a final `ll`/`nn`/`tt` left exposed by suffix removal
    /// (`ell`, `eill`, `enn`, `onn`, `ett`).
    fn un_double(&mut self) -> bool {
        let cp = self.checkpoint();
        if self.buf.find_among_b(tables::UN_DOUBLE) == 0 {
            return false;
        }
        self.rewind(cp);
        self.buf.ket = self.buf.cursor;
        if self.buf.cursor <= self.buf.limit_backward {
            return false;
        }
        self.buf.cursor -= 1;
        self.buf.bra = self.buf.cursor;
        self.buf.slice_del()
    }

    /// Rewrite a final `\u{e9}`/`\u{e8}` to `e` when only non-vowels
    /// follow it, so `pr\u{e9}f\u{e9}r` and `pr\u{e9}f\u{e8}r` collapse
    /// to the same stem.
    fn un_accent(&mut self) -> bool {
        let mut trailing = 0usize;
        while self.buf.out_grouping_b(G_V, V_MIN, V_MAX) {
            trailing += 1;
        }
        if trailing == 0 {
            return false;
        }
        self.buf.ket = self.buf.cursor;
        let cp = self.checkpoint();
        if !self.buf.eq_s_b(&['\u{e9}']) {
            self.rewind(cp);
            if !self.buf.eq_s_b(&['\u{e8}']) {
                return false;
            }
        }
        self.buf.bra = self.buf.cursor;
        self.buf.slice_from(&['e'])
    }

    // -- postlude ---------------------------------------------------------

    /// Final forward sweep decoding the sentinels back to their surface
    /// forms (`I`/`U`/`Y` to `i`/`u`/`y`, `He`/`Hi` to the diaeresis
    /// vowels, stray `H` deleted).
    fn postlude(&mut self) {
        loop {
            let start = self.buf.cursor;
            self.buf.bra = self.buf.cursor;
            let tag = self.buf.find_among(tables::POSTLUDE);
            self.buf.ket = self.buf.cursor;
            let advanced = match tag {
                1 => self.buf.slice_from(&['i']),
                2 => self.buf.slice_from(&['u']),
                3 => self.buf.slice_from(&['y']),
                4 => self.buf.slice_from(&['\u{eb}']),
                5 => self.buf.slice_from(&['\u{ef}']),
                6 => self.buf.slice_del(),
                7 => {
                    if self.buf.cursor >= self.buf.limit {
                        false
                    } else {
                        self.buf.cursor += 1;
                        true
                    }
                }
                _ => false,
            };
            if !advanced {
                self.buf.cursor = start;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_prelude(word: &str) -> String {
        let mut s = FrenchStemmer::new(word);
        s.prelude();
        s.buf.word()
    }

    fn regions(word: &str) -> (usize, usize, usize) {
        let mut s = FrenchStemmer::new(word);
        s.prelude();
        s.buf.cursor = 0;
        s.mark_regions();
        (s.p_v, s.p1, s.p2)
    }

    #[test]
    fn prelude_recodes_hiatus_vowels() {
        assert_eq!(run_prelude("chouette"), "choUette");
        // the qu rule fires first, so the following i no longer sits
        // after a grouping vowel and stays as-is
        assert_eq!(run_prelude("inquiétude"), "inqUiétude");
        assert_eq!(run_prelude("payer"), "paYer");
        assert_eq!(run_prelude("joyeux"), "joYeux");
    }

    #[test]
    fn prelude_recodes_word_initial_y() {
        assert_eq!(run_prelude("yeux"), "Yeux");
    }

    #[test]
    fn prelude_recodes_diaeresis() {
        assert_eq!(run_prelude("naïve"), "naHive");
        assert_eq!(run_prelude("noël"), "noHel");
    }

    #[test]
    fn prelude_recodes_qu() {
        assert_eq!(run_prelude("logique"), "logiqUe");
    }

    #[test]
    fn prelude_leaves_plain_words_alone() {
        assert_eq!(run_prelude("national"), "national");
        assert_eq!(run_prelude(""), "");
    }

    #[test]
    fn region_marks() {
        // f-a-m-e-u-s-e-m-e-n-t: RV after the first interior vowel,
        // R1 after the first vowel/non-vowel pair, R2 after the second.
        assert_eq!(regions("fameusement"), (2, 3, 6));
        // two leading vowels: RV starts after the third letter
        assert_eq!(regions("aimer"), (3, 3, 5));
        // par/col/tap prefixes start RV right after themselves
        assert_eq!(regions("parler"), (3, 3, 6));
    }

    #[test]
    fn regions_default_to_word_end() {
        let (pv, p1, p2) = regions("été");
        assert_eq!(pv, 3);
        assert_eq!(p1, 2);
        assert_eq!(p2, 3);
        assert!(p1 <= p2);
    }

    #[test]
    fn standard_suffixes() {
        assert_eq!(stem_word("nationalement"), "national");
        assert_eq!(stem_word("continuellement"), "continuel");
        assert_eq!(stem_word("essentiellement"), "essentiel");
        assert_eq!(stem_word("logiquement"), "logiqu");
        assert_eq!(stem_word("sérieusement"), "sérieux");
        assert_eq!(stem_word("attentivement"), "attent");
        assert_eq!(stem_word("ondulation"), "ondul");
        assert_eq!(stem_word("chevaux"), "cheval");
        assert_eq!(stem_word("châteaux"), "château");
    }

    #[test]
    fn adverb_rewrite_feeds_verb_pass() {
        // amment/emment substitute the ant/ent stem and fall through to
        // the verb suffix pass instead of stopping the pipeline.
        assert_eq!(stem_word("abondamment"), "abond");
        assert_eq!(stem_word("puissamment"), "puiss");
        assert_eq!(stem_word("vraiment"), "vrai");
    }

    #[test]
    fn verb_suffixes() {
        assert_eq!(stem_word("donnerait"), "don");
        assert_eq!(stem_word("donner"), "don");
        assert_eq!(stem_word("finissait"), "fin");
        assert_eq!(stem_word("préférât"), "préfer");
    }

    #[test]
    fn residual_suffixes() {
        assert_eq!(stem_word("attention"), "attent");
        assert_eq!(stem_word("boulangère"), "boulanger");
        assert_eq!(stem_word("boulanger"), "boulang");
    }

    #[test]
    fn final_s_kept_after_protecting_characters() {
        assert_eq!(stem_word("bois"), "bois");
    }

    #[test]
    fn sentinels_never_leak() {
        for word in ["joyeux", "yeux", "naïve", "aboyer", "séquoia"] {
            let stem = stem_word(word);
            for c in stem.chars() {
                assert!(
                    !c.is_uppercase(),
                    "sentinel leaked from {word}: {stem}"
                );
            }
        }
    }

    #[test]
    fn untouched_inputs() {
        assert_eq!(stem_word(""), "");
        assert_eq!(stem_word("été"), "été");
        assert_eq!(stem_word("yeux"), "yeux");
        assert_eq!(stem_word("1234"), "1234");
    }

    #[test]
    fn idempotent_on_stable_stems() {
        // Not a general property (see boulangère), so assert it only
        // on stems known to be fixpoints.
        for stem in ["cheval", "don", "vrai", "national", "fin"] {
            assert_eq!(stem_word(stem), stem);
        }
    }

    #[test]
    fn stem_never_longer_than_input() {
        for word in [
            "continuellement",
            "majestueusement",
            "châteaux",
            "finissait",
            "bois",
            "a",
            "",
        ] {
            assert!(stem_word(word).chars().count() <= word.chars().count());
        }
    }
}
