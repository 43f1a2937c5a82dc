/**
 * Inclusive code-point ranges and the range-list operations character classes
 * are built from.
 */

use std::cmp::{max, min};
use std::fmt;

/// Represents an inclusive range of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePointRange {
    pub start: char,
    pub end: char,
}

/// What remains of a range after another one has been taken out of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    /// The subtrahend covers the whole range
    Nothing,

    /// The subtrahend overlaps one edge, or nothing at all
    Single(CodePointRange),

    /// The subtrahend lies strictly inside and splits the range in two
    Split(CodePointRange, CodePointRange),
}

/**
 * Stepping over scalar values. The surrogate block is not made of chars, so
 * U+D7FF and U+E000 are neighbours.
 */

pub fn next_char(c: char) -> Option<char> {
    match c {
        '\u{D7FF}' => Some('\u{E000}'),
        _ => std::char::from_u32(c as u32 + 1),
    }
}

pub fn prev_char(c: char) -> Option<char> {
    match c {
        '\u{E000}' => Some('\u{D7FF}'),
        '\0' => None,
        _ => std::char::from_u32(c as u32 - 1),
    }
}

/**
 * Constructing a range.
 */

impl CodePointRange {
    /// Creates a range, swapping the ends if they come in the wrong order.
    pub fn new(start: char, end: char) -> Self {
        if start > end {
            Self{ start: end, end: start }
        }
        else {
            Self{ start, end }
        }
    }

    pub fn singleton(c: char) -> Self {
        Self::new(c, c)
    }
}

/**
 * Info about a single range and its relation to another one.
 */

impl CodePointRange {
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if one range ends right before the other one starts.
    pub fn touching(&self, other: &Self) -> bool {
        next_char(self.end) == Some(other.start) || next_char(other.end) == Some(self.start)
    }

    pub fn merge(&self, other: &Self) -> Self {
        Self{ start: min(self.start, other.start), end: max(self.end, other.end) }
    }

    /// The common part of two ranges. The caller has to check that they overlap.
    pub fn intersection(&self, other: &Self) -> Self {
        debug_assert!(self.overlaps(other));
        Self{ start: max(self.start, other.start), end: min(self.end, other.end) }
    }

    pub fn subtract(&self, other: &Self) -> Difference {
        if !self.overlaps(other) {
            return Difference::Single(*self);
        }

        // Both neighbours exist, the subtrahend starts after/ends before us
        let left = if self.start < other.start {
            prev_char(other.start).map(|end| Self{ start: self.start, end })
        }
        else {
            None
        };
        let right = if self.end > other.end {
            next_char(other.end).map(|start| Self{ start, end: self.end })
        }
        else {
            None
        };

        match (left, right) {
            (Some(l), Some(r)) => Difference::Split(l, r),
            (Some(x), None) | (None, Some(x)) => Difference::Single(x),
            (None, None) => Difference::Nothing,
        }
    }
}

impl Difference {
    pub(crate) fn push_into(self, out: &mut Vec<CodePointRange>) {
        match self {
            Difference::Nothing => {},
            Difference::Single(r) => out.push(r),
            Difference::Split(l, r) => {
                out.push(l);
                out.push(r);
            },
        }
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        }
        else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/**
 * Operations on whole range lists.
 */

/// Sorts the list and merges every overlapping or touching pair, repeating
/// until a full pass merges nothing.
pub fn consolidate(ranges: &mut Vec<CodePointRange>) {
    loop {
        ranges.sort_by_key(|r| (r.start, r.end));

        let mut merged = false;
        let mut i = 0;
        while i + 1 < ranges.len() {
            let (a, b) = (ranges[i], ranges[i + 1]);
            if a.overlaps(&b) || a.touching(&b) {
                ranges[i] = a.merge(&b);
                ranges.remove(i + 1);
                merged = true;
            }
            else {
                i += 1;
            }
        }

        if !merged {
            break;
        }
    }
}

/// Sorted by start, disjoint and without touching neighbours.
pub fn is_consolidated(ranges: &[CodePointRange]) -> bool {
    ranges.windows(2).all(|w| {
        w[0].start <= w[1].start && !w[0].overlaps(&w[1]) && !w[0].touching(&w[1])
    })
}

pub fn range_union(a: &[CodePointRange], b: &[CodePointRange]) -> Vec<CodePointRange> {
    let mut result: Vec<_> = a.iter().chain(b.iter()).cloned().collect();
    consolidate(&mut result);
    result
}

pub fn range_intersect(a: &[CodePointRange], b: &[CodePointRange]) -> Vec<CodePointRange> {
    let mut result = Vec::new();
    for ra in a {
        for rb in b {
            if ra.overlaps(rb) {
                result.push(ra.intersection(rb));
            }
        }
    }
    consolidate(&mut result);
    result
}

pub fn range_subtract(a: &[CodePointRange], b: &[CodePointRange]) -> Vec<CodePointRange> {
    let mut result = a.to_vec();
    consolidate(&mut result);

    // Every step strictly shrinks the covered set, so this runs out of overlaps
    loop {
        let mut changed = false;
        let mut next = Vec::with_capacity(result.len());
        for r in result {
            match b.iter().find(|s| r.overlaps(s)) {
                Some(s) => {
                    r.subtract(s).push_into(&mut next);
                    changed = true;
                },
                None => next.push(r),
            }
        }
        result = next;
        if !changed {
            break;
        }
    }

    consolidate(&mut result);
    result
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod range_tests {
    use super::*;

    fn r(start: char, end: char) -> CodePointRange {
        CodePointRange::new(start, end)
    }

    #[test]
    fn construction_swaps_reversed_ends() {
        assert_eq!(r('z', 'a'), CodePointRange{ start: 'a', end: 'z' });
    }

    #[test]
    fn contains_is_inclusive() {
        let range = r('b', 'd');
        assert!(range.contains('b'));
        assert!(range.contains('d'));
        assert!(!range.contains('a'));
        assert!(!range.contains('e'));
    }

    #[test]
    fn touching_is_symmetric() {
        assert!(r('a', 'c').touching(&r('d', 'f')));
        assert!(r('d', 'f').touching(&r('a', 'c')));
        assert!(!r('a', 'c').touching(&r('e', 'f')));
        assert!(!r('a', 'c').touching(&r('c', 'f')));
    }

    #[test]
    fn touching_across_surrogates() {
        assert!(r('\u{D000}', '\u{D7FF}').touching(&r('\u{E000}', '\u{E0FF}')));
    }

    #[test]
    fn subtract_inside_splits() {
        assert_eq!(r('a', 'z').subtract(&r('m', 'o')), Difference::Split(r('a', 'l'), r('p', 'z')));
    }

    #[test]
    fn subtract_left_edge() {
        assert_eq!(r('c', 'z').subtract(&r('a', 'e')), Difference::Single(r('f', 'z')));
    }

    #[test]
    fn subtract_right_edge() {
        assert_eq!(r('a', 'f').subtract(&r('d', 'z')), Difference::Single(r('a', 'c')));
    }

    #[test]
    fn subtract_same_start() {
        assert_eq!(r('a', 'f').subtract(&r('a', 'b')), Difference::Single(r('c', 'f')));
    }

    #[test]
    fn subtract_full_cover() {
        assert_eq!(r('c', 'd').subtract(&r('a', 'z')), Difference::Nothing);
        assert_eq!(r('c', 'd').subtract(&r('c', 'd')), Difference::Nothing);
    }

    #[test]
    fn subtract_disjoint_keeps_range() {
        assert_eq!(r('a', 'c').subtract(&r('x', 'z')), Difference::Single(r('a', 'c')));
    }

    #[test]
    fn consolidate_merges_overlapping_and_touching() {
        let mut ranges = vec![r('x', 'z'), r('a', 'c'), r('d', 'f'), r('b', 'e'), r('m', 'm')];
        consolidate(&mut ranges);
        assert_eq!(ranges, vec![r('a', 'f'), r('m', 'm'), r('x', 'z')]);
        assert!(is_consolidated(&ranges));
    }

    #[test]
    fn consolidate_is_idempotent() {
        let mut ranges = vec![r('k', 'p'), r('0', '9'), r('a', 'l'), r('q', 'q'), r('A', 'Z')];
        consolidate(&mut ranges);
        let once = ranges.clone();
        consolidate(&mut ranges);
        assert_eq!(once, ranges);
    }

    #[test]
    fn intersect_lists() {
        assert_eq!(
            range_intersect(&[r('a', 'f'), r('p', 'z')], &[r('d', 'r')]),
            vec![r('d', 'f'), r('p', 'r')]
        );
    }

    #[test]
    fn subtract_lists() {
        assert_eq!(
            range_subtract(&[r('a', 'z')], &[r('a', 'a'), r('e', 'e'), r('i', 'i'), r('o', 'o'), r('u', 'u')]),
            vec![r('b', 'd'), r('f', 'h'), r('j', 'n'), r('p', 't'), r('v', 'z')]
        );
    }

    #[test]
    fn display_single_and_range() {
        assert_eq!(r('a', 'a').to_string(), "a");
        assert_eq!(r('a', 'z').to_string(), "a-z");
    }
}
