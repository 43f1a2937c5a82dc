/**
 * A character class is a pair of consolidated range lists (included and
 * excluded ranges) together with a polarity flag.
 */

use std::fmt;
use crate::range::{CodePointRange, consolidate, range_union, range_intersect, range_subtract};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CharClass {
    included: Vec<CodePointRange>,
    excluded: Vec<CodePointRange>,
    negated: bool,
}

/**
 * Constructing a class.
 */

impl CharClass {
    /// The empty class, matching nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(c: char) -> Self {
        Self::range(c, c)
    }

    /// An inclusive range, ends given in any order.
    pub fn range(start: char, end: char) -> Self {
        Self{ included: vec![CodePointRange::new(start, end)], excluded: Vec::new(), negated: false }
    }

    /// Builds a class from arbitrary range lists, consolidating both.
    pub fn from_ranges(
        mut included: Vec<CodePointRange>, mut excluded: Vec<CodePointRange>, negated: bool) -> Self {

        consolidate(&mut included);
        consolidate(&mut excluded);
        Self{ included, excluded, negated }
    }

    pub fn digit() -> Self {
        Self::range('0', '9')
    }

    /// Letters, digits and the dash.
    pub fn word() -> Self {
        Self::union_all(vec![
            Self::range('A', 'Z'),
            Self::range('a', 'z'),
            Self::range('0', '9'),
            Self::single('-'),
        ])
    }

    pub fn whitespace() -> Self {
        Self::union_all(" \t\r\n\x0C".chars().map(Self::single))
    }

    /// The class behind a `\d`-style shortcut letter, uppercase meaning the
    /// complement.
    pub fn shortcut(letter: char) -> Option<Self> {
        match letter {
            'd' => Some(Self::digit()),
            'D' => Some(Self::negate(&Self::digit())),
            'w' => Some(Self::word()),
            'W' => Some(Self::negate(&Self::word())),
            's' => Some(Self::whitespace()),
            'S' => Some(Self::negate(&Self::whitespace())),
            _ => None,
        }
    }
}

/**
 * Observers.
 */

impl CharClass {
    pub fn included(&self) -> &[CodePointRange] {
        &self.included
    }

    pub fn excluded(&self) -> &[CodePointRange] {
        &self.excluded
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn contains(&self, c: char) -> bool {
        let included = self.included.iter().any(|r| r.contains(c));
        let excluded = self.excluded.iter().any(|r| r.contains(c));

        if self.negated {
            !excluded && (included || self.included.is_empty())
        }
        else {
            included && !excluded
        }
    }
}

/**
 * Set algebra. Operands of the same polarity are combined list by list; when
 * the polarities differ the included ranges of the left operand are paired
 * with the excluded ranges of the right one.
 */

impl CharClass {
    pub fn union(a: &Self, b: &Self) -> Self {
        if a.negated == b.negated {
            Self::from_ranges(
                range_union(&a.included, &b.included),
                range_union(&a.excluded, &b.excluded),
                a.negated)
        }
        else {
            Self::from_ranges(a.included.clone(), b.excluded.clone(), true)
        }
    }

    pub fn intersect(a: &Self, b: &Self) -> Self {
        if a.negated == b.negated {
            Self::from_ranges(
                range_intersect(&a.included, &b.included),
                range_intersect(&a.excluded, &b.excluded),
                a.negated)
        }
        else {
            Self::from_ranges(a.included.clone(), b.excluded.clone(), false)
        }
    }

    pub fn subtract(a: &Self, b: &Self) -> Self {
        if a.negated == b.negated {
            Self::from_ranges(
                range_subtract(&a.included, &b.included),
                range_subtract(&a.excluded, &b.excluded),
                a.negated)
        }
        else {
            Self::from_ranges(a.included.clone(), b.excluded.clone(), false)
        }
    }

    /// Flips the polarity, trading the included and excluded lists.
    pub fn negate(a: &Self) -> Self {
        Self{ included: a.excluded.clone(), excluded: a.included.clone(), negated: !a.negated }
    }

    /// Folds `union` over the classes, starting from the empty class.
    pub fn union_all<I>(classes: I) -> Self where I : IntoIterator<Item = Self> {
        classes.into_iter().fold(Self::new(), |acc, c| Self::union(&acc, &c))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in &self.included {
            write!(f, "{}", r)?;
        }
        if !self.excluded.is_empty() {
            write!(f, "&&[^")?;
            for r in &self.excluded {
                write!(f, "{}", r)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
