/**
 * Pattern generation strategies. Only the syntax shared with the `regex`
 * crate is produced, so both engines can be asked the same question.
 */

use crate::rnd::*;

pub trait PatternStrategy {
    /// A pattern at most `depth` levels deep. Subpatterns are requested from
    /// `sub`.
    fn make_pattern(&self, depth: usize, sub: &dyn PatternStrategy) -> String;

    /// Leaves never ask for subpatterns.
    fn is_leaf(&self) -> bool {
        false
    }
}

/**
 * Leaves.
 */

/// A single character from the charset.
pub struct LiteralPattern {
    charset: Vec<char>,
}

impl LiteralPattern {
    pub fn with_charset(charset: &str) -> Self {
        Self{ charset: charset.chars().collect() }
    }
}

impl PatternStrategy for LiteralPattern {
    fn make_pattern(&self, _depth: usize, _sub: &dyn PatternStrategy) -> String {
        sample_char(&self.charset).to_string()
    }

    fn is_leaf(&self) -> bool {
        true
    }
}

/// A bracketed class of characters and ranges, sometimes negated.
pub struct ClassPattern {
    charset: Vec<char>,
}

impl ClassPattern {
    pub fn with_charset(charset: &str) -> Self {
        let mut charset: Vec<char> = charset.chars().collect();
        charset.sort();
        Self{ charset }
    }
}

impl PatternStrategy for ClassPattern {
    fn make_pattern(&self, _depth: usize, _sub: &dyn PatternStrategy) -> String {
        let mut result = String::from("[");
        if chance(25) {
            result.push('^');
        }
        for _ in 0..rand_range(&(1..3)) {
            let start = rand_range(&(0..self.charset.len()));
            if chance(50) {
                let end = rand_range(&(start..self.charset.len()));
                result.push(self.charset[start]);
                result.push('-');
                result.push(self.charset[end]);
            }
            else {
                result.push(self.charset[start]);
            }
        }
        result.push(']');
        result
    }

    fn is_leaf(&self) -> bool {
        true
    }
}

/// `.`, `^` or `$`.
pub struct MetaPattern { }

impl MetaPattern {
    pub fn new() -> Self {
        Self{ }
    }
}

impl PatternStrategy for MetaPattern {
    fn make_pattern(&self, _depth: usize, _sub: &dyn PatternStrategy) -> String {
        sample(&[".", ".", "^", "$"]).to_string()
    }

    fn is_leaf(&self) -> bool {
        true
    }
}

/**
 * Composites. Everything below the top is grouped, so quantifiers never
 * stack.
 */

pub struct SequencePattern { }

impl SequencePattern {
    pub fn new() -> Self {
        Self{ }
    }
}

impl PatternStrategy for SequencePattern {
    fn make_pattern(&self, depth: usize, sub: &dyn PatternStrategy) -> String {
        (0..rand_range(&(2..4))).map(|_| sub.make_pattern(depth - 1, sub)).collect()
    }
}

pub struct AlternationPattern { }

impl AlternationPattern {
    pub fn new() -> Self {
        Self{ }
    }
}

impl PatternStrategy for AlternationPattern {
    fn make_pattern(&self, depth: usize, sub: &dyn PatternStrategy) -> String {
        // An empty alternative now and then
        let left = if chance(10) { String::new() } else { sub.make_pattern(depth - 1, sub) };
        let right = sub.make_pattern(depth - 1, sub);
        format!("({}|{})", left, right)
    }
}

pub struct RepetitionPattern { }

impl RepetitionPattern {
    pub fn new() -> Self {
        Self{ }
    }
}

impl PatternStrategy for RepetitionPattern {
    fn make_pattern(&self, depth: usize, sub: &dyn PatternStrategy) -> String {
        format!("({}){}", sub.make_pattern(depth - 1, sub), sample(&['*', '+', '?']))
    }
}

/**
 * Chooses from a collection of strategies and uses that. Once the depth runs
 * out only leaves are chosen.
 */

pub struct RandomPattern {
    strats: Vec<Box<dyn PatternStrategy>>,
}

impl RandomPattern {
    pub fn new() -> Self {
        Self{ strats: Vec::new() }
    }

    pub fn add<G>(&mut self, g: G) where G : PatternStrategy + 'static {
        self.strats.push(Box::new(g));
    }

    /// A full pattern of at most `depth` levels.
    pub fn generate(&self, depth: usize) -> String {
        self.make_pattern(depth, self)
    }
}

impl PatternStrategy for RandomPattern {
    fn make_pattern(&self, depth: usize, _sub: &dyn PatternStrategy) -> String {
        let candidates: Vec<&Box<dyn PatternStrategy>> =
            self.strats.iter().filter(|s| depth > 0 || s.is_leaf()).collect();
        sample(&candidates).make_pattern(depth, self)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
