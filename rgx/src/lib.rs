/**
 * A backtracking regular-expression engine. Patterns are parsed into an AST,
 * compiled into an NFA once and then matched against any number of inputs.
 */

extern crate rgx_charclass;
extern crate rgx_regex_parse;
extern crate rgx_nfa;

use std::fmt;
use std::str::FromStr;

pub use rgx_charclass::{CharClass, CodePointRange};
pub use rgx_regex_parse::{Node, Quantifier};
pub use rgx_nfa::Nfa;

pub type Error = rgx_regex_parse::ParseError;
pub type Result<T> = std::result::Result<T, Error>;

/// A compiled pattern. Immutable after construction, so it can be shared
/// between threads freely.
#[derive(Debug, Clone)]
pub struct Regex {
    pattern: String,
    ast: Node,
    automaton: Nfa,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Self> {
        let ast = rgx_regex_parse::parse(pattern)?;
        let automaton = rgx_nfa::compile(&ast);
        log::debug!("pattern `{}` compiled into {} states", pattern, automaton.state_count());
        Ok(Self{ pattern: pattern.into(), ast, automaton })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn ast(&self) -> &Node {
        &self.ast
    }

    pub fn automaton(&self) -> &Nfa {
        &self.automaton
    }

    /// Checks if the whole of `input` is in the language of the pattern.
    pub fn is_match_whole_string(&self, input: &str) -> bool {
        log::trace!("matching `{}` against the whole of {:?}", self.pattern, input);
        self.automaton.matches(input, true)
    }

    /// Checks if some substring of `input` is in the language of the pattern.
    /// `^` and `$` still refer to the ends of `input`.
    pub fn is_match_anywhere(&self, input: &str) -> bool {
        log::trace!("matching `{}` anywhere in {:?}", self.pattern, input);
        let chars: Vec<char> = input.chars().collect();
        (0..=chars.len()).any(|start| self.automaton.matches_from(&chars, start, false))
    }

    /// Every character offset at which a match of the pattern begins.
    pub fn match_starts(&self, input: &str) -> Vec<usize> {
        let chars: Vec<char> = input.chars().collect();
        (0..=chars.len())
            .filter(|start| self.automaton.matches_from(&chars, *start, false))
            .collect()
    }
}

impl FromStr for Regex {
    type Err = Error;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
