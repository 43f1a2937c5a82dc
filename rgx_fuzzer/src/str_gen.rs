/**
 * Input string generation strategies.
 */

use std::ops::Range;
use rgx::{CharClass, Node, Quantifier};
use crate::rnd::*;

pub trait StringGenStrategy {
    fn generate(&self) -> String;
}

/**
 * Random string from a charset.
 */

pub struct RandomStringGenerator {
    len: Range<usize>,
    charset: Vec<char>,
}

impl RandomStringGenerator {
    pub fn with_len_and_charset(len: Range<usize>, charset: &str) -> Self {
        Self{ len, charset: charset.chars().collect() }
    }
}

impl StringGenStrategy for RandomStringGenerator {
    fn generate(&self) -> String {
        rand_string(&self.len, &self.charset)
    }
}

/**
 * Walks the AST of a pattern and spells out one of the strings it describes,
 * so the matchers get inputs that are likely to match.
 */

pub struct PatternStringGenerator {
    ast: Node,
    charset: Vec<char>,
    max_repeat: usize,
}

impl PatternStringGenerator {
    pub fn with_charset(ast: Node, charset: &str, max_repeat: usize) -> Self {
        Self{ ast, charset: charset.chars().collect(), max_repeat }
    }

    fn spell(&self, node: &Node, out: &mut String) {
        match node {
            Node::Choice{ left, right } =>
                self.spell(if chance(50) { left } else { right }, out),

            Node::Sequence{ first, second } => {
                self.spell(first, out);
                self.spell(second, out);
            },

            Node::Quantified{ subnode, quantifier } => {
                let count = match quantifier {
                    Quantifier::ZeroOrMore => rand_range(&(0..(self.max_repeat + 1))),
                    Quantifier::OneOrMore => rand_range(&(1..(self.max_repeat + 1))),
                    Quantifier::ZeroOrOne => rand_range(&(0..2)),
                };
                for _ in 0..count {
                    self.spell(subnode, out);
                }
            },

            Node::CharacterClass(class) => {
                if let Some(c) = self.member_of(class) {
                    out.push(c);
                }
            },

            Node::Primitive(c) => out.push(*c),
            Node::AnyChar => out.push(sample_char(&self.charset)),
            Node::StartOfInput | Node::EndOfInput | Node::Blank => {},
        }
    }

    // A class may have no members inside the charset
    fn member_of(&self, class: &CharClass) -> Option<char> {
        let members: Vec<char> = self.charset.iter().cloned().filter(|c| class.contains(*c)).collect();
        if members.is_empty() {
            None
        }
        else {
            Some(sample_char(&members))
        }
    }
}

impl StringGenStrategy for PatternStringGenerator {
    fn generate(&self) -> String {
        let mut out = String::new();
        self.spell(&self.ast, &mut out);
        out
    }
}

/**
 * Chooses from a collection of strategies and uses that.
 */

pub struct RandomString {
    strats: Vec<Box<dyn StringGenStrategy>>,
}

impl RandomString {
    pub fn new() -> Self {
        Self{ strats: Vec::new() }
    }

    pub fn add<G>(&mut self, g: G) where G : StringGenStrategy + 'static {
        self.strats.push(Box::new(g));
    }
}

impl StringGenStrategy for RandomString {
    fn generate(&self) -> String {
        sample(&self.strats).generate()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
