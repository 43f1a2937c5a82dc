/**
 * All of the regex syntax-tree (AST) data-structures.
 */

use rgx_charclass::CharClass;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Choice{
        left: Box<Node>,
        right: Box<Node>,
    },

    Sequence{
        first: Box<Node>,
        second: Box<Node>,
    },

    Quantified{
        subnode: Box<Node>,
        quantifier: Quantifier,
    },

    CharacterClass(CharClass),

    Primitive(char),

    /// `.`
    AnyChar,

    /// `^`
    StartOfInput,

    /// `$`
    EndOfInput,

    /// Matches the empty string; stands in for empty patterns and alternatives.
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    ZeroOrOne,
}

/**
 * Helpers to construct composite nodes.
 */

impl Node {
    pub fn choice(left: Node, right: Node) -> Self {
        Node::Choice{ left: Box::new(left), right: Box::new(right) }
    }

    pub fn sequence(first: Node, second: Node) -> Self {
        Node::Sequence{ first: Box::new(first), second: Box::new(second) }
    }

    pub fn quantified(subnode: Node, quantifier: Quantifier) -> Self {
        Node::Quantified{ subnode: Box::new(subnode), quantifier }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Node::Choice{ left: a, right: b } | Node::Sequence{ first: a, second: b } =>
                1 + a.size() + b.size(),
            Node::Quantified{ subnode, .. } => 1 + subnode.size(),
            _ => 1,
        }
    }
}

impl Quantifier {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Quantifier::ZeroOrMore),
            '+' => Some(Quantifier::OneOrMore),
            '?' => Some(Quantifier::ZeroOrOne),
            _ => None,
        }
    }
}
