/**
 * Thompson's-construction of an automaton from a regex AST.
 */

use rgx_regex_parse::{Node, Quantifier};
use crate::nfa::Nfa;

/// Builds the automaton recognizing the language of `node`.
pub fn compile(node: &Node) -> Nfa {
    let mut compiler = NfaCompiler{ stack: Vec::new() };
    compiler.visit(node);
    let nfa = compiler.finish();
    log::debug!("compiled {} AST nodes into {} states", node.size(), nfa.state_count());
    nfa
}

impl From<&Node> for Nfa {
    fn from(node: &Node) -> Self {
        compile(node)
    }
}

/// A postorder walk: leaves push a fragment, composite nodes pop the
/// fragments of their children and push the combined one.
struct NfaCompiler {
    stack: Vec<Nfa>,
}

impl NfaCompiler {
    fn visit(&mut self, node: &Node) {
        match node {
            Node::Choice{ left, right } => {
                self.visit(left);
                self.visit(right);
                let right = self.pop();
                let left = self.pop();
                self.push(Nfa::alternation(left, right));
            },

            Node::Sequence{ first, second } => {
                self.visit(first);
                self.visit(second);
                let second = self.pop();
                let first = self.pop();
                self.push(Nfa::sequence(first, second));
            },

            Node::Quantified{ subnode, quantifier } => {
                self.visit(subnode);
                let subnode = self.pop();
                self.push(match quantifier {
                    Quantifier::ZeroOrMore => Nfa::zero_or_many(subnode),
                    Quantifier::OneOrMore => Nfa::one_or_many(subnode),
                    Quantifier::ZeroOrOne => Nfa::zero_or_one(subnode),
                });
            },

            Node::CharacterClass(class) => self.push(Nfa::character_class(class.clone())),
            Node::Primitive(c) => self.push(Nfa::character(*c)),
            Node::AnyChar => self.push(Nfa::any_character()),
            Node::StartOfInput => self.push(Nfa::start_of_string()),
            Node::EndOfInput => self.push(Nfa::end_of_string()),
            Node::Blank => self.push(Nfa::empty()),
        }
    }

    fn push(&mut self, nfa: Nfa) {
        log::trace!("pushing fragment of {} states, depth {}", nfa.state_count(), self.stack.len() + 1);
        self.stack.push(nfa);
    }

    fn pop(&mut self) -> Nfa {
        self.stack.pop().expect("compiler stack underflow: every composite pushes its children first")
    }

    fn finish(mut self) -> Nfa {
        assert_eq!(self.stack.len(), 1, "exactly one fragment must remain after compilation");
        self.pop()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
