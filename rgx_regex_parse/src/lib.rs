/**
 * Syntax trees for regular expressions and the parser producing them.
 */

mod ast;
mod error;
mod parser;

pub use ast::{Node, Quantifier};
pub use error::{ParseError, ParseResult};
pub use parser::parse;
