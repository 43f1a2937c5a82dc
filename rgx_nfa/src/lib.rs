
extern crate rgx_charclass;
extern crate rgx_regex_parse;

mod state;
mod nfa;
mod compile;

pub use state::{StateId, State, StateKind, StateSet};
pub use nfa::Nfa;
pub use compile::compile;
