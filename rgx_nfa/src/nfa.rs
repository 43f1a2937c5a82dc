/**
 * Nondeterministic finite automaton fragments, their Thompson-style
 * combinators and the backtracking matcher running them.
 */

use rgx_charclass::CharClass;
use crate::state::{State, StateId, StateKind, StateSet};

/// An automaton fragment with a single entry and a single exit. The states
/// live in an arena owned by the fragment; combinators absorb the arenas of
/// their operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    entry: StateId,
    exit: StateId,
}

impl Nfa {
    pub fn entry(&self) -> StateId {
        self.entry
    }

    pub fn exit(&self) -> StateId {
        self.exit
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.index()]
    }

    /// Two fresh states, the entry built by `entry_kind` from the exit's id.
    /// The exit is final.
    fn two_states<F>(entry_kind: F) -> Self where F : FnOnce(StateId) -> StateKind {
        let entry = StateId(0);
        let exit = StateId(1);

        let mut exit_state = State::plain();
        exit_state.is_final = true;

        Self{ states: vec![State::new(entry_kind(exit)), exit_state], entry, exit }
    }

    /// Appends the states of `other`, returning its entry and exit as ids in
    /// this arena.
    fn absorb(&mut self, other: Nfa) -> (StateId, StateId) {
        let offset = self.states.len();
        let Nfa{ states, entry, exit } = other;
        self.states.extend(states.into_iter().map(|s| s.shifted(offset)));
        (entry.shifted(offset), exit.shifted(offset))
    }
}

/**
 * Primitive fragments.
 */

impl Nfa {
    pub fn character(c: char) -> Self {
        let mut nfa = Self::two_states(|_| StateKind::Plain);
        let (entry, exit) = (nfa.entry, nfa.exit);
        nfa.state_mut(entry).add_named_edge(c, exit);
        nfa
    }

    pub fn any_character() -> Self {
        Self::two_states(|exit| StateKind::AnyChar{ exit })
    }

    pub fn character_class(class: CharClass) -> Self {
        Self::two_states(move |exit| StateKind::Class{ class, exit })
    }

    /// The range `start..=end`, or everything outside of it when `included`
    /// is false.
    pub fn character_range(start: char, end: char, included: bool) -> Self {
        let class = CharClass::range(start, end);
        if included {
            Self::character_class(class)
        }
        else {
            Self::character_class(CharClass::negate(&class))
        }
    }

    pub fn start_of_string() -> Self {
        Self::two_states(|exit| StateKind::StartOfString{ exit })
    }

    pub fn end_of_string() -> Self {
        Self::two_states(|exit| StateKind::EndOfString{ exit })
    }

    /// Matches the empty string only.
    pub fn empty() -> Self {
        let mut nfa = Self::two_states(|_| StateKind::Plain);
        let (entry, exit) = (nfa.entry, nfa.exit);
        nfa.state_mut(entry).add_anonymous_edge(exit);
        nfa
    }
}

/**
 * Combinators. All of them consume their operands.
 */

impl Nfa {
    pub fn sequence<A, B>(first: A, second: B) -> Self where A : Into<Nfa>, B : Into<Nfa> {
        let mut nfa = first.into();
        let (second_entry, second_exit) = nfa.absorb(second.into());
        let first_exit = nfa.exit;

        nfa.state_mut(first_exit).is_final = false;
        nfa.state_mut(first_exit).add_anonymous_edge(second_entry);
        nfa.state_mut(second_exit).is_final = true;
        nfa.exit = second_exit;
        nfa
    }

    pub fn alternation<A, B>(left: A, right: B) -> Self where A : Into<Nfa>, B : Into<Nfa> {
        let mut nfa = Self::two_states(|_| StateKind::Plain);
        let (entry, exit) = (nfa.entry, nfa.exit);

        let operands: Vec<Nfa> = vec![left.into(), right.into()];
        for operand in operands {
            let (operand_entry, operand_exit) = nfa.absorb(operand);
            nfa.state_mut(operand_exit).is_final = false;
            nfa.state_mut(entry).add_anonymous_edge(operand_entry);
            nfa.state_mut(operand_exit).add_anonymous_edge(exit);
        }

        nfa
    }

    pub fn zero_or_many<A>(operand: A) -> Self where A : Into<Nfa> {
        Self::quantified(operand.into(), true, true)
    }

    pub fn one_or_many<A>(operand: A) -> Self where A : Into<Nfa> {
        Self::quantified(operand.into(), true, false)
    }

    pub fn zero_or_one<A>(operand: A) -> Self where A : Into<Nfa> {
        Self::quantified(operand.into(), false, true)
    }

    /// Wraps the operand between a fresh entry and exit. The loop edge goes
    /// from the operand's exit back to its entry, the skip edge from the new
    /// entry to the new exit, so neither touches states another quantifier
    /// inside the operand already loops on.
    fn quantified(operand: Nfa, loops: bool, skips: bool) -> Self {
        let mut nfa = Self::two_states(|_| StateKind::Plain);
        let (entry, exit) = (nfa.entry, nfa.exit);
        let (operand_entry, operand_exit) = nfa.absorb(operand);

        nfa.state_mut(operand_exit).is_final = false;
        nfa.state_mut(entry).add_anonymous_edge(operand_entry);
        nfa.state_mut(operand_exit).add_anonymous_edge(exit);
        if loops {
            nfa.state_mut(operand_exit).add_anonymous_edge(operand_entry);
        }
        if skips {
            nfa.state_mut(entry).add_anonymous_edge(exit);
        }
        nfa
    }

    /// Chains the items one after the other. No items give `empty()`.
    pub fn sequence_of<I, T>(items: I) -> Self where I : IntoIterator<Item = T>, T : Into<Nfa> {
        items.into_iter().fold(Self::empty(), |acc, item| Self::sequence(acc, item))
    }

    /// Alternates between the items, folding to the left.
    ///
    /// # Panics
    ///
    /// If there are no items.
    pub fn alternation_of<I, T>(items: I) -> Self where I : IntoIterator<Item = T>, T : Into<Nfa> {
        let mut items = items.into_iter();
        let first = match items.next() {
            Some(item) => item.into(),
            None => panic!("alternation needs at least one operand"),
        };
        items.fold(first, |acc, item| Self::alternation(acc, item))
    }

    /// The characters of `text` in sequence.
    pub fn literal(text: &str) -> Self {
        Self::sequence_of(text.chars())
    }
}

impl From<char> for Nfa {
    fn from(c: char) -> Self {
        Self::character(c)
    }
}

impl From<&str> for Nfa {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

/**
 * Matching by recursive backtracking. The visited set holds the states
 * entered at the current input position, so it is emptied whenever a
 * character is consumed; an ε-loop revisiting a state fails that branch.
 */

impl Nfa {
    /// Runs the automaton on `input` from its first character. When
    /// `match_entire_string` is false, reaching a final state is enough.
    pub fn matches(&self, input: &str, match_entire_string: bool) -> bool {
        let chars: Vec<char> = input.chars().collect();
        self.matches_from(&chars, 0, match_entire_string)
    }

    /// Runs the automaton from `start` within `input`. Assertions see
    /// positions relative to the whole input.
    pub fn matches_from(&self, input: &[char], start: usize, match_entire_string: bool) -> bool {
        let mut visited = self.new_visited();
        self.walk(self.entry, input, start, match_entire_string, &mut visited)
    }

    fn new_visited(&self) -> StateSet {
        StateSet::with_capacity(self.states.len())
    }

    fn walk(&self, id: StateId, input: &[char], position: usize, anchored: bool,
        visited: &mut StateSet) -> bool {

        if !visited.insert(id) {
            return false;
        }
        let state = self.state(id);

        match &state.kind {
            StateKind::StartOfString{ exit } =>
                return position == 0 && self.walk(*exit, input, position, anchored, visited),

            StateKind::EndOfString{ exit } =>
                return position == input.len() && self.walk(*exit, input, position, anchored, visited),

            _ => {},
        }

        let c = match input.get(position) {
            Some(c) => *c,
            None => return state.is_final || self.walk_anonymous(state, input, position, anchored, visited),
        };

        for next in state.destinations(c) {
            let mut fresh = self.new_visited();
            if self.walk(*next, input, position + 1, anchored, &mut fresh) {
                return true;
            }
        }

        if self.walk_anonymous(state, input, position, anchored, visited) {
            return true;
        }

        !anchored && state.is_final
    }

    fn walk_anonymous(&self, state: &State, input: &[char], position: usize, anchored: bool,
        visited: &mut StateSet) -> bool {

        state.anonymous.iter().any(|next| self.walk(*next, input, position, anchored, visited))
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
