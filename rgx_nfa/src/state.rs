/**
 * States of the automaton graph and the bitset used to track visits.
 */

use std::collections::BTreeMap;
use rgx_charclass::CharClass;

/// Index of a state inside the arena of its automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) usize);

impl StateId {
    pub fn index(&self) -> usize {
        self.0
    }

    pub(crate) fn shifted(self, offset: usize) -> Self {
        StateId(self.0 + offset)
    }
}

/// What a state does besides following its explicit edges. The specialized
/// kinds decide the consuming step with a predicate instead of the named
/// edge table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateKind {
    Plain,

    /// Consumes any character into `exit`.
    AnyChar{
        exit: StateId,
    },

    /// Consumes the characters of `class` into `exit`.
    Class{
        class: CharClass,
        exit: StateId,
    },

    /// Zero-width, passes to `exit` at position 0 only.
    StartOfString{
        exit: StateId,
    },

    /// Zero-width, passes to `exit` at the end of the input only.
    EndOfString{
        exit: StateId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub kind: StateKind,
    pub named: BTreeMap<char, Vec<StateId>>,
    pub anonymous: Vec<StateId>,
    pub is_final: bool,
}

impl State {
    pub fn new(kind: StateKind) -> Self {
        Self{ kind, named: BTreeMap::new(), anonymous: Vec::new(), is_final: false }
    }

    pub fn plain() -> Self {
        Self::new(StateKind::Plain)
    }

    pub fn add_named_edge(&mut self, c: char, to: StateId) {
        self.named.entry(c).or_insert_with(Vec::new).push(to);
    }

    pub fn add_anonymous_edge(&mut self, to: StateId) {
        self.anonymous.push(to);
    }

    /// The states reachable by consuming `c` from here.
    pub fn destinations(&self, c: char) -> &[StateId] {
        match &self.kind {
            StateKind::Plain => self.named.get(&c).map(Vec::as_slice).unwrap_or(&[]),
            StateKind::AnyChar{ exit } => std::slice::from_ref(exit),
            StateKind::Class{ class, exit } =>
                if class.contains(c) { std::slice::from_ref(exit) } else { &[] },
            StateKind::StartOfString{ .. } | StateKind::EndOfString{ .. } => &[],
        }
    }

    /// Moves every id this state refers to by `offset`, for appending the
    /// state to another arena.
    pub(crate) fn shifted(self, offset: usize) -> Self {
        let kind = match self.kind {
            StateKind::Plain => StateKind::Plain,
            StateKind::AnyChar{ exit } => StateKind::AnyChar{ exit: exit.shifted(offset) },
            StateKind::Class{ class, exit } => StateKind::Class{ class, exit: exit.shifted(offset) },
            StateKind::StartOfString{ exit } => StateKind::StartOfString{ exit: exit.shifted(offset) },
            StateKind::EndOfString{ exit } => StateKind::EndOfString{ exit: exit.shifted(offset) },
        };
        let named = self.named.into_iter()
            .map(|(c, to)| (c, to.into_iter().map(|s| s.shifted(offset)).collect()))
            .collect();
        let anonymous = self.anonymous.into_iter().map(|s| s.shifted(offset)).collect();
        Self{ kind, named, anonymous, is_final: self.is_final }
    }
}

/**
 * A fixed-capacity bitset over state ids.
 */

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateSet {
    words: Vec<u64>,
}

impl StateSet {
    /// A set able to hold the ids `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self{ words: vec![0; (capacity + 63) / 64] }
    }

    /// Adds the id, returning false if it was already present.
    pub fn insert(&mut self, id: StateId) -> bool {
        let (word, bit) = Self::locate(id);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let fresh = self.words[word] & bit == 0;
        self.words[word] |= bit;
        fresh
    }

    fn locate(id: StateId) -> (usize, u64) {
        (id.0 / 64, 1u64 << (id.0 % 64))
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn plain_destinations_follow_named_edges() {
        let mut state = State::plain();
        state.add_named_edge('a', StateId(1));
        state.add_named_edge('a', StateId(2));
        assert_eq!(state.destinations('a'), &[StateId(1), StateId(2)]);
        assert!(state.destinations('b').is_empty());
    }

    #[test]
    fn specialized_destinations() {
        let any = State::new(StateKind::AnyChar{ exit: StateId(3) });
        assert_eq!(any.destinations('x'), &[StateId(3)]);

        let digits = State::new(StateKind::Class{ class: CharClass::digit(), exit: StateId(4) });
        assert_eq!(digits.destinations('7'), &[StateId(4)]);
        assert!(digits.destinations('x').is_empty());

        let start = State::new(StateKind::StartOfString{ exit: StateId(5) });
        assert!(start.destinations('x').is_empty());
    }

    #[test]
    fn shifting_moves_every_reference() {
        let mut state = State::new(StateKind::EndOfString{ exit: StateId(1) });
        state.add_anonymous_edge(StateId(0));
        state.is_final = true;

        let shifted = state.shifted(10);
        assert_eq!(shifted.kind, StateKind::EndOfString{ exit: StateId(11) });
        assert_eq!(shifted.anonymous, vec![StateId(10)]);
        assert!(shifted.is_final);
    }

    #[test]
    fn state_set_insert_reports_membership() {
        let mut set = StateSet::with_capacity(100);
        assert!(set.insert(StateId(0)));
        assert!(set.insert(StateId(64)));
        assert!(!set.insert(StateId(64)));
        assert!(!set.insert(StateId(0)));
        assert!(set.insert(StateId(63)));
    }

    #[test]
    fn state_set_grows_past_capacity() {
        let mut set = StateSet::with_capacity(1);
        assert!(set.insert(StateId(200)));
        assert!(!set.insert(StateId(200)));
        assert_eq!(set.words.len(), 4);
    }
}
