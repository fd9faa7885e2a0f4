//! The automaton as declared.

use super::state::{StateId, StateIndex};
use super::transition::Transition;
use serde::{Deserialize, Serialize};

/// A finite state automaton: states, alphabet, starting and accepting
/// subsets, and labeled transitions.
///
/// The automaton is immutable once built. State names are interned on
/// construction; everything else is kept exactly as declared, including
/// references to states or symbols that do not exist.
///
/// # Example
///
/// ```rust
/// use fsa2regex::core::{Automaton, StateId, Transition};
///
/// let fsa = Automaton::new(
///     vec!["A".into(), "B".into()],
///     vec!["x".into()],
///     vec!["A".into()],
///     vec!["B".into()],
///     vec![Transition::new("A", "x", "B")],
/// );
///
/// assert_eq!(fsa.len(), 2);
/// assert_eq!(fsa.starting_state(), Some("A"));
/// assert_eq!(fsa.state_id("B"), Some(StateId::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "AutomatonRecords", into = "AutomatonRecords")]
pub struct Automaton {
    states: Vec<String>,
    alphabet: Vec<String>,
    starting: Vec<String>,
    accepting: Vec<String>,
    transitions: Vec<Transition>,
    index: StateIndex,
}

/// Serialized form of an [`Automaton`].
///
/// This is the JSON shape accepted and produced by the crate:
///
/// ```json
/// {
///   "states": ["A", "B"],
///   "alphabet": ["x"],
///   "initial": ["A"],
///   "accepting": ["B"],
///   "transitions": [{ "from": "A", "label": "x", "to": "B" }]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomatonRecords {
    pub states: Vec<String>,
    #[serde(default)]
    pub alphabet: Vec<String>,
    #[serde(default)]
    pub initial: Vec<String>,
    #[serde(default)]
    pub accepting: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl Automaton {
    /// Build an automaton from already split lists.
    pub fn new(
        states: Vec<String>,
        alphabet: Vec<String>,
        starting: Vec<String>,
        accepting: Vec<String>,
        transitions: Vec<Transition>,
    ) -> Self {
        let index = StateIndex::new(&states);
        Self {
            states,
            alphabet,
            starting,
            accepting,
            transitions,
            index,
        }
    }

    /// Declared state names, in declaration order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    /// Every declared starting state. Only the first one is used.
    pub fn starting_states(&self) -> &[String] {
        &self.starting
    }

    pub fn accepting_states(&self) -> &[String] {
        &self.accepting
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The designated starting state: the first declared one.
    pub fn starting_state(&self) -> Option<&str> {
        self.starting.first().map(String::as_str)
    }

    /// Resolve a state name to its dense index.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.index.get(name)
    }

    /// Check whether `name` is a declared state.
    pub fn has_state(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Name of the state at `id`.
    pub fn state_name(&self, id: StateId) -> Option<&str> {
        self.states.get(id.index()).map(String::as_str)
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl From<AutomatonRecords> for Automaton {
    fn from(records: AutomatonRecords) -> Self {
        Self::new(
            records.states,
            records.alphabet,
            records.initial,
            records.accepting,
            records.transitions,
        )
    }
}

impl From<Automaton> for AutomatonRecords {
    fn from(automaton: Automaton) -> Self {
        Self {
            states: automaton.states,
            alphabet: automaton.alphabet,
            initial: automaton.starting,
            accepting: automaton.accepting,
            transitions: automaton.transitions,
        }
    }
}
