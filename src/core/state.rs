//! Dense state identifiers.
//!
//! States are named by opaque strings in the input. Every name is interned
//! once, when the automaton is built, and the resulting index is used for all
//! array-based bookkeeping afterwards. The name is kept only for reporting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Index of a state in declaration order (`0..N`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(usize);

impl StateId {
    /// Wrap a raw declaration index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw declaration index, for array access.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Name to index map built from a declared state list.
///
/// State names are assumed unique. When a name is declared more than once the
/// first declaration wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateIndex {
    ids: HashMap<String, StateId>,
}

impl StateIndex {
    /// Intern every name in `names`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsa2regex::core::{StateId, StateIndex};
    ///
    /// let names = vec!["q0".to_string(), "q1".to_string()];
    /// let index = StateIndex::new(&names);
    ///
    /// assert_eq!(index.get("q1"), Some(StateId::new(1)));
    /// assert_eq!(index.get("q2"), None);
    /// ```
    pub fn new(names: &[String]) -> Self {
        let mut ids = HashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            ids.entry(name.clone()).or_insert(StateId::new(position));
        }
        Self { ids }
    }

    /// Look up the index of a declared state.
    pub fn get(&self, name: &str) -> Option<StateId> {
        self.ids.get(name).copied()
    }

    /// Check whether `name` was declared.
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
