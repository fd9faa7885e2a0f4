//! The layered derivation table.
//!
//! Layer `k` holds, for every ordered pair of states `(i, j)`, an expression
//! for all paths from `i` to `j` whose intermediate states all have index
//! `<= k`. The base layer allows no intermediate state at all.

use super::regex::Regex;
use crate::core::StateId;
use crate::validate::ValidatedAutomaton;
use std::rc::Rc;
use tracing::trace;

/// One `N x N` layer of the table, stored row-major.
#[derive(Clone, Debug)]
pub struct Layer {
    size: usize,
    entries: Vec<Rc<Regex>>,
}

impl Layer {
    /// Build the base layer: single transitions and, on the diagonal, the
    /// empty path.
    ///
    /// Labels on the same pair are alternated in declaration order; `eps`
    /// comes last on the diagonal. Pairs with no transition are `{}`.
    pub fn base(automaton: &ValidatedAutomaton<'_>) -> Self {
        let size = automaton.len();
        let mut labels: Vec<Vec<Rc<Regex>>> = vec![Vec::new(); size * size];
        for edge in automaton.edges() {
            labels[edge.from.index() * size + edge.to.index()].push(Regex::symbol(edge.label));
        }

        let epsilon = Rc::new(Regex::Epsilon);
        for state in 0..size {
            labels[state * size + state].push(Rc::clone(&epsilon));
        }

        Self {
            size,
            entries: labels.into_iter().map(Regex::alternation).collect(),
        }
    }

    /// Number of states this layer covers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Expression for paths from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either id is not below [`Layer::size`]. Use [`Layer::get`]
    /// for ids that did not come from the same automaton.
    pub fn entry(&self, from: StateId, to: StateId) -> &Rc<Regex> {
        &self.entries[from.index() * self.size + to.index()]
    }

    /// Expression for paths from `from` to `to`, or `None` when either id is
    /// out of range.
    pub fn get(&self, from: StateId, to: StateId) -> Option<&Rc<Regex>> {
        if from.index() >= self.size || to.index() >= self.size {
            return None;
        }
        self.entries.get(from.index() * self.size + to.index())
    }

    /// Apply one recurrence step with `pivot` as the newly allowed state:
    ///
    /// `next[i][j] = (self[i][k])(self[k][k])*(self[k][j]) | (self[i][j])`
    ///
    /// The result only means "paths through states `<= k`" when `self` is
    /// the layer for `k - 1`; pivots must be applied in increasing order.
    ///
    /// # Panics
    ///
    /// Panics if `pivot` is not below [`Layer::size`].
    pub fn eliminate(&self, pivot: StateId) -> Self {
        let size = self.size;
        let k = pivot.index();
        let mut entries = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                entries.push(Regex::eliminate(
                    Rc::clone(&self.entries[i * size + k]),
                    Rc::clone(&self.entries[k * size + k]),
                    Rc::clone(&self.entries[k * size + j]),
                    Rc::clone(&self.entries[i * size + j]),
                ));
            }
        }
        Self { size, entries }
    }
}

/// All layers of one derivation, built bottom-up.
///
/// # Example
///
/// ```rust
/// use fsa2regex::automaton;
/// use fsa2regex::core::StateId;
/// use fsa2regex::derive::DerivationTable;
/// use fsa2regex::validate::validate;
///
/// let fsa = automaton! {
///     states: [A, B]
///     alphabet: [x]
///     initial: [A]
///     accepting: [B]
///     transitions: [A > x > B]
/// };
/// let validated = validate(&fsa).unwrap();
///
/// let mut table = DerivationTable::new(&validated);
/// assert_eq!(table.base().entry(StateId::new(0), StateId::new(1)).to_string(), "x");
///
/// while table.extend() {}
/// assert!(table.is_complete());
/// assert_eq!(table.depth(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DerivationTable {
    base: Layer,
    layers: Vec<Layer>,
}

impl DerivationTable {
    /// Start a table holding only the base layer.
    pub fn new(automaton: &ValidatedAutomaton<'_>) -> Self {
        let base = Layer::base(automaton);
        let layers = Vec::with_capacity(base.size());
        Self { base, layers }
    }

    /// Build every layer.
    pub fn build(automaton: &ValidatedAutomaton<'_>) -> Self {
        let mut table = Self::new(automaton);
        while table.extend() {}
        table
    }

    /// Add the layer for the next pivot. Returns `false` once complete.
    pub fn extend(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        let pivot = StateId::new(self.layers.len());
        let next = self.last().eliminate(pivot);
        trace!(pivot = pivot.index(), "derived table layer");
        self.layers.push(next);
        true
    }

    /// Number of states already allowed as intermediates.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.layers.len() == self.base.size()
    }

    /// The layer with no intermediate states.
    pub fn base(&self) -> &Layer {
        &self.base
    }

    /// The layer allowing intermediates `0..=k`, if built yet.
    pub fn layer(&self, k: usize) -> Option<&Layer> {
        self.layers.get(k)
    }

    /// The most recently built layer.
    pub fn last(&self) -> &Layer {
        self.layers.last().unwrap_or(&self.base)
    }
}
