//! Pre-derivation gate for declared automata.
//!
//! Two entry points share the same checks:
//!
//! - [`validate`] stops at the first violation and, on success, resolves the
//!   automaton into a [`ValidatedAutomaton`], the only input the derivation
//!   engine accepts.
//! - [`validate_all`] runs every check and accumulates ALL violations with
//!   Stillwater's `Validation`, for reporting everything in one pass.
//!
//! Checks run in a fixed order, which decides the single error surfaced by
//! [`validate`] when several are violated at once:
//!
//! 1. connectivity from the first declared state
//! 2. one scan over the transitions: for each in turn, a later duplicate
//!    `(state, label)` and then membership of its label in the alphabet
//! 3. membership of every referenced state
//! 4. presence of a starting state
//!
//! [`validate_all`] runs determinism and alphabet membership as two separate
//! checks, so each kind of violation is reported on its own.
//!
//! # Example
//!
//! ```rust
//! use fsa2regex::automaton;
//! use fsa2regex::error::ConversionError;
//! use fsa2regex::validate::validate;
//!
//! let fsa = automaton! {
//!     states: [A, B]
//!     alphabet: [x]
//!     initial: [A]
//!     accepting: [B]
//!     transitions: [A > x > B, A > x > A]
//! };
//!
//! assert!(matches!(
//!     validate(&fsa),
//!     Err(ConversionError::Nondeterministic { .. })
//! ));
//! ```

mod checks;
mod connectivity;

pub use checks::{
    check_alphabet, check_deterministic, check_starting_state, check_states, check_transitions,
};
pub use connectivity::{check_connected, reachable_from};

use crate::core::{Automaton, StateId};
use crate::error::ConversionError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Type alias for a single pre-derivation check.
pub type Check = fn(&Automaton) -> Result<(), ConversionError>;

/// Checks run by [`validate`], in evaluation order.
pub const FAIL_FAST_CHECKS: [Check; 4] = [
    check_connected,
    check_transitions,
    check_states,
    check_starting_state,
];

/// Every independent check, as accumulated by [`validate_all`].
pub const CHECKS: [Check; 5] = [
    check_connected,
    check_deterministic,
    check_alphabet,
    check_states,
    check_starting_state,
];

/// A transition with both endpoints resolved to dense indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<'a> {
    pub from: StateId,
    pub to: StateId,
    pub label: &'a str,
}

/// An automaton that passed every check.
///
/// Holds the resolved starting state, accepting states and edges, so that
/// consumers never look names up again.
#[derive(Clone, Debug)]
pub struct ValidatedAutomaton<'a> {
    automaton: &'a Automaton,
    start: StateId,
    accepting: Vec<StateId>,
    edges: Vec<Edge<'a>>,
}

impl<'a> ValidatedAutomaton<'a> {
    /// The automaton this was validated from.
    pub fn automaton(&self) -> &'a Automaton {
        self.automaton
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.automaton.len()
    }

    pub fn is_empty(&self) -> bool {
        self.automaton.is_empty()
    }

    /// The designated starting state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Accepting states in declaration order, duplicates included.
    pub fn accepting(&self) -> &[StateId] {
        &self.accepting
    }

    /// Transitions in declaration order.
    pub fn edges(&self) -> &[Edge<'a>] {
        &self.edges
    }
}

/// Run every check, stopping at the first violation.
pub fn validate(automaton: &Automaton) -> Result<ValidatedAutomaton<'_>, ConversionError> {
    for check in FAIL_FAST_CHECKS {
        check(automaton)?;
    }
    debug!(states = automaton.len(), "automaton passed validation");
    resolve(automaton)
}

/// Run every check, accumulating ALL violations.
///
/// Each check contributes at most one error.
pub fn validate_all(automaton: &Automaton) -> Validation<(), NonEmptyVec<ConversionError>> {
    let checks: Vec<Validation<(), NonEmptyVec<ConversionError>>> = CHECKS
        .iter()
        .map(|check| match check(automaton) {
            Ok(()) => Validation::success(()),
            Err(error) => Validation::fail(error),
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn resolve(automaton: &Automaton) -> Result<ValidatedAutomaton<'_>, ConversionError> {
    let lookup = |name: &str| {
        automaton
            .state_id(name)
            .ok_or_else(|| ConversionError::UnknownState {
                name: name.to_string(),
            })
    };

    let start = automaton
        .starting_state()
        .ok_or(ConversionError::NoStartingState)
        .and_then(lookup)?;

    let accepting = automaton
        .accepting_states()
        .iter()
        .map(|name| lookup(name.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let edges = automaton
        .transitions()
        .iter()
        .map(|t| {
            Ok(Edge {
                from: lookup(t.from.as_str())?,
                to: lookup(t.to.as_str())?,
                label: t.label.as_str(),
            })
        })
        .collect::<Result<Vec<_>, ConversionError>>()?;

    Ok(ValidatedAutomaton {
        automaton,
        start,
        accepting,
        edges,
    })
}
