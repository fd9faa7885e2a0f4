//! Regular expression derivation from a validated automaton.
//!
//! This is Kleene's construction in its dynamic-programming form. The table
//! starts from single transitions (the base layer) and admits one more
//! intermediate state per layer, in index order. After the last layer every
//! entry covers all paths, and the answer is the alternation of the entries
//! from the starting state to each accepting state.
//!
//! The output is deliberately not simplified. It keeps every `eps` and `{}`
//! term the construction introduces.
//!
//! # Example
//!
//! ```rust
//! use fsa2regex::automaton;
//! use fsa2regex::derive::derive_regex;
//! use fsa2regex::validate::validate;
//!
//! let fsa = automaton! {
//!     states: [A, B]
//!     alphabet: [a, b]
//!     initial: [A]
//!     accepting: [B]
//!     transitions: [A > a > A, A > b > B]
//! };
//! let regex = derive_regex(&validate(&fsa).unwrap());
//!
//! assert!(regex.matches(&["a", "a", "b"]));
//! assert!(!regex.matches(&["b", "a"]));
//! ```

mod regex;
mod table;

pub use regex::{Regex, EMPTY_LANGUAGE, EPSILON};
pub use table::{DerivationTable, Layer};

use crate::validate::ValidatedAutomaton;
use std::rc::Rc;
use tracing::debug;

/// Derive the expression for the language of `automaton`.
///
/// With no accepting state the result is the empty language, and the table
/// is never built.
pub fn derive_regex(automaton: &ValidatedAutomaton<'_>) -> Rc<Regex> {
    if automaton.accepting().is_empty() {
        debug!("no accepting states, language is empty");
        return Rc::new(Regex::Empty);
    }

    let table = DerivationTable::build(automaton);
    let last = table.last();
    let start = automaton.start();

    debug!(
        states = automaton.len(),
        accepting = automaton.accepting().len(),
        "derivation table complete"
    );

    Regex::alternation(
        automaton
            .accepting()
            .iter()
            .map(|&accepting| Rc::clone(last.entry(start, accepting)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn empty_accepting_set_is_empty_language() {
        let fsa = crate::automaton! {
            states: [A, B]
            alphabet: [x]
            initial: [A]
            accepting: []
            transitions: [A > x > B]
        };
        let regex = derive_regex(&validate(&fsa).unwrap());

        assert_eq!(regex.to_string(), "{}");
    }

    #[test]
    fn single_state_identity() {
        let fsa = crate::automaton! {
            states: [A]
            alphabet: []
            initial: [A]
            accepting: [A]
            transitions: []
        };
        let regex = derive_regex(&validate(&fsa).unwrap());

        assert_eq!(regex.to_string(), "(eps)(eps)*(eps)|(eps)");
        assert!(regex.matches(&[]));
        assert!(!regex.matches(&["x"]));
    }

    #[test]
    fn two_state_chain_renders_exactly() {
        let fsa = crate::automaton! {
            states: [A, B]
            alphabet: [x]
            initial: [A]
            accepting: [B]
            transitions: [A > x > B]
        };
        let regex = derive_regex(&validate(&fsa).unwrap());

        assert_eq!(
            regex.to_string(),
            "((eps)(eps)*(x)|(x))(({})(eps)*(x)|(eps))*(({})(eps)*(x)|(eps))|((eps)(eps)*(x)|(x))"
        );
        assert!(regex.matches(&["x"]));
        assert!(!regex.matches(&[]));
        assert!(!regex.matches(&["x", "x"]));
    }

    #[test]
    fn accepting_entries_are_joined_in_declaration_order() {
        let fsa = crate::automaton! {
            states: [A]
            alphabet: [a]
            initial: [A]
            accepting: [A, A]
            transitions: [A > a > A]
        };
        let regex = derive_regex(&validate(&fsa).unwrap());
        let single = "(a|eps)(a|eps)*(a|eps)|(a|eps)";

        assert_eq!(regex.to_string(), format!("{single}|{single}"));
    }

    #[test]
    fn start_other_than_first_state() {
        let fsa = crate::automaton! {
            states: [A, B]
            alphabet: [x, y]
            initial: [B]
            accepting: [A]
            transitions: [A > x > B, B > y > A]
        };
        let regex = derive_regex(&validate(&fsa).unwrap());

        assert!(regex.matches(&["y"]));
        assert!(regex.matches(&["y", "x", "y"]));
        assert!(!regex.matches(&["x", "y"]));
        assert!(!regex.matches(&[]));
    }

    #[test]
    fn unreachable_accepting_state_still_renders_entry() {
        // Connectivity starts at B, the first declared state; A cannot reach B.
        let fsa = crate::automaton! {
            states: [B, A]
            alphabet: [x]
            initial: [A]
            accepting: [B]
            transitions: [B > x > A]
        };
        let regex = derive_regex(&validate(&fsa).unwrap());

        assert_ne!(regex.to_string(), "{}");
        assert!(!regex.matches(&[]));
        assert!(!regex.matches(&["x"]));
    }
}
