//! Independent well-formedness checks over a declared automaton.
//!
//! Each check reports the first violation it finds, scanning the declared
//! lists in order.

use crate::core::Automaton;
use crate::error::ConversionError;
use std::collections::{HashMap, HashSet};

/// At most one outgoing transition per `(state, label)` pair.
///
/// Two identical transitions count as a violation as well.
pub fn check_deterministic(automaton: &Automaton) -> Result<(), ConversionError> {
    let mut outgoing: HashMap<(&str, &str), usize> = HashMap::new();
    for transition in automaton.transitions() {
        *outgoing
            .entry((transition.from.as_str(), transition.label.as_str()))
            .or_default() += 1;
    }

    let duplicated = automaton
        .transitions()
        .iter()
        .find(|t| outgoing[&(t.from.as_str(), t.label.as_str())] > 1);

    match duplicated {
        None => Ok(()),
        Some(transition) => Err(ConversionError::Nondeterministic {
            state: transition.from.clone(),
            label: transition.label.clone(),
        }),
    }
}

/// Every transition label belongs to the alphabet.
pub fn check_alphabet(automaton: &Automaton) -> Result<(), ConversionError> {
    let alphabet: HashSet<&str> = automaton.alphabet().iter().map(String::as_str).collect();

    match automaton
        .transitions()
        .iter()
        .find(|t| !alphabet.contains(t.label.as_str()))
    {
        None => Ok(()),
        Some(transition) => Err(ConversionError::UnknownSymbol {
            label: transition.label.clone(),
        }),
    }
}

/// Determinism and alphabet membership in one scan over the transitions.
///
/// For each transition in declaration order, a later transition with the same
/// `(state, label)` is reported first; otherwise a label outside the alphabet
/// is reported. This decides which single error surfaces when both kinds of
/// violation are present.
pub fn check_transitions(automaton: &Automaton) -> Result<(), ConversionError> {
    let alphabet: HashSet<&str> = automaton.alphabet().iter().map(String::as_str).collect();
    let mut remaining: HashMap<(&str, &str), usize> = HashMap::new();
    for transition in automaton.transitions() {
        *remaining
            .entry((transition.from.as_str(), transition.label.as_str()))
            .or_default() += 1;
    }

    for transition in automaton.transitions() {
        let key = (transition.from.as_str(), transition.label.as_str());
        if let Some(count) = remaining.get_mut(&key) {
            *count -= 1;
            if *count > 0 {
                return Err(ConversionError::Nondeterministic {
                    state: transition.from.clone(),
                    label: transition.label.clone(),
                });
            }
        }

        if !alphabet.contains(transition.label.as_str()) {
            return Err(ConversionError::UnknownSymbol {
                label: transition.label.clone(),
            });
        }
    }
    Ok(())
}

/// Every state mentioned anywhere is declared.
///
/// Scans transition endpoints (`from` before `to`), then accepting states,
/// then the designated starting state.
pub fn check_states(automaton: &Automaton) -> Result<(), ConversionError> {
    let referenced = automaton
        .transitions()
        .iter()
        .flat_map(|t| [t.from.as_str(), t.to.as_str()])
        .chain(automaton.accepting_states().iter().map(String::as_str))
        .chain(automaton.starting_state());

    for name in referenced {
        if !automaton.has_state(name) {
            return Err(ConversionError::UnknownState {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// At least one starting state is declared.
pub fn check_starting_state(automaton: &Automaton) -> Result<(), ConversionError> {
    match automaton.starting_state() {
        Some(_) => Ok(()),
        None => Err(ConversionError::NoStartingState),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;

    fn fsa(transitions: Vec<Transition>) -> Automaton {
        Automaton::new(
            vec!["p".into(), "q".into()],
            vec!["0".into(), "1".into()],
            vec!["p".into()],
            vec!["q".into()],
            transitions,
        )
    }

    #[test]
    fn distinct_labels_are_deterministic() {
        let automaton = fsa(vec![
            Transition::new("p", "0", "q"),
            Transition::new("p", "1", "p"),
            Transition::new("q", "0", "q"),
        ]);
        assert_eq!(check_deterministic(&automaton), Ok(()));
    }

    #[test]
    fn shared_label_is_nondeterministic() {
        let automaton = fsa(vec![
            Transition::new("p", "0", "q"),
            Transition::new("p", "0", "p"),
        ]);

        assert_eq!(
            check_deterministic(&automaton),
            Err(ConversionError::Nondeterministic {
                state: "p".into(),
                label: "0".into(),
            })
        );
    }

    #[test]
    fn repeated_identical_transition_is_nondeterministic() {
        let automaton = fsa(vec![
            Transition::new("p", "0", "q"),
            Transition::new("p", "0", "q"),
        ]);
        assert!(check_deterministic(&automaton).is_err());
    }

    #[test]
    fn earliest_offending_transition_is_reported() {
        let automaton = fsa(vec![
            Transition::new("q", "1", "p"),
            Transition::new("p", "0", "q"),
            Transition::new("p", "0", "p"),
            Transition::new("q", "1", "q"),
        ]);

        assert!(matches!(
            check_deterministic(&automaton),
            Err(ConversionError::Nondeterministic { ref state, .. }) if state == "q"
        ));
    }

    #[test]
    fn label_outside_alphabet_is_reported() {
        let automaton = fsa(vec![
            Transition::new("p", "0", "q"),
            Transition::new("q", "2", "p"),
        ]);

        assert_eq!(
            check_alphabet(&automaton),
            Err(ConversionError::UnknownSymbol { label: "2".into() })
        );
    }

    #[test]
    fn alphabet_membership_is_exact() {
        let automaton = fsa(vec![Transition::new("p", "01", "q")]);
        assert!(check_alphabet(&automaton).is_err());
    }

    #[test]
    fn earlier_unknown_label_wins_over_later_duplicate() {
        let automaton = fsa(vec![
            Transition::new("p", "2", "q"),
            Transition::new("p", "0", "q"),
            Transition::new("p", "0", "p"),
        ]);

        assert_eq!(
            check_transitions(&automaton),
            Err(ConversionError::UnknownSymbol { label: "2".into() })
        );
    }

    #[test]
    fn earlier_duplicate_wins_over_later_unknown_label() {
        let automaton = fsa(vec![
            Transition::new("p", "0", "q"),
            Transition::new("p", "0", "p"),
            Transition::new("q", "2", "p"),
        ]);

        assert_eq!(
            check_transitions(&automaton),
            Err(ConversionError::Nondeterministic {
                state: "p".into(),
                label: "0".into(),
            })
        );
    }

    #[test]
    fn duplicate_with_unknown_label_is_nondeterministic() {
        let automaton = fsa(vec![
            Transition::new("p", "9", "q"),
            Transition::new("p", "9", "p"),
        ]);

        assert!(matches!(
            check_transitions(&automaton),
            Err(ConversionError::Nondeterministic { .. })
        ));
    }

    #[test]
    fn well_formed_transitions_pass_combined_scan() {
        let automaton = fsa(vec![
            Transition::new("p", "0", "q"),
            Transition::new("p", "1", "p"),
            Transition::new("q", "0", "q"),
        ]);
        assert_eq!(check_transitions(&automaton), Ok(()));
    }

    #[test]
    fn undeclared_transition_source_is_reported() {
        let automaton = fsa(vec![Transition::new("r", "0", "s")]);

        assert_eq!(
            check_states(&automaton),
            Err(ConversionError::UnknownState { name: "r".into() })
        );
    }

    #[test]
    fn undeclared_transition_target_is_reported() {
        let automaton = fsa(vec![Transition::new("p", "0", "s")]);

        assert_eq!(
            check_states(&automaton),
            Err(ConversionError::UnknownState { name: "s".into() })
        );
    }

    #[test]
    fn undeclared_accepting_state_is_reported() {
        let automaton = Automaton::new(
            vec!["p".into()],
            vec![],
            vec!["p".into()],
            vec!["p".into(), "z".into()],
            vec![],
        );

        assert_eq!(
            check_states(&automaton),
            Err(ConversionError::UnknownState { name: "z".into() })
        );
    }

    #[test]
    fn undeclared_starting_state_is_reported() {
        let automaton = Automaton::new(vec!["p".into()], vec![], vec!["s".into()], vec![], vec![]);

        assert_eq!(
            check_states(&automaton),
            Err(ConversionError::UnknownState { name: "s".into() })
        );
    }

    #[test]
    fn only_first_starting_state_is_checked() {
        let automaton = Automaton::new(
            vec!["p".into()],
            vec![],
            vec!["p".into(), "ghost".into()],
            vec![],
            vec![],
        );
        assert_eq!(check_states(&automaton), Ok(()));
    }

    #[test]
    fn missing_starting_state_is_reported() {
        let automaton = Automaton::new(vec!["p".into()], vec![], vec![], vec![], vec![]);

        assert_eq!(
            check_starting_state(&automaton),
            Err(ConversionError::NoStartingState)
        );
    }
}
