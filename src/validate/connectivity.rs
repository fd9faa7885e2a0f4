//! Reachability over the transition graph.

use crate::core::{Automaton, StateId};
use crate::error::ConversionError;

/// Mark every state reachable from `origin` along directed transitions.
///
/// Transitions whose endpoints are not declared states are ignored; they are
/// reported separately by the state membership check. The traversal keeps an
/// explicit stack, so depth is bounded by the number of states rather than by
/// the call stack.
pub fn reachable_from(automaton: &Automaton, origin: StateId) -> Vec<bool> {
    let count = automaton.len();
    let mut successors: Vec<Vec<StateId>> = vec![Vec::new(); count];
    for transition in automaton.transitions() {
        if let (Some(from), Some(to)) = (
            automaton.state_id(&transition.from),
            automaton.state_id(&transition.to),
        ) {
            successors[from.index()].push(to);
        }
    }

    let mut visited = vec![false; count];
    if origin.index() >= count {
        return visited;
    }

    visited[origin.index()] = true;
    let mut stack = vec![origin];
    while let Some(state) = stack.pop() {
        for &next in &successors[state.index()] {
            if !visited[next.index()] {
                visited[next.index()] = true;
                stack.push(next);
            }
        }
    }
    visited
}

/// Require every declared state to be reachable from the first declared one.
///
/// This is single-source forward reachability: a state that only has edges
/// pointing *into* the reachable part still fails. An automaton without
/// states is trivially connected.
///
/// Edges target names, not slots. A name declared more than once counts as
/// reached in every slot as soon as an edge from a reached state enters it.
pub fn check_connected(automaton: &Automaton) -> Result<(), ConversionError> {
    if automaton.is_empty() {
        return Ok(());
    }

    let visited = reachable_from(automaton, StateId::new(0));
    let mut entered = vec![false; automaton.len()];
    for transition in automaton.transitions() {
        if let (Some(from), Some(to)) = (
            automaton.state_id(&transition.from),
            automaton.state_id(&transition.to),
        ) {
            if visited[from.index()] {
                entered[to.index()] = true;
            }
        }
    }

    let unreached = automaton.states().iter().skip(1).find(|name| {
        automaton
            .state_id(name)
            .map_or(true, |id| !entered[id.index()])
    });

    match unreached {
        None => Ok(()),
        Some(name) => Err(ConversionError::Disconnected {
            state: name.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;

    fn graph(states: &[&str], edges: &[(&str, &str)]) -> Automaton {
        Automaton::new(
            states.iter().map(|s| s.to_string()).collect(),
            vec!["e".into()],
            states.iter().take(1).map(|s| s.to_string()).collect(),
            vec![],
            edges
                .iter()
                .map(|(from, to)| Transition::new(*from, "e", *to))
                .collect(),
        )
    }

    #[test]
    fn chain_is_connected() {
        let fsa = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert_eq!(check_connected(&fsa), Ok(()));
    }

    #[test]
    fn isolated_state_is_disconnected() {
        let fsa = graph(&["a", "b", "c"], &[("a", "b")]);

        assert_eq!(
            check_connected(&fsa),
            Err(ConversionError::Disconnected { state: "c".into() })
        );
    }

    #[test]
    fn reachability_follows_edge_direction() {
        // c points into the reachable part but nothing reaches c.
        let fsa = graph(&["a", "b", "c"], &[("a", "b"), ("c", "a")]);

        assert!(matches!(
            check_connected(&fsa),
            Err(ConversionError::Disconnected { ref state }) if state == "c"
        ));
    }

    #[test]
    fn traversal_starts_at_first_declared_state() {
        // b reaches a, but traversal starts from a.
        let fsa = graph(&["a", "b"], &[("b", "a")]);
        assert!(check_connected(&fsa).is_err());

        let fsa = graph(&["b", "a"], &[("b", "a")]);
        assert!(check_connected(&fsa).is_ok());
    }

    #[test]
    fn cycles_terminate() {
        let fsa = graph(
            &["a", "b", "c"],
            &[("a", "b"), ("b", "a"), ("b", "c"), ("c", "c")],
        );
        assert_eq!(check_connected(&fsa), Ok(()));
    }

    #[test]
    fn undeclared_endpoints_are_skipped() {
        let fsa = graph(&["a", "b"], &[("a", "ghost"), ("ghost", "b")]);
        assert!(check_connected(&fsa).is_err());
    }

    #[test]
    fn repeated_name_is_reached_in_every_slot() {
        let fsa = graph(&["a", "b", "b"], &[("a", "b")]);
        assert_eq!(check_connected(&fsa), Ok(()));
    }

    #[test]
    fn repeated_first_name_needs_an_incoming_edge() {
        assert_eq!(
            check_connected(&graph(&["a", "a"], &[])),
            Err(ConversionError::Disconnected { state: "a".into() })
        );
        assert_eq!(check_connected(&graph(&["a", "a"], &[("a", "a")])), Ok(()));
    }

    #[test]
    fn single_state_is_connected() {
        assert_eq!(check_connected(&graph(&["only"], &[])), Ok(()));
    }

    #[test]
    fn empty_automaton_is_connected() {
        assert_eq!(check_connected(&graph(&[], &[])), Ok(()));
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let names: Vec<String> = (0..20_000).map(|i| format!("s{i}")).collect();
        let transitions = names
            .windows(2)
            .map(|pair| Transition::new(pair[0].clone(), "e", pair[1].clone()))
            .collect();
        let fsa = Automaton::new(names, vec!["e".into()], vec![], vec![], transitions);

        let visited = reachable_from(&fsa, StateId::new(0));
        assert!(visited.iter().all(|v| *v));
    }
}
