//! Builder for constructing automata.

use crate::core::{Automaton, Transition};
use crate::parse::ParseError;

/// Builder for constructing automata with a fluent API.
///
/// Building never fails: cross-references are checked later by
/// [`crate::validate`].
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: Vec<String>,
    alphabet: Vec<String>,
    starting: Vec<String>,
    accepting: Vec<String>,
    transitions: Vec<Transition>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.states.push(name.into());
        self
    }

    /// Declare several states at once.
    pub fn states<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a symbol to the alphabet.
    pub fn symbol(mut self, label: impl Into<String>) -> Self {
        self.alphabet.push(label.into());
        self
    }

    pub fn alphabet<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.alphabet.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Mark a state as starting. The first one marked is the designated start.
    pub fn starting(mut self, name: impl Into<String>) -> Self {
        self.starting.push(name.into());
        self
    }

    /// Mark a state as accepting.
    pub fn accepting(mut self, name: impl Into<String>) -> Self {
        self.accepting.push(name.into());
        self
    }

    /// Add a transition.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        label: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.transitions.push(Transition::new(from, label, to));
        self
    }

    /// Add a transition from a `from>label>to` token.
    /// Returns an error if the token is malformed.
    pub fn transition_token(mut self, token: &str) -> Result<Self, ParseError> {
        self.transitions.push(token.parse()?);
        Ok(self)
    }

    /// Build the automaton.
    pub fn build(self) -> Automaton {
        Automaton::new(
            self.states,
            self.alphabet,
            self.starting,
            self.accepting,
            self.transitions,
        )
    }
}
