//! Labeled transitions between named states.

use crate::parse::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the fields of a `from>label>to` token.
pub const TRANSITION_SEPARATOR: char = '>';

/// A move from one state to another on a single alphabet symbol.
///
/// Endpoints are kept as declared names; they are resolved to `StateId`s only
/// once the automaton has been validated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned from
    pub from: String,
    /// The alphabet symbol consumed
    pub label: String,
    /// The state being transitioned to
    pub to: String,
}

impl Transition {
    pub fn new(from: impl Into<String>, label: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            label: label.into(),
            to: to.into(),
        }
    }

    /// Whether this transition starts and ends in the same state.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl FromStr for Transition {
    type Err = ParseError;

    /// Parse a `from>label>to` token.
    ///
    /// The token must split into exactly three non-empty fields.
    ///
    /// ```rust
    /// use fsa2regex::core::Transition;
    ///
    /// let t: Transition = "q0>a>q1".parse().unwrap();
    /// assert_eq!(t, Transition::new("q0", "a", "q1"));
    ///
    /// assert!("q0>a".parse::<Transition>().is_err());
    /// assert!("q0>a>b>q1".parse::<Transition>().is_err());
    /// ```
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = token.split(TRANSITION_SEPARATOR).collect();
        match fields.as_slice() {
            [from, label, to] if !from.is_empty() && !label.is_empty() && !to.is_empty() => {
                Ok(Self::new(*from, *label, *to))
            }
            _ => Err(ParseError::MalformedTransition {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.from,
            self.label,
            self.to,
            sep = TRANSITION_SEPARATOR
        )
    }
}
