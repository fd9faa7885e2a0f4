//! Reader for the five-record textual automaton format.
//!
//! The description is five lines, one bracketed, comma-separated list each:
//!
//! ```text
//! states=[q0,q1]
//! alpha=[a,b]
//! initial=[q0]
//! accepting=[q1]
//! trans=[q0>a>q1,q1>b>q0]
//! ```
//!
//! Anything before the opening bracket is ignored. Tokens are taken verbatim
//! between separators; names are opaque, so whitespace is significant.

mod error;

pub use error::ParseError;

use crate::core::{Automaton, Transition};
use std::fmt;
use tracing::debug;

/// The five records of a description, in the order they appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    States,
    Alphabet,
    Initial,
    Accepting,
    Transitions,
}

impl Record {
    /// All records in input order.
    pub const ALL: [Record; 5] = [
        Record::States,
        Record::Alphabet,
        Record::Initial,
        Record::Accepting,
        Record::Transitions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::States => "states",
            Self::Alphabet => "alphabet",
            Self::Initial => "initial",
            Self::Accepting => "accepting",
            Self::Transitions => "transitions",
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split a `prefix[a,b,c]` list into its tokens.
///
/// Returns `None` when the line has no `[` ... `]` pair. An empty list and a
/// single trailing comma both contribute no token.
///
/// ```rust
/// use fsa2regex::parse::split_list;
///
/// assert_eq!(split_list("states=[a,b]"), Some(vec!["a".to_string(), "b".to_string()]));
/// assert_eq!(split_list("[]"), Some(vec![]));
/// assert_eq!(split_list("a,b"), None);
/// ```
pub fn split_list(line: &str) -> Option<Vec<String>> {
    let open = line.find('[')?;
    let close = line.rfind(']')?;
    if close < open {
        return None;
    }

    let mut tokens: Vec<String> = line[open + 1..close].split(',').map(String::from).collect();
    if tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }
    Some(tokens)
}

/// Parse a complete five-record description.
///
/// Blank lines after the transitions record are tolerated; anything else is
/// a [`ParseError::TrailingInput`].
///
/// ```rust
/// use fsa2regex::parse::parse_automaton;
///
/// let fsa = parse_automaton("states=[A,B]\nalpha=[x]\ninit.st=[A]\nfin.st=[B]\ntrans=[A>x>B]\n").unwrap();
///
/// assert_eq!(fsa.states(), ["A", "B"]);
/// assert_eq!(fsa.transitions().len(), 1);
/// ```
pub fn parse_automaton(input: &str) -> Result<Automaton, ParseError> {
    let mut lines = input.lines().map(|line| line.trim_end_matches('\r'));
    let mut read = |record: Record| -> Result<Vec<String>, ParseError> {
        let line = lines.next().ok_or(ParseError::MissingRecord { record })?;
        split_list(line).ok_or(ParseError::Unbracketed { record })
    };

    let states = read(Record::States)?;
    let alphabet = read(Record::Alphabet)?;
    let initial = read(Record::Initial)?;
    let accepting = read(Record::Accepting)?;
    let transition_tokens = read(Record::Transitions)?;

    if let Some(offset) = lines.position(|line| !line.trim().is_empty()) {
        return Err(ParseError::TrailingInput {
            line: Record::ALL.len() + offset + 1,
        });
    }

    let transitions = transition_tokens
        .iter()
        .map(|token| token.parse::<Transition>())
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        states = states.len(),
        symbols = alphabet.len(),
        transitions = transitions.len(),
        "parsed automaton description"
    );

    Ok(Automaton::new(states, alphabet, initial, accepting, transitions))
}
