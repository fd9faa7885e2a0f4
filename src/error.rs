//! Errors reported by the conversion pipeline.

use crate::parse::ParseError;
use thiserror::Error;

/// Reasons an automaton cannot be converted.
///
/// Every variant is a user-facing condition detected before derivation
/// starts. The derivation engine itself never fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Input file is malformed: {0}")]
    MalformedInput(#[from] ParseError),

    #[error("A state {name} is not in set of states")]
    UnknownState { name: String },

    #[error("Some states are disjoint (state {state} is unreachable)")]
    Disconnected { state: String },

    #[error("Transition {label} is not represented in the alphabet")]
    UnknownSymbol { label: String },

    #[error("Starting state is not defined")]
    NoStartingState,

    #[error("FSA is nondeterministic (state {state} has several transitions on {label})")]
    Nondeterministic { state: String, label: String },
}

impl ConversionError {
    /// Short stable code for the error kind (`E0` to `E5`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "E0",
            Self::UnknownState { .. } => "E1",
            Self::Disconnected { .. } => "E2",
            Self::UnknownSymbol { .. } => "E3",
            Self::NoStartingState => "E4",
            Self::Nondeterministic { .. } => "E5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_kind() {
        let errors = [
            ConversionError::MalformedInput(ParseError::TrailingInput { line: 6 }),
            ConversionError::UnknownState { name: "q".into() },
            ConversionError::Disconnected { state: "q".into() },
            ConversionError::UnknownSymbol { label: "z".into() },
            ConversionError::NoStartingState,
            ConversionError::Nondeterministic {
                state: "q".into(),
                label: "z".into(),
            },
        ];
        let codes: Vec<_> = errors.iter().map(ConversionError::code).collect();

        assert_eq!(codes, ["E0", "E1", "E2", "E3", "E4", "E5"]);
    }

    #[test]
    fn messages_carry_offending_names() {
        let unknown = ConversionError::UnknownState { name: "q9".into() };
        let symbol = ConversionError::UnknownSymbol { label: "z".into() };

        assert_eq!(unknown.to_string(), "A state q9 is not in set of states");
        assert_eq!(
            symbol.to_string(),
            "Transition z is not represented in the alphabet"
        );
    }

    #[test]
    fn parse_errors_convert_to_malformed_input() {
        let err: ConversionError = ParseError::MalformedTransition {
            token: "a>b".into(),
        }
        .into();

        assert!(matches!(err, ConversionError::MalformedInput(_)));
        assert!(err.to_string().starts_with("Input file is malformed"));
    }
}
