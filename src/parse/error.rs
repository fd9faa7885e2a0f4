//! Errors raised while reading an automaton description.

use super::Record;
use thiserror::Error;

/// Errors that can occur when splitting the textual description into records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{record} record is missing")]
    MissingRecord { record: Record },

    #[error("{record} record is not a bracketed list")]
    Unbracketed { record: Record },

    #[error("unexpected content on line {line} after the transitions record")]
    TrailingInput { line: usize },

    #[error("transition `{token}` is not of the form from>label>to")]
    MalformedTransition { token: String },
}
