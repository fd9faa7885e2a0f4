//! fsa2regex: finite state automaton to regular expression conversion
//!
//! A declared automaton (states, alphabet, starting and accepting states,
//! labeled transitions) goes through three pure stages:
//!
//! 1. **Entity model**: the automaton as declared, with state names interned
//!    to dense indices ([`core`]).
//! 2. **Validation**: connectivity, determinism, alphabet and state
//!    membership, and presence of a starting state ([`validate`]).
//! 3. **Derivation**: Kleene's layered construction producing the expression
//!    ([`derive`]).
//!
//! The first violated check aborts the pipeline. Nothing here writes to a
//! user-facing channel; reporting is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use fsa2regex::{automaton, convert};
//!
//! let fsa = automaton! {
//!     states: [A]
//!     alphabet: []
//!     initial: [A]
//!     accepting: [A]
//!     transitions: []
//! };
//!
//! assert_eq!(convert(&fsa).unwrap(), "(eps)(eps)*(eps)|(eps)");
//! ```

pub mod builder;
pub mod core;
pub mod derive;
pub mod error;
pub mod parse;
pub mod validate;

// Re-export commonly used types
pub use crate::core::{Automaton, StateId, Transition};
pub use builder::AutomatonBuilder;
pub use derive::{derive_regex, Regex};
pub use error::ConversionError;
pub use parse::{parse_automaton, ParseError};
pub use validate::{validate, validate_all, ValidatedAutomaton};

use tracing::debug;

/// Convert a declared automaton into a regular expression.
///
/// Runs validation to completion before derivation. Returns `{}` when there
/// are no accepting states.
pub fn convert(automaton: &Automaton) -> Result<String, ConversionError> {
    let validated = validate(automaton)?;
    let regex = derive_regex(&validated).to_string();
    debug!(length = regex.len(), "converted automaton");
    Ok(regex)
}

/// Parse a five-record description and convert it.
///
/// ```rust
/// use fsa2regex::{convert_str, ConversionError};
///
/// let input = "states=[A,B]\nalpha=[x]\ninit.st=[A]\nfin.st=[]\ntrans=[A>x>B]";
/// assert_eq!(convert_str(input).unwrap(), "{}");
///
/// let input = "states=[A,B]\nalpha=[x]\ninit.st=[A]\nfin.st=[]\ntrans=[A>y>B]";
/// assert_eq!(
///     convert_str(input),
///     Err(ConversionError::UnknownSymbol { label: "y".into() })
/// );
/// ```
pub fn convert_str(input: &str) -> Result<String, ConversionError> {
    let automaton = parse_automaton(input)?;
    convert(&automaton)
}
