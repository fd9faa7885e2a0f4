//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the [`automaton!`](crate::automaton)
//! macro for declaring automata in code, as an alternative to the textual
//! format read by [`crate::parse`].

pub mod automaton;
pub mod macros;

pub use automaton::AutomatonBuilder;
