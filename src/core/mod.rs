//! Entity model for finite state automata.
//!
//! This module contains the immutable in-memory representation of an
//! automaton as it was declared:
//! - State names interned to dense `StateId` indices
//! - Labeled transitions between named states
//! - The `Automaton` itself, with its alphabet and starting/accepting subsets
//!
//! Nothing here checks cross-references between the lists. That is the job
//! of [`crate::validate`].

mod automaton;
mod state;
mod transition;

pub use automaton::{Automaton, AutomatonRecords};
pub use state::{StateId, StateIndex};
pub use transition::{Transition, TRANSITION_SEPARATOR};
