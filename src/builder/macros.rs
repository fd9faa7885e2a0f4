//! Macros for declaring automata inline.

/// Declare an [`Automaton`](crate::core::Automaton) with identifier states
/// and labels.
///
/// The five sections must appear in order. Transitions are written
/// `from > label > to`.
///
/// # Example
///
/// ```
/// use fsa2regex::automaton;
///
/// let fsa = automaton! {
///     states: [idle, running]
///     alphabet: [start, stop]
///     initial: [idle]
///     accepting: [idle]
///     transitions: [
///         idle > start > running,
///         running > stop > idle,
///     ]
/// };
///
/// assert_eq!(fsa.len(), 2);
/// assert_eq!(fsa.transitions()[0].to_string(), "idle>start>running");
/// ```
#[macro_export]
macro_rules! automaton {
    (
        states: [$($state:ident),* $(,)?]
        alphabet: [$($symbol:ident),* $(,)?]
        initial: [$($initial:ident),* $(,)?]
        accepting: [$($accepting:ident),* $(,)?]
        transitions: [$($from:ident > $label:ident > $to:ident),* $(,)?]
    ) => {
        $crate::builder::AutomatonBuilder::new()
            $(.state(stringify!($state)))*
            $(.symbol(stringify!($symbol)))*
            $(.starting(stringify!($initial)))*
            $(.accepting(stringify!($accepting)))*
            $(.transition(stringify!($from), stringify!($label), stringify!($to)))*
            .build()
    };
}
