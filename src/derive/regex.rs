//! Regular expressions produced by the derivation engine.
//!
//! Expressions form a DAG: every table entry points at entries of the
//! previous layer instead of copying them, so building the table costs
//! O(N³) nodes even though the rendered text grows exponentially.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

/// Token for the empty language.
pub const EMPTY_LANGUAGE: &str = "{}";

/// Token for the empty string.
pub const EPSILON: &str = "eps";

/// A regular expression over alphabet labels.
#[derive(Debug)]
pub enum Regex {
    /// Matches nothing. Rendered as `{}`.
    Empty,
    /// Matches only the empty word. Rendered as `eps`.
    Epsilon,
    /// Matches a single alphabet label.
    Symbol(String),
    /// Matches any alternative. Rendered `|`-joined, without parentheses.
    Alt(Vec<Rc<Regex>>),
    /// One elimination step: paths through a pivot state, or around it.
    ///
    /// Matches `into pivot* out`, or `bypass`. Rendered as
    /// `(into)(pivot)*(out)|(bypass)`.
    Eliminate {
        into: Rc<Regex>,
        pivot: Rc<Regex>,
        out: Rc<Regex>,
        bypass: Rc<Regex>,
    },
}

impl Regex {
    pub fn symbol(label: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::Symbol(label.into()))
    }

    /// Alternation of `items`.
    ///
    /// No alternatives gives the empty language and a single alternative is
    /// returned as is.
    pub fn alternation(mut items: Vec<Rc<Self>>) -> Rc<Self> {
        match items.len() {
            0 => Rc::new(Self::Empty),
            1 => items.remove(0),
            _ => Rc::new(Self::Alt(items)),
        }
    }

    pub fn eliminate(into: Rc<Self>, pivot: Rc<Self>, out: Rc<Self>, bypass: Rc<Self>) -> Rc<Self> {
        Rc::new(Self::Eliminate {
            into,
            pivot,
            out,
            bypass,
        })
    }

    /// Test whether `word`, a sequence of labels, belongs to the language.
    ///
    /// ```rust
    /// use fsa2regex::derive::Regex;
    ///
    /// let a = Regex::symbol("a");
    /// let b = Regex::symbol("b");
    /// let eps = std::rc::Rc::new(Regex::Epsilon);
    /// // (eps)(a)*(b)|(b)
    /// let expr = Regex::eliminate(eps, a, b.clone(), b);
    ///
    /// assert!(expr.matches(&["b"]));
    /// assert!(expr.matches(&["a", "a", "b"]));
    /// assert!(!expr.matches(&["a"]));
    /// ```
    pub fn matches(&self, word: &[&str]) -> bool {
        let mut matcher = Matcher {
            word,
            memo: HashMap::new(),
        };
        matcher.ends(self, 0).contains(&word.len())
    }

    /// Number of distinct nodes reachable from this one.
    pub fn node_count(&self) -> usize {
        let mut seen = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if !seen.insert(node as *const Regex) {
                continue;
            }
            match node {
                Self::Empty | Self::Epsilon | Self::Symbol(_) => {}
                Self::Alt(items) => stack.extend(items.iter().map(|item| &**item)),
                Self::Eliminate {
                    into,
                    pivot,
                    out,
                    bypass,
                } => stack.extend([&**into, &**pivot, &**out, &**bypass]),
            }
        }
        seen.len()
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_LANGUAGE),
            Self::Epsilon => f.write_str(EPSILON),
            Self::Symbol(label) => f.write_str(label),
            Self::Alt(items) => {
                for (position, item) in items.iter().enumerate() {
                    if position > 0 {
                        f.write_str("|")?;
                    }
                    item.fmt(f)?;
                }
                Ok(())
            }
            Self::Eliminate {
                into,
                pivot,
                out,
                bypass,
            } => write!(f, "({into})({pivot})*({out})|({bypass})"),
        }
    }
}

type Ends = Rc<BTreeSet<usize>>;

/// Position-set matcher over the expression DAG.
///
/// `ends(node, start)` is the set of positions where a match of `node`
/// beginning at `start` can finish. Results are memoized per shared node.
struct Matcher<'w, 's> {
    word: &'w [&'s str],
    memo: HashMap<(*const Regex, usize), Ends>,
}

impl Matcher<'_, '_> {
    fn ends(&mut self, node: &Regex, start: usize) -> Ends {
        let key = (node as *const Regex, start);
        if let Some(hit) = self.memo.get(&key) {
            return Rc::clone(hit);
        }

        let ends: BTreeSet<usize> = match node {
            Regex::Empty => BTreeSet::new(),
            Regex::Epsilon => BTreeSet::from([start]),
            Regex::Symbol(label) => {
                if self.word.get(start).is_some_and(|w| *w == label.as_str()) {
                    BTreeSet::from([start + 1])
                } else {
                    BTreeSet::new()
                }
            }
            Regex::Alt(items) => {
                let mut ends = BTreeSet::new();
                for item in items {
                    ends.extend(self.ends(item, start).iter().copied());
                }
                ends
            }
            Regex::Eliminate {
                into,
                pivot,
                out,
                bypass,
            } => {
                let mut ends: BTreeSet<usize> = self.ends(bypass, start).iter().copied().collect();
                let entered = self.ends(into, start);
                for &middle in entered.iter() {
                    for looped in self.star_ends(pivot, middle) {
                        ends.extend(self.ends(out, looped).iter().copied());
                    }
                }
                ends
            }
        };

        let ends = Rc::new(ends);
        self.memo.insert(key, Rc::clone(&ends));
        ends
    }

    /// Ends of zero or more repetitions of `node` from `start`.
    fn star_ends(&mut self, node: &Regex, start: usize) -> BTreeSet<usize> {
        let mut reached = BTreeSet::from([start]);
        let mut frontier = vec![start];
        while let Some(position) = frontier.pop() {
            for &next in self.ends(node, position).iter() {
                if reached.insert(next) {
                    frontier.push(next);
                }
            }
        }
        reached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eps() -> Rc<Regex> {
        Rc::new(Regex::Epsilon)
    }

    fn empty() -> Rc<Regex> {
        Rc::new(Regex::Empty)
    }

    #[test]
    fn tokens_render_verbatim() {
        assert_eq!(Regex::Empty.to_string(), "{}");
        assert_eq!(Regex::Epsilon.to_string(), "eps");
        assert_eq!(Regex::symbol("coin").to_string(), "coin");
    }

    #[test]
    fn alternation_renders_without_parentheses() {
        let alt = Regex::alternation(vec![Regex::symbol("a"), Regex::symbol("b"), eps()]);
        assert_eq!(alt.to_string(), "a|b|eps");
    }

    #[test]
    fn alternation_collapses_trivial_cases() {
        assert_eq!(Regex::alternation(vec![]).to_string(), "{}");
        assert_eq!(Regex::alternation(vec![Regex::symbol("a")]).to_string(), "a");
    }

    #[test]
    fn elimination_renders_recurrence_shape() {
        let expr = Regex::eliminate(Regex::symbol("a"), eps(), empty(), Regex::symbol("b"));
        assert_eq!(expr.to_string(), "(a)(eps)*({})|(b)");
    }

    #[test]
    fn empty_matches_nothing() {
        assert!(!Regex::Empty.matches(&[]));
        assert!(!Regex::Empty.matches(&["a"]));
    }

    #[test]
    fn epsilon_matches_only_empty_word() {
        assert!(Regex::Epsilon.matches(&[]));
        assert!(!Regex::Epsilon.matches(&["a"]));
    }

    #[test]
    fn symbols_match_whole_labels() {
        let expr = Regex::symbol("ab");

        assert!(expr.matches(&["ab"]));
        assert!(!expr.matches(&["a", "b"]));
        assert!(!expr.matches(&[]));
    }

    #[test]
    fn elimination_star_repeats_pivot() {
        // (a)(b|eps)*(c)|({})
        let pivot = Regex::alternation(vec![Regex::symbol("b"), eps()]);
        let expr = Regex::eliminate(Regex::symbol("a"), pivot, Regex::symbol("c"), empty());

        assert!(expr.matches(&["a", "c"]));
        assert!(expr.matches(&["a", "b", "b", "b", "c"]));
        assert!(!expr.matches(&["a", "b"]));
        assert!(!expr.matches(&[]));
    }

    #[test]
    fn shared_nodes_are_counted_once() {
        let a = Regex::symbol("a");
        let expr = Regex::eliminate(a.clone(), a.clone(), a.clone(), a);

        assert_eq!(expr.node_count(), 2);
        assert_eq!(expr.to_string(), "(a)(a)*(a)|(a)");
    }
}
