//! Symbol sets for lookahead decisions.
//!
//! A [`SymSet`] answers one question: could this symbol legally come next?
//! First sets, follow sets, and the "expected" part of a failure are all
//! `SymSet`s. They are never used to consume input.
//!
//! Sets are persistent: [`union`](SymSet::union) and
//! [`combine`](SymSet::combine) build new values that share structure with
//! their operands, so cloning is an `Arc` bump at most.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;

/// A predicate over symbols, built from the empty set, the universal set,
/// single values, named predicates, and unions of those.
///
/// `matches` is pure; building and testing sets has no side effects.
pub struct SymSet<I>(Repr<I>);

enum Repr<I> {
    Empty,
    All,
    Value(I),
    Predicate(Arc<Named<I>>),
    Union(Arc<(SymSet<I>, SymSet<I>)>),
}

struct Named<I> {
    name: Cow<'static, str>,
    test: Box<dyn Fn(&I) -> bool + Send + Sync>,
}

impl<I> SymSet<I> {
    /// The set matching nothing.
    #[inline]
    pub const fn empty() -> Self {
        SymSet(Repr::Empty)
    }

    /// The set matching every symbol.
    #[inline]
    pub const fn all() -> Self {
        SymSet(Repr::All)
    }

    /// The set matching exactly `symbol`.
    #[inline]
    pub const fn value(symbol: I) -> Self {
        SymSet(Repr::Value(symbol))
    }

    /// The set of symbols satisfying `test`, described as `name` in
    /// error messages.
    pub fn predicate(
        name: impl Into<Cow<'static, str>>,
        test: impl Fn(&I) -> bool + Send + Sync + 'static,
    ) -> Self {
        SymSet(Repr::Predicate(Arc::new(Named {
            name: name.into(),
            test: Box::new(test),
        })))
    }

    /// Returns `true` if this is the empty set by construction.
    ///
    /// A predicate that happens to reject everything is not detected.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.0, Repr::Empty)
    }
}

impl<I: PartialEq> SymSet<I> {
    /// Test membership.
    pub fn matches(&self, symbol: &I) -> bool {
        match &self.0 {
            Repr::Empty => false,
            Repr::All => true,
            Repr::Value(value) => value == symbol,
            Repr::Predicate(named) => (named.test)(symbol),
            Repr::Union(pair) => pair.0.matches(symbol) || pair.1.matches(symbol),
        }
    }

    /// Returns `true` if both handles are the same set by construction:
    /// equal leaves, or shared predicate and union nodes.
    ///
    /// Structurally different sets with the same members compare unequal.
    pub fn same_as(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Repr::Empty, Repr::Empty) | (Repr::All, Repr::All) => true,
            (Repr::Value(a), Repr::Value(b)) => a == b,
            (Repr::Predicate(a), Repr::Predicate(b)) => Arc::ptr_eq(a, b),
            (Repr::Union(a), Repr::Union(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<I: Clone> SymSet<I> {
    /// Symbols matched by either set.
    ///
    /// The empty set is the identity and the universal set absorbs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        match (&self.0, &other.0) {
            (Repr::Empty, _) => other.clone(),
            (_, Repr::Empty) => self.clone(),
            (Repr::All, _) | (_, Repr::All) => SymSet::all(),
            _ => SymSet(Repr::Union(Arc::new((self.clone(), other.clone())))),
        }
    }

    /// Lookahead for a parser sequenced before something else.
    ///
    /// If the parser can succeed on empty input, what it may see next is its
    /// own first set plus `follow`; otherwise it is just `first`.
    #[must_use]
    pub fn combine(accepts_empty: bool, first: &Self, follow: &Self) -> Self {
        if accepts_empty {
            first.union(follow)
        } else {
            first.clone()
        }
    }
}

impl<I: fmt::Debug> SymSet<I> {
    /// Human-readable description for error messages.
    ///
    /// Returns "nothing" for the empty set, "'x'" for a single value,
    /// "'a' or 'b'" for two members, and "'a', 'b', or digit" beyond that.
    /// Repeated members are listed once.
    pub fn describe(&self) -> String {
        let mut names = Vec::new();
        let mut seen = FxHashSet::default();
        if self.collect_names(&mut names, &mut seen) {
            return "any symbol".to_string();
        }

        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => single.clone(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }

    /// Walk leaves left to right. Returns `true` if the universal set was hit.
    fn collect_names(&self, names: &mut Vec<String>, seen: &mut FxHashSet<String>) -> bool {
        let name = match &self.0 {
            Repr::Empty => return false,
            Repr::All => return true,
            Repr::Value(value) => format!("{value:?}"),
            Repr::Predicate(named) => named.name.to_string(),
            Repr::Union(pair) => {
                return pair.0.collect_names(names, seen) || pair.1.collect_names(names, seen);
            }
        };
        if seen.insert(name.clone()) {
            names.push(name);
        }
        false
    }
}

impl<I: Clone> Clone for SymSet<I> {
    fn clone(&self) -> Self {
        SymSet(match &self.0 {
            Repr::Empty => Repr::Empty,
            Repr::All => Repr::All,
            Repr::Value(value) => Repr::Value(value.clone()),
            Repr::Predicate(named) => Repr::Predicate(Arc::clone(named)),
            Repr::Union(pair) => Repr::Union(Arc::clone(pair)),
        })
    }
}

impl<I> Default for SymSet<I> {
    fn default() -> Self {
        SymSet::empty()
    }
}

impl<I: fmt::Debug> fmt::Display for SymSet<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl<I: fmt::Debug> fmt::Debug for SymSet<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymSet({})", self.describe())
    }
}
