//! The parser abstraction and its shareable handle.
//!
//! A [`Parser`] exposes three facets: whether it can succeed without
//! consuming input, the set of symbols it can start with, and `parse`
//! itself. Grammars are graphs of parsers held through [`Rule`], a cheap,
//! cloneable, thread-safe handle; every combinator method lives on `Rule`.

use std::sync::Arc;

use tracing::debug;

use crate::apply::ApplyBuilder2;
use crate::combinator::{ap, Map, Or};
use crate::derived::{many, opt};
use crate::input::Input;
use crate::reference::Ref;
use crate::result::{Failure, ParseResult};
use crate::symset::SymSet;
use crate::Symbol;

/// A predictive parser over symbols `I` producing values `A`.
///
/// `accepts_empty` and `first_set` must be pure functions of the grammar:
/// once every [`Ref`] is bound they never change, and implementations cache
/// them.
///
/// `parse` receives the follow set: the symbols that may legally appear
/// after this parser finishes. It is consulted only when deciding whether
/// an empty match is acceptable.
pub trait Parser<I, A>: Send + Sync {
    /// Returns `true` if this parser can succeed without consuming input.
    fn accepts_empty(&self) -> bool;

    /// Symbols this parser can start with.
    fn first_set(&self) -> &SymSet<I>;

    /// Parse at `input`, given what may follow.
    fn parse<'a>(&self, input: Input<'a, I>, follow: &SymSet<I>) -> ParseResult<'a, I, A>;
}

/// Shared handle to a parser.
///
/// Cloning bumps a reference count; the underlying node is immutable and
/// may be used from many threads and many grammars at once.
pub struct Rule<I, A> {
    inner: Arc<dyn Parser<I, A>>,
}

impl<I, A> Rule<I, A> {
    /// Wrap a parser implementation.
    pub fn new(parser: impl Parser<I, A> + 'static) -> Self {
        Rule {
            inner: Arc::new(parser),
        }
    }
}

impl<I, A> Clone for Rule<I, A> {
    #[inline]
    fn clone(&self) -> Self {
        Rule {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I, A> Parser<I, A> for Rule<I, A> {
    #[inline]
    fn accepts_empty(&self) -> bool {
        self.inner.accepts_empty()
    }

    #[inline]
    fn first_set(&self) -> &SymSet<I> {
        self.inner.first_set()
    }

    #[inline]
    fn parse<'a>(&self, input: Input<'a, I>, follow: &SymSet<I>) -> ParseResult<'a, I, A> {
        self.inner.parse(input, follow)
    }
}

impl<I: Symbol, A: 'static> Rule<I, A> {
    /// Transform the parsed value.
    pub fn map<B: 'static>(&self, f: impl Fn(A) -> B + Send + Sync + 'static) -> Rule<I, B> {
        Rule::new(Map::new(self.clone(), f))
    }

    /// Predictive choice between `self` and `other`, decided by one symbol
    /// of lookahead. `self` wins where the two overlap.
    pub fn or(&self, other: Rule<I, A>) -> Rule<I, A> {
        Rule::new(Or::new(self.clone(), other))
    }

    /// Sequence `self` then `other`; finish with `map` or `tuple`, or keep
    /// chaining with `and`.
    pub fn and<B: 'static>(&self, other: Rule<I, B>) -> ApplyBuilder2<I, A, B> {
        ApplyBuilder2::new(self.clone(), other)
    }

    /// Sequence `self` then `other`, keeping both values.
    pub fn product<B: 'static>(&self, other: Rule<I, B>) -> Rule<I, (A, B)> {
        self.and(other).tuple()
    }

    /// Sequence `self` then `other`, keeping the left value.
    pub fn and_l<B: 'static>(&self, other: Rule<I, B>) -> Rule<I, A> {
        ap(self.map(|a: A| move |_: B| a), other)
    }

    /// Sequence `self` then `other`, keeping the right value.
    pub fn and_r<B: 'static>(&self, other: Rule<I, B>) -> Rule<I, B> {
        ap(self.map(|_: A| |b: B| b), other)
    }

    /// One or more `self` separated by `op`, folded to the left.
    ///
    /// `1-2-3` parses as `(1-2)-3`.
    pub fn chainl1<O>(&self, op: Rule<I, O>) -> Rule<I, A>
    where
        O: Fn(A, A) -> A + 'static,
    {
        let step = op
            .and(self.clone())
            .map(|f: O, y: A| move |x: A| f(x, y));
        self.and(many(step))
            .map(|first, steps| steps.into_iter().fold(first, |acc, step| step(acc)))
    }

    /// One or more `self` separated by `op`, folded to the right.
    ///
    /// `2^3^2` parses as `2^(3^2)`.
    pub fn chainr1<O>(&self, op: Rule<I, O>) -> Rule<I, A>
    where
        O: Fn(A, A) -> A + 'static,
    {
        let chain = Ref::named("chainr1");
        let tail = op
            .and(chain.forward())
            .map(|f: O, y: A| move |x: A| f(x, y));
        chain.set(self.and(opt(tail)).map(|x, tail| match tail {
            Some(apply) => apply(x),
            None => x,
        }));
        chain.into_rule()
    }

    /// Parse at `input` with nothing expected afterwards.
    ///
    /// Unlike [`run`](Self::run), trailing input is left unconsumed.
    pub fn parse_from<'a>(&self, input: Input<'a, I>) -> ParseResult<'a, I, A> {
        self.parse(input, &SymSet::empty())
    }

    /// Parse the whole of `input`.
    ///
    /// Equivalent to `self.and_l(eof())` parsed with an empty follow set,
    /// except that an input this rule cannot start with is rejected before
    /// descending into the grammar.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn run<'a>(&self, input: Input<'a, I>) -> ParseResult<'a, I, A> {
        if !self.accepts_empty() {
            let startable = input
                .peek()
                .is_some_and(|next| self.first_set().matches(next));
            if !startable {
                debug!(position = input.position(), "rejected before descent");
                return Failure::unexpected(self.first_set().clone(), input).into();
            }
        }

        let outcome = self.parse_from(input).and_then(|value, next| {
            if next.is_eof() {
                ParseResult::success(value, next)
            } else {
                Failure::expected_eof(next).into()
            }
        });
        debug!(
            success = outcome.is_success(),
            position = outcome.position(),
            "run finished"
        );
        outcome
    }
}

#[cfg(test)]
mod tests;
