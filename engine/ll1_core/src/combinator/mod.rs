//! Primitive combinators.
//!
//! Everything else in the crate is assembled from these: `pure`, `ap`,
//! `map`, `or`, and the leaves that inspect a single symbol.

mod ap;
mod map;
mod or;
mod primitive;

pub(crate) use map::Map;
pub(crate) use or::Or;

use std::borrow::Cow;

use crate::parser::Rule;
use crate::symset::SymSet;
use crate::Symbol;
use ap::Ap;
use primitive::{Eof, Fail, Pure, Satisfy};

/// Succeed without consuming input, producing a clone of `value`.
pub fn pure<I: Symbol, A>(value: A) -> Rule<I, A>
where
    A: Clone + Send + Sync + 'static,
{
    pure_with(move || value.clone())
}

/// Succeed without consuming input, producing `make()` on every parse.
///
/// For values that are not `Clone`, or that must be fresh each time.
pub fn pure_with<I: Symbol, A: 'static>(
    make: impl Fn() -> A + Send + Sync + 'static,
) -> Rule<I, A> {
    Rule::new(Pure::new(make))
}

/// Applicative apply: parse a function, then its argument, and apply.
pub fn ap<I, A, B, F>(pf: Rule<I, F>, pa: Rule<I, A>) -> Rule<I, B>
where
    I: Symbol,
    A: 'static,
    B: 'static,
    F: FnOnce(A) -> B + 'static,
{
    Rule::new(Ap::new(pf, pa))
}

/// Consume one symbol satisfying `test`, described as `name` in errors.
pub fn satisfy<I: Symbol>(
    name: impl Into<Cow<'static, str>>,
    test: impl Fn(&I) -> bool + Send + Sync + 'static,
) -> Rule<I, I> {
    one_of(SymSet::predicate(name, test))
}

/// Consume one symbol belonging to `set`.
pub fn one_of<I: Symbol>(set: SymSet<I>) -> Rule<I, I> {
    Rule::new(Satisfy::new(set))
}

/// Consume exactly `expected`.
pub fn symbol<I: Symbol>(expected: I) -> Rule<I, I> {
    one_of(SymSet::value(expected))
}

/// Consume exactly `expected`, producing `result` instead of the symbol.
pub fn value<I: Symbol, A>(expected: I, result: A) -> Rule<I, A>
where
    A: Clone + Send + Sync + 'static,
{
    symbol(expected).map(move |_| result.clone())
}

/// Succeed only at end of input.
pub fn eof<I: Symbol>() -> Rule<I, ()> {
    Rule::new(Eof::new())
}

/// Never succeed.
pub fn fail<I: Symbol, A: 'static>() -> Rule<I, A> {
    Rule::new(Fail::new())
}
