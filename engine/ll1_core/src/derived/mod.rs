//! Combinators built only from the primitives.
//!
//! Repetition is expressed as a recursive rule tied through [`Ref`]:
//! `many(p) = pure([]) | p many(p)`. Because the recursive mention sits
//! after `p`, first sets never force it and the rule is well founded as
//! long as `p` itself cannot match empty input.

use std::collections::VecDeque;

use crate::combinator::{fail, pure_with};
use crate::parser::Rule;
use crate::reference::Ref;
use crate::Symbol;

/// Zero or more `p`.
///
/// `p` must not accept empty input; the repetition would have no way to
/// stop.
pub fn many<I: Symbol, A: 'static>(p: Rule<I, A>) -> Rule<I, Vec<A>> {
    let rest = Ref::named("many");
    let more = p.and(rest.forward()).map(|head, mut tail: VecDeque<A>| {
        tail.push_front(head);
        tail
    });
    rest.set(pure_with(VecDeque::new).or(more));
    rest.into_rule().map(Vec::from)
}

/// One or more `p`.
pub fn many1<I: Symbol, A: 'static>(p: Rule<I, A>) -> Rule<I, Vec<A>> {
    p.and(many(p.clone())).map(|head, mut tail| {
        tail.insert(0, head);
        tail
    })
}

/// Zero or more `p`, discarding the values.
pub fn skip_many<I: Symbol, A: 'static>(p: Rule<I, A>) -> Rule<I, ()> {
    let rest = Ref::named("skip_many");
    let more = p.and_r(rest.forward());
    rest.set(pure_with(|| ()).or(more));
    rest.into_rule()
}

/// One or more `p` separated by `sep`.
pub fn sep_by1<I: Symbol, A: 'static, S: 'static>(
    p: Rule<I, A>,
    sep: Rule<I, S>,
) -> Rule<I, Vec<A>> {
    p.and(many(sep.and_r(p.clone()))).map(|head, mut tail| {
        tail.insert(0, head);
        tail
    })
}

/// Zero or more `p` separated by `sep`.
pub fn sep_by<I: Symbol, A: 'static, S: 'static>(
    p: Rule<I, A>,
    sep: Rule<I, S>,
) -> Rule<I, Vec<A>> {
    sep_by1(p, sep).or(pure_with(Vec::new))
}

/// `p` enclosed by `open` and `close`, keeping only `p`'s value.
pub fn between<I, O, A, C>(open: Rule<I, O>, p: Rule<I, A>, close: Rule<I, C>) -> Rule<I, A>
where
    I: Symbol,
    O: 'static,
    A: 'static,
    C: 'static,
{
    open.and_r(p).and_l(close)
}

/// Predictive choice among any number of alternatives, earlier ones
/// preferred. With no alternatives, never succeeds.
pub fn choice<I: Symbol, A: 'static>(
    alternatives: impl IntoIterator<Item = Rule<I, A>>,
) -> Rule<I, A> {
    let mut alternatives = alternatives.into_iter();
    match alternatives.next() {
        Some(first) => alternatives.fold(first, |acc, next| acc.or(next)),
        None => fail(),
    }
}

/// `p` or nothing.
pub fn opt<I: Symbol, A: 'static>(p: Rule<I, A>) -> Rule<I, Option<A>> {
    p.map(Some).or(pure_with(|| None))
}

#[cfg(test)]
mod tests;
