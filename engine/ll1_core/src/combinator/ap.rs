//! Applicative apply: the sequencing primitive.
//!
//! Every sequence in a grammar (`and`, `and_l`, `and_r`, `product`, the
//! apply builders, `many`, `chainl1`) bottoms out here, so this is where the
//! follow set for the left operand is derived from the right operand.

use std::borrow::Cow;

use crate::input::Input;
use crate::memo::Memo;
use crate::parser::{Parser, Rule};
use crate::result::ParseResult;
use crate::symset::SymSet;
use crate::Symbol;

/// Parses a function with `pf`, then its argument with `pa`.
pub(crate) struct Ap<I, F, A> {
    pf: Rule<I, F>,
    pa: Rule<I, A>,
    empty: Memo<bool>,
    first: Memo<SymSet<I>>,
    /// First follow set seen by `parse`, and the left operand's follow set
    /// derived from it.
    follow_cache: Memo<(SymSet<I>, SymSet<I>)>,
}

impl<I, F, A> Ap<I, F, A> {
    pub(crate) fn new(pf: Rule<I, F>, pa: Rule<I, A>) -> Self {
        Ap {
            pf,
            pa,
            empty: Memo::new(),
            first: Memo::new(),
            follow_cache: Memo::new(),
        }
    }
}

impl<I: Symbol, F, A: 'static> Ap<I, F, A> {
    /// What may follow `pf`: `pa`'s first set, plus `follow` when `pa` can
    /// match empty.
    ///
    /// A recursive rule such as `many` reaches the same node with the same
    /// follow set on every iteration, so that union is built once.
    fn follow_f<'s>(&'s self, follow: &'s SymSet<I>) -> Cow<'s, SymSet<I>> {
        let first = self.pa.first_set();
        if !self.pa.accepts_empty() || follow.is_empty() {
            return Cow::Borrowed(first);
        }
        let (seen, combined) = self
            .follow_cache
            .get_or_compute(|| (follow.clone(), first.union(follow)));
        if seen.same_as(follow) {
            Cow::Borrowed(combined)
        } else {
            Cow::Owned(first.union(follow))
        }
    }
}

impl<I, F, A, B> Parser<I, B> for Ap<I, F, A>
where
    I: Symbol,
    F: FnOnce(A) -> B + 'static,
    A: 'static,
{
    fn accepts_empty(&self) -> bool {
        *self
            .empty
            .get_or_compute(|| self.pf.accepts_empty() && self.pa.accepts_empty())
    }

    fn first_set(&self) -> &SymSet<I> {
        // `pa` is only forced when `pf` can match empty; that laziness is
        // what lets a rule mention itself after a non-empty prefix.
        self.first.get_or_compute(|| {
            if self.pf.accepts_empty() {
                self.pf.first_set().union(self.pa.first_set())
            } else {
                self.pf.first_set().clone()
            }
        })
    }

    fn parse<'a>(&self, input: Input<'a, I>, follow: &SymSet<I>) -> ParseResult<'a, I, B> {
        let follow_f = self.follow_f(follow);
        match self.pf.parse(input, &follow_f) {
            ParseResult::Success { value: f, next } => self.pa.parse(next, follow).map(f),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }
}
