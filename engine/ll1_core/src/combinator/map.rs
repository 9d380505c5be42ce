//! Functor map.

use crate::input::Input;
use crate::parser::{Parser, Rule};
use crate::result::ParseResult;
use crate::symset::SymSet;
use crate::Symbol;

/// Applies `f` to the inner parser's value. Metadata is the inner parser's.
pub(crate) struct Map<I, A, F> {
    inner: Rule<I, A>,
    f: F,
}

impl<I, A, F> Map<I, A, F> {
    pub(crate) fn new(inner: Rule<I, A>, f: F) -> Self {
        Map { inner, f }
    }
}

impl<I, A, B, F> Parser<I, B> for Map<I, A, F>
where
    I: Symbol,
    A: 'static,
    F: Fn(A) -> B + Send + Sync,
{
    #[inline]
    fn accepts_empty(&self) -> bool {
        self.inner.accepts_empty()
    }

    #[inline]
    fn first_set(&self) -> &SymSet<I> {
        self.inner.first_set()
    }

    fn parse<'a>(&self, input: Input<'a, I>, follow: &SymSet<I>) -> ParseResult<'a, I, B> {
        self.inner.parse(input, follow).map(&self.f)
    }
}
