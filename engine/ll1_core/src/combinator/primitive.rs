//! Leaf parsers: the only parsers that look at symbols directly.

use crate::input::Input;
use crate::parser::Parser;
use crate::result::{Failure, ParseResult};
use crate::symset::SymSet;
use crate::Symbol;

/// Succeeds without consuming anything.
pub(crate) struct Pure<I, F> {
    make: F,
    first: SymSet<I>,
}

impl<I, F> Pure<I, F> {
    pub(crate) fn new(make: F) -> Self {
        Pure {
            make,
            first: SymSet::empty(),
        }
    }
}

impl<I, A, F> Parser<I, A> for Pure<I, F>
where
    I: Symbol,
    F: Fn() -> A + Send + Sync,
{
    fn accepts_empty(&self) -> bool {
        true
    }

    fn first_set(&self) -> &SymSet<I> {
        &self.first
    }

    fn parse<'a>(&self, input: Input<'a, I>, _follow: &SymSet<I>) -> ParseResult<'a, I, A> {
        ParseResult::success((self.make)(), input)
    }
}

/// Consumes one symbol from a set.
pub(crate) struct Satisfy<I> {
    accepted: SymSet<I>,
}

impl<I> Satisfy<I> {
    pub(crate) fn new(accepted: SymSet<I>) -> Self {
        Satisfy { accepted }
    }
}

impl<I: Symbol> Parser<I, I> for Satisfy<I> {
    fn accepts_empty(&self) -> bool {
        false
    }

    fn first_set(&self) -> &SymSet<I> {
        &self.accepted
    }

    fn parse<'a>(&self, input: Input<'a, I>, _follow: &SymSet<I>) -> ParseResult<'a, I, I> {
        match input.peek() {
            Some(symbol) if self.accepted.matches(symbol) => {
                ParseResult::success(symbol.clone(), input.advance())
            }
            _ => Failure::unexpected(self.accepted.clone(), input).into(),
        }
    }
}

/// Succeeds only at end of input.
pub(crate) struct Eof<I> {
    first: SymSet<I>,
}

impl<I> Eof<I> {
    pub(crate) fn new() -> Self {
        Eof {
            first: SymSet::empty(),
        }
    }
}

impl<I: Symbol> Parser<I, ()> for Eof<I> {
    fn accepts_empty(&self) -> bool {
        true
    }

    fn first_set(&self) -> &SymSet<I> {
        &self.first
    }

    fn parse<'a>(&self, input: Input<'a, I>, _follow: &SymSet<I>) -> ParseResult<'a, I, ()> {
        if input.is_eof() {
            ParseResult::success((), input)
        } else {
            Failure::expected_eof(input).into()
        }
    }
}

/// Never succeeds. Identity element of `or`.
pub(crate) struct Fail<I> {
    first: SymSet<I>,
}

impl<I> Fail<I> {
    pub(crate) fn new() -> Self {
        Fail {
            first: SymSet::empty(),
        }
    }
}

impl<I: Symbol, A> Parser<I, A> for Fail<I> {
    fn accepts_empty(&self) -> bool {
        false
    }

    fn first_set(&self) -> &SymSet<I> {
        &self.first
    }

    fn parse<'a>(&self, input: Input<'a, I>, _follow: &SymSet<I>) -> ParseResult<'a, I, A> {
        Failure::unexpected(SymSet::empty(), input).into()
    }
}
