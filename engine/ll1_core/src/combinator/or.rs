//! Predictive alternation.
//!
//! The branch is chosen from one symbol of lookahead, never by trying a
//! branch and rewinding:
//!
//! | Next symbol | Taken |
//! |-------------|-------|
//! | end of input | left if it accepts empty, else right if it does, else fail |
//! | in left first set | left |
//! | in right first set | right |
//! | in follow set | whichever accepts empty, left preferred |
//! | anything else | fail, expecting first set (plus follow set if nullable) |
//!
//! Overlapping first sets are not rejected; the left alternative wins.

use tracing::trace;

use crate::input::Input;
use crate::memo::Memo;
use crate::parser::{Parser, Rule};
use crate::result::{Failure, ParseResult};
use crate::symset::SymSet;
use crate::Symbol;

pub(crate) struct Or<I, A> {
    left: Rule<I, A>,
    right: Rule<I, A>,
    empty: Memo<bool>,
    first: Memo<SymSet<I>>,
}

impl<I, A> Or<I, A> {
    pub(crate) fn new(left: Rule<I, A>, right: Rule<I, A>) -> Self {
        Or {
            left,
            right,
            empty: Memo::new(),
            first: Memo::new(),
        }
    }
}

impl<I: Symbol, A: 'static> Or<I, A> {
    /// The alternative that may match nothing, left first.
    fn empty_branch(&self) -> Option<&Rule<I, A>> {
        if self.left.accepts_empty() {
            Some(&self.left)
        } else if self.right.accepts_empty() {
            Some(&self.right)
        } else {
            None
        }
    }
}

impl<I: Symbol, A: 'static> Parser<I, A> for Or<I, A> {
    fn accepts_empty(&self) -> bool {
        *self
            .empty
            .get_or_compute(|| self.left.accepts_empty() || self.right.accepts_empty())
    }

    fn first_set(&self) -> &SymSet<I> {
        self.first
            .get_or_compute(|| self.left.first_set().union(self.right.first_set()))
    }

    fn parse<'a>(&self, input: Input<'a, I>, follow: &SymSet<I>) -> ParseResult<'a, I, A> {
        let Some(next) = input.peek() else {
            return match self.empty_branch() {
                Some(branch) => branch.parse(input, follow),
                None => Failure::unexpected(self.first_set().clone(), input).into(),
            };
        };

        if self.left.first_set().matches(next) {
            trace!(position = input.position(), "or: left by first set");
            return self.left.parse(input, follow);
        }
        if self.right.first_set().matches(next) {
            trace!(position = input.position(), "or: right by first set");
            return self.right.parse(input, follow);
        }
        if follow.matches(next) {
            if let Some(branch) = self.empty_branch() {
                trace!(position = input.position(), "or: empty branch by follow set");
                return branch.parse(input, follow);
            }
        }
        let expected = SymSet::combine(self.accepts_empty(), self.first_set(), follow);
        Failure::unexpected(expected, input).into()
    }
}
