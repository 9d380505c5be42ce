//! Outcome of a parse attempt.
//!
//! | Variant | Carries | Meaning |
//! |---------|---------|---------|
//! | `Success` | value, next input | matched; `next` is where the caller resumes |
//! | `Failure` | expected, input | no match at `input`'s position |
//!
//! [`Failure`] has no value type parameter, so a failure produced by a
//! `Parser<I, A>` is returned unchanged by an enclosing `Parser<I, B>`
//! through `From`/`?`-style rewrapping, keeping its position and
//! description.

use std::fmt;

use crate::error::ParseError;
use crate::input::Input;
use crate::symset::SymSet;

/// What a failed parse wanted to see.
pub enum Expected<I> {
    /// One of the symbols in the set.
    Symbols(SymSet<I>),
    /// The end of the input.
    EndOfInput,
}

impl<I: fmt::Debug> Expected<I> {
    /// Human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self {
            Expected::Symbols(set) => set.describe(),
            Expected::EndOfInput => "end of input".to_string(),
        }
    }
}

impl<I: Clone> Clone for Expected<I> {
    fn clone(&self) -> Self {
        match self {
            Expected::Symbols(set) => Expected::Symbols(set.clone()),
            Expected::EndOfInput => Expected::EndOfInput,
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for Expected<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Symbols(set) => f.debug_tuple("Symbols").field(set).finish(),
            Expected::EndOfInput => f.write_str("EndOfInput"),
        }
    }
}

/// A parse that did not match.
pub struct Failure<'a, I> {
    expected: Expected<I>,
    at: Input<'a, I>,
}

impl<'a, I> Failure<'a, I> {
    /// Create a failure at `at`.
    #[cold]
    pub fn new(expected: Expected<I>, at: Input<'a, I>) -> Self {
        Failure { expected, at }
    }

    /// Create a failure expecting one of `expected` at `at`.
    #[cold]
    pub fn unexpected(expected: SymSet<I>, at: Input<'a, I>) -> Self {
        Failure::new(Expected::Symbols(expected), at)
    }

    /// Create a failure expecting the end of input at `at`.
    #[cold]
    pub fn expected_eof(at: Input<'a, I>) -> Self {
        Failure::new(Expected::EndOfInput, at)
    }

    /// What would have been accepted.
    #[inline]
    pub fn expected(&self) -> &Expected<I> {
        &self.expected
    }

    /// The input at the point of failure.
    #[inline]
    pub fn input(&self) -> Input<'a, I> {
        self.at
    }

    /// Index of the offending symbol.
    #[inline]
    pub fn position(&self) -> usize {
        self.at.position()
    }

    /// The offending symbol, or `None` if the input ran out.
    #[inline]
    pub fn found(&self) -> Option<&'a I> {
        self.at.peek()
    }

    /// Returns `true` if the input ended where more was required.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.at.is_eof()
    }
}

impl<I: fmt::Debug> Failure<'_, I> {
    /// Detach from the input, rendering symbols for display.
    pub fn to_error(&self) -> ParseError {
        ParseError {
            position: self.position(),
            found: self.found().map(|symbol| format!("{symbol:?}")),
            expected: self.expected.describe(),
        }
    }
}

impl<I: Clone> Clone for Failure<'_, I> {
    fn clone(&self) -> Self {
        Failure {
            expected: self.expected.clone(),
            at: self.at,
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for Failure<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("expected", &self.expected)
            .field("position", &self.position())
            .field("found", &self.found())
            .finish()
    }
}

impl<I: fmt::Debug> fmt::Display for Failure<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_error(), f)
    }
}

/// Tagged outcome of running a parser: exactly one variant is active.
pub enum ParseResult<'a, I, A> {
    /// Matched, producing `value`; parsing resumes at `next`.
    Success { value: A, next: Input<'a, I> },
    /// Did not match.
    Failure(Failure<'a, I>),
}

impl<'a, I, A> ParseResult<'a, I, A> {
    /// Create a success resuming at `next`.
    #[inline]
    pub fn success(value: A, next: Input<'a, I>) -> Self {
        ParseResult::Success { value, next }
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Transform the success value; failures pass through unchanged.
    #[inline]
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> ParseResult<'a, I, B> {
        match self {
            ParseResult::Success { value, next } => ParseResult::Success {
                value: f(value),
                next,
            },
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    /// Continue from a success with another parse step.
    #[inline]
    pub fn and_then<B>(
        self,
        f: impl FnOnce(A, Input<'a, I>) -> ParseResult<'a, I, B>,
    ) -> ParseResult<'a, I, B> {
        match self {
            ParseResult::Success { value, next } => f(value, next),
            ParseResult::Failure(failure) => ParseResult::Failure(failure),
        }
    }

    /// The success value, if any.
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure(_) => None,
        }
    }

    /// Where a success resumes.
    #[inline]
    pub fn next(&self) -> Option<Input<'a, I>> {
        match self {
            ParseResult::Success { next, .. } => Some(*next),
            ParseResult::Failure(_) => None,
        }
    }

    /// The failure, if any.
    #[inline]
    pub fn failure(&self) -> Option<&Failure<'a, I>> {
        match self {
            ParseResult::Success { .. } => None,
            ParseResult::Failure(failure) => Some(failure),
        }
    }

    /// Resume position on success, failure position otherwise.
    #[inline]
    pub fn position(&self) -> usize {
        match self {
            ParseResult::Success { next, .. } => next.position(),
            ParseResult::Failure(failure) => failure.position(),
        }
    }

    /// Convert to `Option`, discarding failure information.
    pub fn ok(self) -> Option<A> {
        match self {
            ParseResult::Success { value, .. } => Some(value),
            ParseResult::Failure(_) => None,
        }
    }
}

impl<I: fmt::Debug, A> ParseResult<'_, I, A> {
    /// Convert to `Result`, rendering a failure into an owned [`ParseError`].
    pub fn into_result(self) -> Result<A, ParseError> {
        match self {
            ParseResult::Success { value, .. } => Ok(value),
            ParseResult::Failure(failure) => Err(failure.to_error()),
        }
    }

    /// Unwrap the success value.
    ///
    /// # Panics
    /// Panics on `Failure`, with the position and expected set in the message.
    #[track_caller]
    pub fn unwrap(self) -> A {
        match self {
            ParseResult::Success { value, .. } => value,
            ParseResult::Failure(failure) => {
                panic!("called `ParseResult::unwrap()` on a failure: {failure}")
            }
        }
    }
}

impl<'a, I, A> From<Failure<'a, I>> for ParseResult<'a, I, A> {
    #[inline]
    fn from(failure: Failure<'a, I>) -> Self {
        ParseResult::Failure(failure)
    }
}

impl<I: fmt::Debug, A: fmt::Debug> fmt::Debug for ParseResult<'_, I, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseResult::Success { value, next } => f
                .debug_struct("Success")
                .field("value", value)
                .field("next", &next.position())
                .finish(),
            ParseResult::Failure(failure) => f.debug_tuple("Failure").field(failure).finish(),
        }
    }
}

#[cfg(test)]
mod tests;
