//! Positional view over a symbol sequence.
//!
//! An [`Input`] is a borrowed slice plus an index. It is `Copy`; advancing
//! yields a new value and never mutates the original, so a parser can hold
//! on to the position it started from at no cost.

use std::fmt;

/// Immutable position within a finite, randomly addressable symbol sequence.
///
/// Invariant: `position <= symbols.len()`; [`is_eof`](Self::is_eof) holds
/// exactly when the two are equal.
pub struct Input<'a, I> {
    symbols: &'a [I],
    position: usize,
}

impl<'a, I> Input<'a, I> {
    /// Start at the first symbol of `symbols`.
    #[inline]
    pub const fn new(symbols: &'a [I]) -> Self {
        Input {
            symbols,
            position: 0,
        }
    }

    /// Index of the current symbol.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Total length of the underlying sequence.
    #[inline]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the underlying sequence has no symbols at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns `true` once every symbol has been consumed.
    #[inline]
    pub const fn is_eof(&self) -> bool {
        self.position == self.symbols.len()
    }

    /// The symbol at the current position, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<&'a I> {
        self.symbols.get(self.position)
    }

    /// The symbol at an absolute index.
    #[inline]
    pub fn at(&self, index: usize) -> Option<&'a I> {
        self.symbols.get(index)
    }

    /// Symbols not yet consumed.
    #[inline]
    pub fn remaining(&self) -> &'a [I] {
        &self.symbols[self.position..]
    }

    /// The whole underlying sequence.
    #[inline]
    pub const fn symbols(&self) -> &'a [I] {
        self.symbols
    }

    /// Step past the current symbol. Saturates at end of input.
    #[inline]
    #[must_use]
    pub fn advance(self) -> Self {
        debug_assert!(!self.is_eof(), "advance past end of input");
        Input {
            symbols: self.symbols,
            position: (self.position + 1).min(self.symbols.len()),
        }
    }
}

impl<I> Clone for Input<'_, I> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Input<'_, I> {}

/// Two inputs are equal when they view the same sequence at the same position.
impl<I> PartialEq for Input<'_, I> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.symbols, other.symbols) && self.position == other.position
    }
}

impl<I> Eq for Input<'_, I> {}

impl<I: fmt::Debug> fmt::Debug for Input<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("position", &self.position)
            .field("len", &self.symbols.len())
            .field("next", &self.peek())
            .finish()
    }
}
