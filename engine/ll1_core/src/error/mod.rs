//! Error types.
//!
//! Two failure classes exist and they never mix:
//! - [`ParseError`]: the input did not match. Owned, displayable form of a
//!   [`Failure`](crate::Failure), produced by
//!   [`ParseResult::into_result`](crate::ParseResult::into_result).
//! - [`GrammarError`]: the grammar itself was wired wrong (an unbound or
//!   twice-bound [`Ref`](crate::Ref)). Not attributable to any input, so it
//!   is raised as a panic rather than returned.

use thiserror::Error;

/// A parse failure detached from the input it was produced against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unexpected {} at position {position}: expected {expected}",
    .found.as_deref().unwrap_or("end of input")
)]
pub struct ParseError {
    /// Index of the offending symbol (or the input length at end of input).
    pub position: usize,
    /// Debug rendering of the offending symbol; `None` at end of input.
    pub found: Option<String>,
    /// Description of what would have been accepted.
    pub expected: String,
}

impl ParseError {
    /// Returns `true` if the input ended where more symbols were required.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.found.is_none()
    }
}

/// Defects in a grammar definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A forward reference was parsed through, or its metadata forced,
    /// before `Ref::set` was called.
    #[error("rule `{rule}` was used before being bound")]
    Unbound { rule: String },

    /// `Ref::set` was called on a rule that already had a target.
    #[error("rule `{rule}` was bound more than once")]
    AlreadyBound { rule: String },

    /// The owning `Ref` was dropped while forward handles to it remain
    /// reachable from a live grammar.
    #[error("rule `{rule}` was dropped while the grammar still refers to it")]
    Dropped { rule: String },
}

/// Abort on a grammar-construction defect.
#[cold]
#[track_caller]
pub(crate) fn grammar_fault(error: GrammarError) -> ! {
    tracing::error!(%error, "grammar construction error");
    panic!("grammar construction error: {error}")
}
