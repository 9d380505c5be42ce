//! Stack growth for deeply nested parses.
//!
//! Every cycle in a grammar passes through a forward reference, so a parse
//! of `((((…))))` or a long `many` run descends one native frame group per
//! nesting level or repetition. Wrapping the forward hop in
//! [`ensure_sufficient_stack`] keeps such parses from overflowing.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).
//!
//! # Configuration
//!
//! - **Red zone**: 128KB - If less than this remains, we grow the stack
//! - **Growth size**: 2MB - Each growth allocates this much additional space
//!
//! A single combinator hop can stack several `parse` frames (ap inside map
//! inside or), hence the larger figures than a hand-written descent needs.

/// Minimum stack space to keep available (128KB red zone).
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, a new segment is
/// allocated before `f` runs.
///
/// ```text
/// fn parse<'a>(&self, input: Input<'a, I>, follow: &SymSet<I>) -> ParseResult<'a, I, A> {
///     ensure_sufficient_stack(|| self.target().parse(input, follow))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
