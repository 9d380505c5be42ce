//! Compute-once cells for parser metadata.
//!
//! Emptiness and first sets are pure functions of a fully bound grammar, so
//! two threads racing to fill the same cell compute the same value. The
//! computation runs outside the cell; only publishing the finished value
//! goes through `OnceLock`, and the loser's copy is dropped. No lock is held
//! while a child's metadata is forced, so a computation that reaches back
//! into another node's cell cannot deadlock on it.

use std::sync::OnceLock;

pub(crate) struct Memo<T>(OnceLock<T>);

impl<T> Memo<T> {
    pub(crate) const fn new() -> Self {
        Memo(OnceLock::new())
    }

    /// Cached value, computing and publishing it on first use.
    pub(crate) fn get_or_compute(&self, compute: impl FnOnce() -> T) -> &T {
        if let Some(value) = self.0.get() {
            return value;
        }
        let value = compute();
        self.0.get_or_init(|| value)
    }
}
