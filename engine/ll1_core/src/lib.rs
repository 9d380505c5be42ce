//! Predictive LL(1) parser combinators.
//!
//! A grammar is a graph of [`Rule`]s built from a handful of primitives
//! (`pure`, `ap`, `map`, `or`, single-symbol leaves) and tied into cycles
//! through [`Ref`]. Every rule knows, before it parses anything, whether it
//! can match empty input and which symbols it can start with. `or` uses that
//! to pick a branch from one symbol of lookahead, so parsing never
//! backtracks and failures point at the first symbol that could not be
//! accepted.
//!
//! ```
//! use ll1_core::{satisfy, value, Input, Rule};
//!
//! type Op = fn(f64, f64) -> f64;
//! fn add(x: f64, y: f64) -> f64 { x + y }
//! fn sub(x: f64, y: f64) -> f64 { x - y }
//!
//! let digit: Rule<char, f64> = satisfy("digit", char::is_ascii_digit)
//!     .map(|c| f64::from(c.to_digit(10).unwrap_or(0)));
//! let op = value('+', add as Op).or(value('-', sub as Op));
//! let sum = digit.chainl1(op);
//!
//! let text: Vec<char> = "9-3+2".chars().collect();
//! assert_eq!(sum.run(Input::new(&text)).unwrap(), 8.0);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `input` | [`Input`], a position in a borrowed symbol slice |
//! | `symset` | [`SymSet`], first/follow/expected sets |
//! | `result` | [`ParseResult`], [`Failure`], [`Expected`] |
//! | `parser` | [`Parser`] trait and the [`Rule`] handle |
//! | `combinator` | primitives: [`pure`], [`ap`], [`satisfy`], [`eof`], … |
//! | `apply` | [`ApplyBuilder2`] through [`ApplyBuilder6`] |
//! | `reference` | [`Ref`] for recursive rules |
//! | `derived` | [`many`], [`sep_by`], [`choice`], … |
//! | `error` | [`ParseError`], [`GrammarError`] |
//!
//! # Concurrency
//!
//! A grammar is immutable once every `Ref` is bound and may be run from
//! many threads at once. Cached emptiness and first sets are filled on
//! first use; concurrent fills compute the same value and one copy wins.

mod apply;
mod combinator;
mod derived;
mod error;
mod input;
mod memo;
mod parser;
mod reference;
mod result;
mod symset;

use std::fmt::Debug;

pub use apply::{ApplyBuilder2, ApplyBuilder3, ApplyBuilder4, ApplyBuilder5, ApplyBuilder6};
pub use combinator::{ap, eof, fail, one_of, pure, pure_with, satisfy, symbol, value};
pub use derived::{between, choice, many, many1, opt, sep_by, sep_by1, skip_many};
pub use error::{GrammarError, ParseError};
pub use input::Input;
pub use parser::{Parser, Rule};
pub use reference::Ref;
pub use result::{Expected, Failure, ParseResult};
pub use symset::SymSet;

/// Requirements on input symbols.
///
/// Symbols are compared for lookahead, cloned into results, rendered in
/// error messages, and shared between threads with the grammar.
pub trait Symbol: Clone + PartialEq + Debug + Send + Sync + 'static {}

impl<T> Symbol for T where T: Clone + PartialEq + Debug + Send + Sync + 'static {}
