//! Text parsing on top of `ll1_core`.
//!
//! Grammars in this crate read `char` symbols. Leaves come in two groups:
//! single characters and literals ([`chr`], [`string`], [`alpha`],
//! [`digit`], [`ws`]) and numbers ([`uintr`], [`intr`], [`udble`],
//! [`dble`]). [`run_str`] drives any `char` grammar over a `&str`.

mod chars;
mod number;

use ll1_core::{Input, ParseError, Rule};
use tracing::trace;

pub use chars::{alpha, any_char, chr, digit, satisfy_char, string, token, ws};
pub use number::{dble, intr, udble, uintr};

/// Parse all of `text` with `rule`.
///
/// Positions in the returned error count characters, not bytes.
pub fn run_str<A: 'static>(rule: &Rule<char, A>, text: &str) -> Result<A, ParseError> {
    let symbols: Vec<char> = text.chars().collect();
    trace!(chars = symbols.len(), "running text grammar");
    rule.run(Input::new(&symbols)).into_result()
}
