//! Single-character leaves and literals.

use std::borrow::Cow;

use ll1_core::{one_of, pure, satisfy, skip_many, symbol, Rule, SymSet};

/// Exactly `c`.
pub fn chr(c: char) -> Rule<char, char> {
    symbol(c)
}

/// A character satisfying `test`, described as `name` in errors.
pub fn satisfy_char(
    name: impl Into<Cow<'static, str>>,
    test: impl Fn(char) -> bool + Send + Sync + 'static,
) -> Rule<char, char> {
    satisfy(name, move |c: &char| test(*c))
}

/// Any alphabetic character.
pub fn alpha() -> Rule<char, char> {
    satisfy_char("letter", char::is_alphabetic)
}

/// An ASCII decimal digit.
pub fn digit() -> Rule<char, char> {
    satisfy_char("digit", |c| c.is_ascii_digit())
}

/// A whitespace character.
pub fn ws() -> Rule<char, char> {
    satisfy_char("whitespace", char::is_whitespace)
}

/// Any character at all.
pub fn any_char() -> Rule<char, char> {
    one_of(SymSet::all())
}

/// The literal `text`, producing it as an owned string.
///
/// The empty literal matches without consuming anything.
pub fn string(text: &str) -> Rule<char, String> {
    let owned = text.to_string();
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return pure(owned);
    };
    chars
        .fold(symbol(first).map(|_| ()), |acc, c| acc.and_l(symbol(c)))
        .map(move |()| owned.clone())
}

/// `rule` followed by any amount of whitespace.
pub fn token<A: 'static>(rule: Rule<char, A>) -> Rule<char, A> {
    rule.and_l(skip_many(ws()))
}

#[cfg(test)]
mod tests;
