//! JSON documents.
//!
//! ```text
//! document = ws* value
//! value    = null | bool | number | string | array | object
//! array    = '[' (value (',' value)*)? ']'
//! object   = '{' (string ':' value (',' string ':' value)*)? '}'
//! string   = '"' (char | '\' escape)* '"'
//! escape   = '"' | '\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u' hex hex hex hex
//! ```
//!
//! Whitespace may follow any token. Every alternative of `value` starts
//! with a different character, so the grammar needs no tie-breaking.
//! `\u` escapes are UTF-16 code units; surrogate pairs combine and a lone
//! surrogate decodes to U+FFFD.

mod model;

use std::sync::OnceLock;

use ll1_core::{between, choice, many, sep_by, skip_many, value, ParseError, Ref, Rule};
use ll1_text::{chr, dble, run_str, satisfy_char, string, token, ws};

pub use model::JsonValue;

/// A decoded piece of string content.
#[derive(Clone, Copy)]
enum Fragment {
    Char(char),
    Unit(u16),
}

fn hex_digit() -> Rule<char, u16> {
    satisfy_char("hex digit", |c| c.is_ascii_hexdigit()).map(|c| {
        c.to_digit(16)
            .and_then(|d| u16::try_from(d).ok())
            .unwrap_or_default()
    })
}

fn code_unit() -> Rule<char, u16> {
    hex_digit()
        .and(hex_digit())
        .and(hex_digit())
        .and(hex_digit())
        .map(|a, b, c, d| (a << 12) | (b << 8) | (c << 4) | d)
}

fn escape() -> Rule<char, Fragment> {
    let simple = choice([
        chr('"'),
        chr('\\'),
        chr('/'),
        value('b', '\u{8}'),
        value('f', '\u{c}'),
        value('n', '\n'),
        value('r', '\r'),
        value('t', '\t'),
    ]);
    let unicode = chr('u').and_r(code_unit()).map(Fragment::Unit);
    simple.map(Fragment::Char).or(unicode)
}

fn string_char() -> Rule<char, Fragment> {
    let plain = satisfy_char("string character", |c| c != '"' && c != '\\' && c >= ' ');
    chr('\\').and_r(escape()).or(plain.map(Fragment::Char))
}

fn decode(fragments: Vec<Fragment>) -> String {
    fn flush(out: &mut String, units: &mut Vec<u16>) {
        out.extend(
            char::decode_utf16(units.drain(..)).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
        );
    }

    let mut out = String::with_capacity(fragments.len());
    let mut units = Vec::new();
    for fragment in fragments {
        match fragment {
            Fragment::Unit(unit) => units.push(unit),
            Fragment::Char(c) => {
                flush(&mut out, &mut units);
                out.push(c);
            }
        }
    }
    flush(&mut out, &mut units);
    out
}

fn jstring() -> Rule<char, String> {
    token(between(chr('"'), many(string_char()), chr('"'))).map(decode)
}

fn build() -> Rule<char, JsonValue> {
    let json = Ref::named("value");

    let null = token(string("null")).map(|_| JsonValue::Null);
    let boolean = token(string("true").map(|_| true).or(string("false").map(|_| false)))
        .map(JsonValue::Bool);
    let number = token(dble()).map(JsonValue::Number);
    let text = jstring().map(JsonValue::String);
    let array = between(
        token(chr('[')),
        sep_by(json.forward(), token(chr(','))),
        token(chr(']')),
    )
    .map(JsonValue::Array);
    let member = jstring().and_l(token(chr(':'))).and(json.forward()).tuple();
    let object = between(
        token(chr('{')),
        sep_by(member, token(chr(','))),
        token(chr('}')),
    )
    .map(JsonValue::Object);

    json.set(choice([null, boolean, number, text, array, object]));
    skip_many(ws()).and_r(json.into_rule())
}

/// The shared JSON grammar, built on first use.
pub fn grammar() -> &'static Rule<char, JsonValue> {
    static GRAMMAR: OnceLock<Rule<char, JsonValue>> = OnceLock::new();
    GRAMMAR.get_or_init(build)
}

/// Parse a JSON document.
///
/// # Errors
/// Returns the character position where the document stops being valid
/// JSON, and what was expected there.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse(text: &str) -> Result<JsonValue, ParseError> {
    run_str(grammar(), text)
}
