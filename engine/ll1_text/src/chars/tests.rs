use ll1_core::Parser;
use pretty_assertions::assert_eq;

use super::*;
use crate::run_str;

#[test]
fn chr_matches_exactly() {
    assert_eq!(run_str(&chr('q'), "q"), Ok('q'));
    assert!(run_str(&chr('q'), "Q").is_err());
}

#[test]
fn classes() {
    assert_eq!(run_str(&alpha(), "ж"), Ok('ж'));
    assert_eq!(run_str(&digit(), "7"), Ok('7'));
    assert_eq!(run_str(&ws(), "\t"), Ok('\t'));
    assert_eq!(run_str(&any_char(), "%"), Ok('%'));
}

#[test]
fn class_names_in_errors() {
    let error = run_str(&digit(), "x").err();
    assert_eq!(error.map(|e| e.expected).as_deref(), Some("digit"));

    let error = run_str(&alpha(), "1").err();
    assert_eq!(error.map(|e| e.expected).as_deref(), Some("letter"));
}

#[test]
fn satisfy_char_uses_name() {
    let hex = satisfy_char("hex digit", |c| c.is_ascii_hexdigit());
    assert_eq!(run_str(&hex, "F"), Ok('F'));
    let error = run_str(&hex, "g").err();
    assert_eq!(error.map(|e| e.expected).as_deref(), Some("hex digit"));
}

#[test]
fn string_literal() {
    assert_eq!(run_str(&string("null"), "null"), Ok("null".to_string()));

    let error = run_str(&string("null"), "nul").err();
    assert!(error.is_some_and(|e| e.position == 3 && e.is_eof()));

    let error = run_str(&string("null"), "nuts").err();
    assert_eq!(
        error.map(|e| e.to_string()).as_deref(),
        Some("unexpected 't' at position 2: expected 'l'")
    );
}

#[test]
fn empty_string_consumes_nothing() {
    let empty = string("");
    assert!(empty.accepts_empty());
    assert_eq!(run_str(&empty, ""), Ok(String::new()));
}

#[test]
fn token_skips_trailing_whitespace() {
    let word = token(string("true"));
    assert_eq!(run_str(&word, "true  \n"), Ok("true".to_string()));
    assert!(run_str(&word, " true").is_err());
}

#[test]
fn tokens_in_sequence() {
    let pair = token(chr('[')).and_r(token(chr(']')));
    assert_eq!(run_str(&pair, "[ \t ]  "), Ok(']'));
}
