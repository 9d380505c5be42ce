use super::*;
use crate::{pure, satisfy, symbol, value};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn digit() -> Rule<char, i64> {
    satisfy("digit", char::is_ascii_digit)
        .map(|c| i64::from(c.to_digit(10).unwrap_or_default()))
}

type BinOp = fn(i64, i64) -> i64;

fn sub(x: i64, y: i64) -> i64 {
    x - y
}

fn pow(x: i64, y: i64) -> i64 {
    x.pow(u32::try_from(y).unwrap_or_default())
}

fn minus() -> Rule<char, BinOp> {
    value('-', sub as BinOp)
}

fn power() -> Rule<char, BinOp> {
    value('^', pow as BinOp)
}

#[test]
fn map_keeps_metadata() {
    let rule = symbol('a').map(|c| c.to_ascii_uppercase());
    assert!(!rule.accepts_empty());
    assert!(rule.first_set().matches(&'a'));

    let text = chars("a");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some('A'));
}

#[test]
fn projections() {
    let text = chars("ab");
    let input = Input::new(&text);
    assert_eq!(symbol('a').and_l(symbol('b')).run(input).ok(), Some('a'));
    assert_eq!(symbol('a').and_r(symbol('b')).run(input).ok(), Some('b'));
    assert_eq!(
        symbol('a').product(symbol('b')).run(input).ok(),
        Some(('a', 'b'))
    );
}

#[test]
fn chainl1_folds_left() {
    let expr = digit().chainl1(minus());
    let text = chars("9-3-2");
    assert_eq!(expr.run(Input::new(&text)).ok(), Some(4));
}

#[test]
fn chainl1_single_operand() {
    let expr = digit().chainl1(minus());
    let text = chars("7");
    assert_eq!(expr.run(Input::new(&text)).ok(), Some(7));
}

#[test]
fn chainl1_dangling_operator() {
    let expr = digit().chainl1(minus());
    let text = chars("7-");
    let result = expr.run(Input::new(&text));
    assert_eq!(result.position(), 2);
    assert!(result.failure().is_some_and(|f| f.is_eof()));
}

#[test]
fn chainr1_folds_right() {
    let expr = digit().chainr1(power());
    let text = chars("2^3^2");
    assert_eq!(expr.run(Input::new(&text)).ok(), Some(512));

    let subtraction = digit().chainr1(minus());
    let text = chars("9-3-2");
    assert_eq!(subtraction.run(Input::new(&text)).ok(), Some(8));
}

#[test]
fn parse_from_leaves_trailing_input() {
    let text = chars("ab");
    let result = symbol('a').parse_from(Input::new(&text));
    assert_eq!(result.position(), 1);
    assert!(result.is_success());
}

#[test]
fn run_requires_end_of_input() {
    let text = chars("ab");
    let error = symbol('a').run(Input::new(&text)).into_result().err();
    assert_eq!(
        error.map(|e| e.to_string()).as_deref(),
        Some("unexpected 'b' at position 1: expected end of input")
    );
}

#[test]
fn run_rejects_impossible_start() {
    let text = chars("y");
    let error = symbol('x').run(Input::new(&text)).into_result().err();
    assert_eq!(
        error.map(|e| e.to_string()).as_deref(),
        Some("unexpected 'y' at position 0: expected 'x'")
    );

    let empty = chars("");
    let error = symbol('x').run(Input::new(&empty)).into_result().err();
    assert_eq!(
        error.map(|e| e.to_string()).as_deref(),
        Some("unexpected end of input at position 0: expected 'x'")
    );
}

#[test]
fn run_empty_grammar_on_empty_input() {
    let rule: Rule<char, u8> = pure(0);
    let text = chars("");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some(0));
}

#[test]
fn rules_are_shared_by_clone() {
    let a = symbol('a');
    let twice = a.and(a.clone()).map(|x, y| format!("{x}{y}"));
    let text = chars("aa");
    assert_eq!(twice.run(Input::new(&text)).ok().as_deref(), Some("aa"));
}
