use pretty_assertions::assert_eq;

use super::*;
use crate::{satisfy, symbol, Input, Parser, SymSet};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn digit() -> Rule<char, u32> {
    satisfy("digit", char::is_ascii_digit).map(|c| c.to_digit(10).unwrap_or_default())
}

#[test]
fn many_collects_in_order() {
    let rule = many(digit());
    let text = chars("4021");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some(vec![4, 0, 2, 1]));
}

#[test]
fn many_accepts_empty_input() {
    let rule = many(digit());
    assert!(rule.accepts_empty());
    let text = chars("");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some(vec![]));
}

#[test]
fn many_stops_at_follow_symbol() {
    let rule = many(digit()).and_l(symbol(';'));
    let text = chars("12;");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some(vec![1, 2]));
}

#[test]
fn many_rejects_symbol_outside_first_and_follow() {
    let rule = many(digit()).and_l(symbol(';'));
    let text = chars("12x");
    let error = rule.run(Input::new(&text)).into_result().err();
    assert_eq!(
        error.map(|e| e.to_string()).as_deref(),
        Some("unexpected 'x' at position 2: expected digit or ';'")
    );
}

#[test]
fn many_long_run() {
    let text = vec!['7'; 50_000];
    let rule = many(digit());
    let values = rule.run(Input::new(&text)).ok().unwrap_or_default();
    assert_eq!(values.len(), 50_000);
}

#[test]
fn many1_requires_one() {
    let rule = many1(digit());
    assert!(!rule.accepts_empty());
    let empty = chars("");
    assert!(rule.run(Input::new(&empty)).is_failure());
    let text = chars("93");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some(vec![9, 3]));
}

#[test]
fn skip_many_discards() {
    let rule = skip_many(symbol(' ')).and_r(symbol('x'));
    let text = chars("   x");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some('x'));
}

#[test]
fn sep_by_variants() {
    let list = sep_by(digit(), symbol(','));
    let empty = chars("");
    let three = chars("1,2,3");
    assert_eq!(list.run(Input::new(&empty)).ok(), Some(vec![]));
    assert_eq!(list.run(Input::new(&three)).ok(), Some(vec![1, 2, 3]));

    let dangling = chars("1,2,");
    let result = list.run(Input::new(&dangling));
    assert_eq!(result.position(), 4);
    assert!(result.failure().is_some_and(|f| f.is_eof()));

    let list1 = sep_by1(digit(), symbol(','));
    assert!(list1.run(Input::new(&empty)).is_failure());
}

#[test]
fn between_keeps_inner_value() {
    let rule = between(symbol('['), many(digit()), symbol(']'));
    let text = chars("[12]");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some(vec![1, 2]));
}

#[test]
fn choice_prefers_earlier_alternatives() {
    let rule = choice([
        symbol('a').map(|_| 1),
        symbol('b').map(|_| 2),
        satisfy("letter", char::is_ascii_alphabetic).map(|_| 3),
    ]);
    let run = |text: &str| rule.run(Input::new(&chars(text))).ok();
    assert_eq!(run("a"), Some(1));
    assert_eq!(run("b"), Some(2));
    assert_eq!(run("c"), Some(3));
    assert_eq!(run("1"), None);
}

#[test]
fn empty_choice_never_succeeds() {
    let rule: Rule<char, ()> = choice(std::iter::empty());
    assert!(!rule.accepts_empty());
    assert!(rule.first_set().is_empty());
    let text = chars("");
    assert!(rule.run(Input::new(&text)).is_failure());
}

#[test]
fn opt_yields_none_on_follow() {
    let rule = opt(symbol('-')).and(digit()).tuple();
    let negative = chars("-5");
    let positive = chars("5");
    assert_eq!(rule.run(Input::new(&negative)).ok(), Some((Some('-'), 5)));
    assert_eq!(rule.run(Input::new(&positive)).ok(), Some((None, 5)));
}

#[test]
fn opt_metadata() {
    let rule = opt(symbol('-'));
    assert!(rule.accepts_empty());
    assert_eq!(rule.first_set().describe(), SymSet::value('-').describe());
}
