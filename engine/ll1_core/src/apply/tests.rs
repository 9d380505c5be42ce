use pretty_assertions::assert_eq;

use crate::{pure, symbol, Input, Parser};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn pair_tuple() {
    let rule = symbol('a').and(symbol('b')).tuple();
    let text = chars("ab");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some(('a', 'b')));
}

#[test]
fn six_way_map_preserves_order() {
    let rule = symbol('a')
        .and(symbol('b'))
        .and(symbol('c'))
        .and(symbol('d'))
        .and(symbol('e'))
        .and(symbol('f'))
        .map(|a, b, c, d, e, f| [a, b, c, d, e, f].iter().collect::<String>());
    let text = chars("abcdef");
    assert_eq!(rule.run(Input::new(&text)).ok().as_deref(), Some("abcdef"));
}

#[test]
fn three_way_tuple() {
    let rule = symbol('x').and(pure(1)).and(symbol('y')).tuple();
    let text = chars("xy");
    assert_eq!(rule.run(Input::new(&text)).ok(), Some(('x', 1, 'y')));
}

#[test]
fn metadata_of_leading_empty_operands() {
    // pure, pure, 'z': first set comes from the first non-empty operand
    let rule = pure::<char, _>(()).and(pure(())).and(symbol('z')).tuple();
    assert!(!rule.accepts_empty());
    assert!(rule.first_set().matches(&'z'));
    assert!(!rule.first_set().matches(&'y'));
}

#[test]
fn failure_reports_offending_operand_position() {
    let rule = symbol('a')
        .and(symbol('b'))
        .and(symbol('c'))
        .and(symbol('d'))
        .tuple();
    let text = chars("abxd");
    let result = rule.run(Input::new(&text));
    let error = result.into_result().err();
    assert_eq!(
        error.map(|e| e.to_string()).as_deref(),
        Some("unexpected 'x' at position 2: expected 'c'")
    );
}
