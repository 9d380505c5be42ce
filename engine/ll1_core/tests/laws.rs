//! Algebraic properties of the combinators, checked with generated inputs.
//!
//! 1. Functor and applicative laws hold on parse results; `pure` consumes
//!    nothing.
//! 2. `or` metadata is the union of its operands' metadata.
//! 3. `chainl1` is a left fold; `chainr1` is a right fold.
//! 4. Cached metadata does not change between observations.
//! 5. Failures point at the first unacceptable symbol.

#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use ll1_core::{ap, many, pure, satisfy, symbol, value, Input, Parser, Rule};
use proptest::prelude::*;

type BinOp = fn(i64, i64) -> i64;

fn sub(x: i64, y: i64) -> i64 {
    x - y
}

fn digit() -> Rule<char, i64> {
    satisfy("digit", char::is_ascii_digit)
        .map(|c| i64::from(c.to_digit(10).unwrap_or_default()))
}

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// A single-symbol rule or an empty rule, by flag.
fn leaf(symbol_char: char, empty: bool) -> Rule<char, char> {
    if empty {
        pure('_')
    } else {
        symbol(symbol_char)
    }
}

// -- Strategies --

fn digits_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..10, 1..24)
}

fn render(operands: &[i64], op: char) -> String {
    operands
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(&op.to_string())
}

proptest! {
    #[test]
    fn functor_identity(text in "[0-9a-z]{0,12}") {
        let text = chars(&text);
        let plain = many(digit());
        let mapped = many(digit()).map(|xs| xs);
        let lhs = plain.run(Input::new(&text));
        let rhs = mapped.run(Input::new(&text));
        prop_assert_eq!(lhs.position(), rhs.position());
        prop_assert_eq!(lhs.ok(), rhs.ok());
    }

    #[test]
    fn functor_composition(text in "[0-9]{1,8}") {
        let text = chars(&text);
        let f = |x: i64| x + 1;
        let g = |x: i64| x * 3;
        let composed = digit().map(move |x| g(f(x)));
        let chained = digit().map(f).map(g);
        let input = Input::new(&text);
        prop_assert_eq!(
            composed.parse_from(input).ok(),
            chained.parse_from(input).ok()
        );
    }

    #[test]
    fn applicative_homomorphism(x in any::<i32>()) {
        let f = |n: i32| n.wrapping_mul(7);
        let lhs: Rule<char, i32> = ap(pure(f), pure(x));
        let rhs: Rule<char, i32> = pure(f(x));
        let text = chars("ignored");
        let input = Input::new(&text);

        let (l, r) = (lhs.parse_from(input), rhs.parse_from(input));
        prop_assert_eq!(l.position(), 0);
        prop_assert_eq!(r.position(), 0);
        prop_assert_eq!(l.ok(), r.ok());
        prop_assert!(lhs.accepts_empty());
    }

    #[test]
    fn map_is_ap_of_pure(text in "[0-9a]{0,3}") {
        let text = chars(&text);
        let f = |x: i64| x * x - 1;
        let mapped = digit().map(f);
        let applied = ap(pure(f), digit());
        let input = Input::new(&text);
        let (l, r) = (mapped.parse_from(input), applied.parse_from(input));
        prop_assert_eq!(l.position(), r.position());
        prop_assert_eq!(l.ok(), r.ok());
        prop_assert_eq!(mapped.accepts_empty(), applied.accepts_empty());
    }

    #[test]
    fn pure_never_consumes(text in "[a-z]{0,8}", skip in 0usize..8) {
        let text = chars(&text);
        let mut input = Input::new(&text);
        for _ in 0..skip.min(text.len()) {
            input = input.advance();
        }
        let result = pure::<char, _>(7u8).parse_from(input);
        prop_assert_eq!(result.position(), input.position());
        prop_assert_eq!(result.ok(), Some(7));
    }

    #[test]
    fn applicative_identity(text in "[0-9]{0,3}") {
        let text = chars(&text);
        let lhs = ap(pure(|x: i64| x), digit());
        let rhs = digit();
        let input = Input::new(&text);
        let (l, r) = (lhs.parse_from(input), rhs.parse_from(input));
        prop_assert_eq!(l.position(), r.position());
        prop_assert_eq!(l.ok(), r.ok());
    }

    #[test]
    fn or_metadata_is_union(
        left_empty in any::<bool>(),
        right_empty in any::<bool>(),
        probe in "[a-d_]",
    ) {
        let left = leaf('a', left_empty);
        let right = leaf('b', right_empty);
        let either = left.or(right.clone());
        let probe = probe.chars().next().unwrap_or('_');

        prop_assert_eq!(either.accepts_empty(), left_empty || right_empty);
        prop_assert_eq!(
            either.first_set().matches(&probe),
            left.first_set().matches(&probe) || right.first_set().matches(&probe)
        );
    }

    #[test]
    fn chainl1_is_left_fold(operands in digits_strategy()) {
        let expr = digit().chainl1(value('-', sub as BinOp));
        let text = chars(&render(&operands, '-'));
        let expected = operands[1..].iter().fold(operands[0], |acc, &d| acc - d);
        prop_assert_eq!(expr.run(Input::new(&text)).ok(), Some(expected));
    }

    #[test]
    fn chainr1_is_right_fold(operands in digits_strategy()) {
        let expr = digit().chainr1(value('-', sub as BinOp));
        let text = chars(&render(&operands, '-'));
        let last = operands[operands.len() - 1];
        let expected = operands[..operands.len() - 1]
            .iter()
            .rev()
            .fold(last, |acc, &d| d - acc);
        prop_assert_eq!(expr.run(Input::new(&text)).ok(), Some(expected));
    }

    #[test]
    fn metadata_is_stable(text in "[0-9;]{0,10}") {
        let grammar = many(digit()).and_l(symbol(';'));
        let empty_before = grammar.accepts_empty();
        let first_before = grammar.first_set().describe();

        let text = chars(&text);
        let _ = grammar.run(Input::new(&text));

        prop_assert_eq!(grammar.accepts_empty(), empty_before);
        prop_assert_eq!(grammar.first_set().describe(), first_before);
    }

    #[test]
    fn failure_points_at_first_bad_symbol(prefix in "[0-9]{0,10}", bad in "[a-z]") {
        let text = chars(&format!("{prefix}{bad}"));
        let result = many(digit()).run(Input::new(&text));
        prop_assert!(result.is_failure());
        prop_assert_eq!(result.position(), prefix.len());
    }
}
