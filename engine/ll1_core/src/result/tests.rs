use super::*;

#[test]
fn success_accessors() {
    let symbols = ['a', 'b'];
    let next = Input::new(&symbols).advance();
    let result: ParseResult<'_, char, i32> = ParseResult::success(7, next);

    assert!(result.is_success());
    assert_eq!(result.value(), Some(&7));
    assert_eq!(result.next(), Some(next));
    assert_eq!(result.position(), 1);
    assert!(result.failure().is_none());
    assert_eq!(result.into_result(), Ok(7));
}

#[test]
fn map_transforms_only_success() {
    let symbols = ['a'];
    let input = Input::new(&symbols);

    let ok: ParseResult<'_, char, i32> = ParseResult::success(2, input);
    assert_eq!(ok.map(|n| n * 10).unwrap(), 20);

    let failed: ParseResult<'_, char, i32> = Failure::unexpected(SymSet::value('x'), input).into();
    let mapped = failed.map(|n| n * 10);
    assert!(mapped.is_failure());
    assert_eq!(mapped.position(), 0);
}

#[test]
fn failure_keeps_position_across_result_types() {
    let symbols = ['a', 'b', 'c'];
    let at = Input::new(&symbols).advance().advance();
    let typed: ParseResult<'_, char, i32> = Failure::unexpected(SymSet::value('x'), at).into();

    let ParseResult::Failure(failure) = typed else {
        panic!("expected failure");
    };
    let retyped: ParseResult<'_, char, String> = failure.into();

    let failure = retyped.failure().cloned();
    assert!(failure.is_some_and(|f| f.position() == 2 && f.found() == Some(&'c')));
}

#[test]
fn failure_at_end_of_input() {
    let symbols: [char; 0] = [];
    let failure = Failure::unexpected(SymSet::value('x'), Input::new(&symbols));

    assert!(failure.is_eof());
    assert_eq!(failure.found(), None);
    assert_eq!(
        failure.to_string(),
        "unexpected end of input at position 0: expected 'x'"
    );
}

#[test]
fn expected_eof_failure_message() {
    let symbols = ['a', 'b'];
    let failure = Failure::expected_eof(Input::new(&symbols).advance());
    assert_eq!(
        failure.to_error(),
        ParseError {
            position: 1,
            found: Some("'b'".to_string()),
            expected: "end of input".to_string(),
        }
    );
}

#[test]
fn and_then_threads_next_input() {
    let symbols = ['a', 'b'];
    let start = Input::new(&symbols);
    let result: ParseResult<'_, char, usize> = ParseResult::success(1, start.advance())
        .and_then(|n, next| ParseResult::success(n + next.position(), next.advance()));
    assert_eq!(result.position(), 2);
    assert_eq!(result.ok(), Some(2));
}

#[test]
#[should_panic(expected = "unexpected 'y' at position 0: expected 'x'")]
fn unwrap_failure_panics_with_message() {
    let symbols = ['y'];
    let result: ParseResult<'_, char, ()> =
        Failure::unexpected(SymSet::value('x'), Input::new(&symbols)).into();
    result.unwrap();
}
