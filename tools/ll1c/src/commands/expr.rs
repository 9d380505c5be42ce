//! `ll1c expr`: parse and evaluate arithmetic expressions.

use ll1_core::ParseError;
use ll1_grammars::expr::{self, Env, EvalError, Expr};
use ll1_text::{dble, run_str};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated {
    pub tree: Expr,
    pub value: f64,
}

/// Parse `text` and evaluate it against `env`.
pub fn evaluate(text: &str, env: &Env) -> Result<Evaluated, ExprError> {
    let tree = expr::parse(text)?;
    let value = tree.eval(env)?;
    debug!(%tree, value, "evaluated expression");
    Ok(Evaluated { tree, value })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid binding `{binding}`: expected <letter>=<number>")]
pub struct BindingError {
    pub binding: String,
}

/// Parse a `x=1.5` variable binding.
pub fn parse_binding(binding: &str) -> Result<(char, f64), BindingError> {
    let invalid = || BindingError {
        binding: binding.to_string(),
    };
    let (name, value) = binding.split_once('=').ok_or_else(invalid)?;
    let mut chars = name.chars();
    let (Some(name), None) = (chars.next(), chars.next()) else {
        return Err(invalid());
    };
    if !name.is_alphabetic() {
        return Err(invalid());
    }
    let value = run_str(&dble(), value).map_err(|_| invalid())?;
    Ok((name, value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn evaluates_with_bindings() {
        let mut env = Env::default();
        env.insert('r', 5.0);
        let evaluated = evaluate("r * 2 + 25%", &env);
        assert_eq!(evaluated.map(|e| e.value), Ok(10.25));
    }

    #[test]
    fn reports_parse_errors() {
        let error = evaluate("1 +", &Env::default()).err();
        assert!(matches!(error, Some(ExprError::Parse(ref e)) if e.position == 3));
    }

    #[test]
    fn reports_unbound_variables() {
        let error = evaluate("q", &Env::default()).err();
        assert_eq!(
            error.map(|e| e.to_string()).as_deref(),
            Some("evaluation error: variable `q` is not bound")
        );
    }

    #[test]
    fn bindings() {
        assert_eq!(parse_binding("x=2.5"), Ok(('x', 2.5)));
        assert_eq!(parse_binding("y=-1e2"), Ok(('y', -100.0)));
        assert!(parse_binding("xy=1").is_err());
        assert!(parse_binding("1=1").is_err());
        assert!(parse_binding("x=").is_err());
        assert!(parse_binding("x").is_err());
    }
}
