//! Arithmetic expressions.
//!
//! ```text
//! expr   = prod (addSub prod)*          left-associative
//! prod   = term (multDiv term)*         left-associative
//! term   = num | '(' expr ')' | func | var | sign term
//! num    = udble units
//! units  = '%' | "bp" | ε
//! func   = ("min" | "max") '(' expr ',' expr ')'
//! var    = letter
//! sign   = '+' | '-'
//! ```
//!
//! Whitespace may follow any token. Alternatives of `term` overlap on `m`
//! (`func` and `var`); `func` is listed first and wins, so `m` is not
//! usable as a variable name.

mod ast;

use std::sync::OnceLock;

use ll1_core::{between, choice, pure, skip_many, ParseError, Ref, Rule};
use ll1_text::{alpha, chr, run_str, string, token, udble, ws};

pub use ast::{BinOp, Env, EvalError, Expr, Func, UnaryOp, Units};

fn binary(symbol: char, op: BinOp) -> Rule<char, impl Fn(Expr, Expr) -> Expr + 'static> {
    token(chr(symbol)).map(move |_| move |lhs: Expr, rhs: Expr| Expr::binary(op, lhs, rhs))
}

fn units() -> Rule<char, Units> {
    choice([
        string("%").map(|_| Units::Pct),
        string("bp").map(|_| Units::Bps),
        pure(Units::Abs),
    ])
}

fn func_name() -> Rule<char, Func> {
    let min = string("in").map(|_| Func::Min);
    let max = string("ax").map(|_| Func::Max);
    chr('m').and_r(min.or(max))
}

fn sign() -> Rule<char, UnaryOp> {
    let plus = chr('+').map(|_| UnaryOp::Pos);
    let minus = chr('-').map(|_| UnaryOp::Neg);
    token(plus.or(minus))
}

fn build() -> Rule<char, Expr> {
    let expr = Ref::named("expr");
    let term = Ref::named("term");

    let num = token(udble().and(units()).map(Expr::num));
    let brack = between(token(chr('(')), expr.forward(), token(chr(')')));
    let first_arg = between(token(chr('(')), expr.forward(), token(chr(',')));
    let second_arg = expr.forward().and_l(token(chr(')')));
    let func = token(func_name())
        .and(first_arg)
        .and(second_arg)
        .map(Expr::call);
    let var = token(alpha()).map(Expr::Var);
    let signed = sign().and(term.forward()).map(Expr::unary);

    term.set(choice([num, brack, func, var, signed]));

    let add_sub = binary('+', BinOp::Add).or(binary('-', BinOp::Sub));
    let mult_div = binary('*', BinOp::Mul).or(binary('/', BinOp::Div));
    let prod = term.into_rule().chainl1(mult_div);
    expr.set(prod.chainl1(add_sub));

    skip_many(ws()).and_r(expr.into_rule())
}

/// The shared expression grammar, built on first use.
pub fn grammar() -> &'static Rule<char, Expr> {
    static GRAMMAR: OnceLock<Rule<char, Expr>> = OnceLock::new();
    GRAMMAR.get_or_init(build)
}

/// Parse an expression.
///
/// # Errors
/// Returns the position of the first character that cannot continue a
/// valid expression, and what was expected there.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    run_str(grammar(), text)
}
