//! Expression tree and evaluation.

use std::fmt;

use ll1_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Scale suffix on a numeric literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Units {
    /// No suffix.
    Abs,
    /// `%`: hundredths.
    Pct,
    /// `bp`: basis points, ten-thousandths.
    Bps,
}

impl Units {
    /// How many units make one absolute unit.
    pub fn divisor(self) -> f64 {
        match self {
            Units::Abs => 1.0,
            Units::Pct => 100.0,
            Units::Bps => 10_000.0,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Units::Abs => "",
            Units::Pct => "%",
            Units::Bps => "bp",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Pos,
    Neg,
}

impl UnaryOp {
    fn symbol(self) -> char {
        match self {
            UnaryOp::Pos => '+',
            UnaryOp::Neg => '-',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
        }
    }

    fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

/// Two-argument built-in functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Func {
    Min,
    Max,
}

impl Func {
    pub fn name(self) -> &'static str {
        match self {
            Func::Min => "min",
            Func::Max => "max",
        }
    }
}

/// Parsed arithmetic expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num { value: f64, units: Units },
    Var(char),
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary { op: BinOp, lhs: Box<Expr>, rhs: Box<Expr> },
    Call { func: Func, first: Box<Expr>, second: Box<Expr> },
}

impl Expr {
    pub fn num(value: f64, units: Units) -> Self {
        Expr::Num { value, units }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn call(func: Func, first: Expr, second: Expr) -> Self {
        Expr::Call {
            func,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Evaluate with variables looked up in `env`.
    ///
    /// # Errors
    /// Returns [`EvalError::UnboundVariable`] for the first variable, left
    /// to right, that `env` does not define.
    pub fn eval(&self, env: &Env) -> Result<f64, EvalError> {
        ensure_sufficient_stack(|| self.eval_node(env))
    }

    fn eval_node(&self, env: &Env) -> Result<f64, EvalError> {
        Ok(match self {
            Expr::Num { value, units } => value / units.divisor(),
            Expr::Var(name) => *env
                .get(name)
                .ok_or(EvalError::UnboundVariable { name: *name })?,
            Expr::Unary { op, operand } => {
                let value = operand.eval(env)?;
                match op {
                    UnaryOp::Pos => value,
                    UnaryOp::Neg => -value,
                }
            }
            Expr::Binary { op, lhs, rhs } => op.apply(lhs.eval(env)?, rhs.eval(env)?),
            Expr::Call { func, first, second } => {
                let (a, b) = (first.eval(env)?, second.eval(env)?);
                match func {
                    Func::Min => a.min(b),
                    Func::Max => a.max(b),
                }
            }
        })
    }

    /// Move boxed operands into `pending`, leaving leaves in their place.
    fn take_operands(&mut self, pending: &mut Vec<Expr>) {
        let placeholder = || Expr::Var('_');
        match self {
            Expr::Num { .. } | Expr::Var(_) => {}
            Expr::Unary { operand, .. } => {
                pending.push(std::mem::replace(&mut **operand, placeholder()));
            }
            Expr::Binary { lhs, rhs, .. }
            | Expr::Call {
                first: lhs,
                second: rhs,
                ..
            } => {
                pending.push(std::mem::replace(&mut **lhs, placeholder()));
                pending.push(std::mem::replace(&mut **rhs, placeholder()));
            }
        }
    }
}

/// Operands are dropped from a heap work list, so long chains of unary
/// signs do not recurse per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_operands(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_operands(&mut pending);
        }
    }
}

/// Fully parenthesised rendering. A parsed tree renders to text that parses
/// back to an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Num { value, units } => write!(f, "{value}{}", units.suffix()),
            Expr::Var(name) => write!(f, "{name}"),
            Expr::Unary { op, operand } => write!(f, "{}{operand}", op.symbol()),
            Expr::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Expr::Call { func, first, second } => {
                write!(f, "{}({first}, {second})", func.name())
            }
        })
    }
}

/// Variable bindings for [`Expr::eval`].
pub type Env = FxHashMap<char, f64>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("variable `{name}` is not bound")]
    UnboundVariable { name: char },
}
