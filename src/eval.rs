use crate::ast::{Expr, Literal, UnaryOp};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "numeric:{}", n),
            Value::Bool(b) => write!(f, "boolean:{}", b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Number,
    Bool,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueKind::Number => write!(f, "Number"),
            ValueKind::Bool => write!(f, "Bool"),
        }
    }
}

pub use _hide_warnings::*;
mod _hide_warnings {
    #![allow(unused_assignments)]

    use super::ValueKind;
    use miette::Diagnostic;
    use thiserror::Error;

    #[derive(Debug, PartialEq, Error, Diagnostic)]
    pub enum Error {
        #[error("`{op}` expects a {expected}, found a {found} in `{operand}`")]
        TypeMismatch {
            op: &'static str,
            expected: ValueKind,
            found: ValueKind,
            operand: String,
        },
    }
}

fn expect_number(op: UnaryOp, expr: &Expr) -> Result<i64, Error> {
    match eval(expr)? {
        Value::Number(n) => Ok(n),
        found => Err(Error::TypeMismatch {
            op: op.keyword(),
            expected: ValueKind::Number,
            found: found.kind(),
            operand: expr.to_string(),
        }),
    }
}

/// Reduces `expr` to a value. Only the branch selected by a conditional is
/// evaluated.
pub fn eval(expr: &Expr) -> Result<Value, Error> {
    match expr {
        Expr::Literal(Literal::Zero) => Ok(Value::Number(0)),
        Expr::Literal(Literal::True) => Ok(Value::Bool(true)),
        Expr::Literal(Literal::False) => Ok(Value::Bool(false)),
        Expr::Unary { op, expr } => {
            let n = expect_number(*op, expr)?;
            match op {
                UnaryOp::Succ => Ok(Value::Number(n + 1)),
                // no floor: `pred 0` is -1
                UnaryOp::Pred => Ok(Value::Number(n - 1)),
                UnaryOp::IsZero => Ok(Value::Bool(n == 0)),
            }
        }
        Expr::If {
            cond,
            then_expr,
            else_expr,
        } => match eval(cond)? {
            Value::Bool(true) => eval(then_expr),
            Value::Bool(false) => eval(else_expr),
            found => Err(Error::TypeMismatch {
                op: "if",
                expected: ValueKind::Bool,
                found: found.kind(),
                operand: cond.to_string(),
            }),
        },
    }
}
