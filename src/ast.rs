use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Zero,
    True,
    False,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Succ,
    Pred,
    IsZero,
}

impl UnaryOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            UnaryOp::Succ => "succ",
            UnaryOp::Pred => "pred",
            UnaryOp::IsZero => "iszero",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(Literal),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    If {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
}

impl Expr {
    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Expr::Unary {
            op,
            expr: Box::new(expr),
        }
    }

    pub fn if_expr(cond: Expr, then_expr: Expr, else_expr: Expr) -> Self {
        Expr::If {
            cond: Box::new(cond),
            then_expr: Box::new(then_expr),
            else_expr: Box::new(else_expr),
        }
    }

    fn is_atom(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }
}

/// Writes `expr`, parenthesized unless it is a literal.
fn operand(f: &mut fmt::Formatter, expr: &Expr) -> fmt::Result {
    if expr.is_atom() {
        write!(f, "{}", expr)
    } else {
        write!(f, "({})", expr)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(Literal::Zero) => write!(f, "0"),
            Expr::Literal(Literal::True) => write!(f, "true"),
            Expr::Literal(Literal::False) => write!(f, "false"),
            Expr::Unary { op, expr } => {
                write!(f, "{} ", op)?;
                operand(f, expr)
            }
            Expr::If {
                cond,
                then_expr,
                else_expr,
            } => {
                write!(f, "if ")?;
                operand(f, cond)?;
                write!(f, " then ")?;
                operand(f, then_expr)?;
                write!(f, " else ")?;
                operand(f, else_expr)
            }
        }
    }
}
