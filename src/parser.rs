use crate::ast::{Expr, Literal, UnaryOp};
use crate::lexer::{Token, TokenIter, TokenKind, Tokens};
use logos::Span;

/// Deepest operand nesting accepted. Parsing, evaluation and dropping the
/// tree all recurse once per level.
pub const MAX_NESTING_DEPTH: usize = 1000;

pub use _hide_warnings::*;
mod _hide_warnings {
    #![allow(unused_assignments)]

    use crate::lexer::TokenKind;
    use miette::{Diagnostic, SourceSpan};
    use thiserror::Error;

    #[derive(Debug, PartialEq, Error, Diagnostic)]
    pub enum Error {
        #[error("unexpected token (expected {expected}, found {found})")]
        UnexpectedToken {
            expected: TokenKind,
            found: TokenKind,
            #[label("expected {expected} here")]
            span: SourceSpan,
        },
        #[error("expected an expression, found {found}")]
        ExpectedExpression {
            found: TokenKind,
            #[label]
            span: SourceSpan,
        },
        #[error("missing expression")]
        MissingExpression {
            #[label("an expression must come before this")]
            span: SourceSpan,
        },
        #[error("expected end of input, found {found}")]
        ExpectedEof {
            found: TokenKind,
            #[label("trailing input")]
            span: SourceSpan,
        },
        #[error("expression nested deeper than {max} levels")]
        TooDeep {
            max: usize,
            #[label("nesting limit reached here")]
            span: SourceSpan,
        },
    }
}

/// Recursive descent over a materialized token sequence. Each production
/// pushes the subtree it builds onto `stack`; callers pop their operands
/// back off.
pub struct Parser<'a> {
    source: &'a str,
    tokens: TokenIter,
    current_token: Option<Token>,
    stack: Vec<Expr>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Tokens, source: &'a str) -> Self {
        let mut parser = Self {
            source,
            tokens: tokens.into_iter(),
            current_token: None,
            stack: Vec::new(),
            depth: 0,
        };

        parser.advance();

        parser
    }

    #[inline]
    fn advance(&mut self) {
        self.current_token = self.tokens.next();
    }

    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_token
            .as_ref()
            .is_some_and(|token| &token.kind == kind)
    }

    pub fn check_consume(&mut self, kind: &TokenKind) -> Option<Token> {
        if self.check(kind) {
            self.consume()
        } else {
            None
        }
    }

    pub fn consume(&mut self) -> Option<Token> {
        let token = self.current_token.take();
        self.advance();
        token
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current_token
            .as_ref()
            .is_none_or(|token| token.kind == TokenKind::Eof)
    }

    #[inline]
    fn token_kind(&self) -> TokenKind {
        self.current_token
            .as_ref()
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    fn token_span(&self) -> Span {
        self.current_token
            .as_ref()
            .map_or(self.source.len()..self.source.len(), |t| t.span.clone())
    }

    fn stack_pop(&mut self) -> Result<Expr, Error> {
        self.stack.pop().ok_or_else(|| Error::MissingExpression {
            span: self.token_span().into(),
        })
    }

    fn literal(&self) -> Option<Literal> {
        match self.token_kind() {
            TokenKind::Zero => Some(Literal::Zero),
            TokenKind::True => Some(Literal::True),
            TokenKind::False => Some(Literal::False),
            _ => None,
        }
    }

    fn unary_op(&self) -> Option<UnaryOp> {
        match self.token_kind() {
            TokenKind::Succ => Some(UnaryOp::Succ),
            TokenKind::Pred => Some(UnaryOp::Pred),
            TokenKind::IsZero => Some(UnaryOp::IsZero),
            _ => None,
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        match self.check_consume(&kind) {
            Some(token) => Ok(token),
            None => Err(Error::UnexpectedToken {
                expected: kind,
                found: self.token_kind(),
                span: self.token_span().into(),
            }),
        }
    }

    fn expect_eof(&mut self) -> Result<(), Error> {
        if self.is_eof() {
            Ok(())
        } else {
            Err(Error::ExpectedEof {
                found: self.token_kind(),
                span: self.token_span().into(),
            })
        }
    }

    /// Parses one expression and takes its tree off the stack.
    fn operand(&mut self) -> Result<Expr, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::TooDeep {
                max: MAX_NESTING_DEPTH,
                span: self.token_span().into(),
            });
        }

        self.depth += 1;
        let result = self.expr().and_then(|()| self.stack_pop());
        self.depth -= 1;
        result
    }

    fn literal_expr(&mut self, lit: Literal) -> Result<(), Error> {
        self.consume();
        self.stack.push(Expr::Literal(lit));
        Ok(())
    }

    fn unary_expr(&mut self, op: UnaryOp) -> Result<(), Error> {
        self.consume();
        let expr = self.operand()?;
        self.stack.push(Expr::unary(op, expr));
        Ok(())
    }

    fn if_expr(&mut self) -> Result<(), Error> {
        self.expect(TokenKind::If)?;
        let cond = self.operand()?;
        self.expect(TokenKind::Then)?;
        let then_expr = self.operand()?;
        self.expect(TokenKind::Else)?;
        let else_expr = self.operand()?;
        self.stack.push(Expr::if_expr(cond, then_expr, else_expr));
        Ok(())
    }

    // Grouping only; the inner tree is pushed back unchanged.
    fn paren_expr(&mut self) -> Result<(), Error> {
        self.expect(TokenKind::ParenL)?;
        let expr = self.operand()?;
        self.expect(TokenKind::ParenR)?;
        self.stack.push(expr);
        Ok(())
    }

    /// Parses the expression starting at the current token and pushes it.
    /// At end of input nothing is pushed; the caller's pop reports it.
    pub fn expr(&mut self) -> Result<(), Error> {
        if let Some(lit) = self.literal() {
            return self.literal_expr(lit);
        }
        if let Some(op) = self.unary_op() {
            return self.unary_expr(op);
        }

        match self.token_kind() {
            TokenKind::If => self.if_expr(),
            TokenKind::ParenL => self.paren_expr(),
            TokenKind::Eof => Ok(()),
            found => Err(Error::ExpectedExpression {
                found,
                span: self.token_span().into(),
            }),
        }
    }

    pub fn parse_program(&mut self) -> Result<Expr, Error> {
        self.expr()?;
        self.expect_eof()?;
        let root = self.stack_pop()?;
        debug_assert!(self.stack.is_empty(), "parser stack holds stray subtrees");
        Ok(root)
    }

    #[cfg(test)]
    fn stack_len(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::tokenize;

    fn parser(source: &str) -> Parser<'_> {
        Parser::new(tokenize(source).unwrap(), source)
    }

    #[test]
    fn stack_drained_after_program() {
        for source in ["0", "succ (pred 0)", "if iszero 0 then true else (succ 0)"] {
            let mut parser = parser(source);
            assert!(parser.parse_program().is_ok());
            assert_eq!(parser.stack_len(), 0);
        }
    }

    #[test]
    fn depth_restored_after_operand() {
        let mut parser = parser("if succ 0 then pred 0 else 0");
        assert!(parser.parse_program().is_ok());
        assert_eq!(parser.depth, 0);
    }
}
