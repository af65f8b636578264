use logos::{Logos, Span};
use std::fmt;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r" +")]
pub enum TokenKind {
    #[token("0")]
    Zero,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("succ")]
    Succ,
    #[token("pred")]
    Pred,
    #[token("iszero")]
    IsZero,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("(")]
    ParenL,
    #[token(")")]
    ParenR,
    /// Appended by [`tokenize`], never matched.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Zero => write!(f, "`0`"),
            TokenKind::True => write!(f, "`true`"),
            TokenKind::False => write!(f, "`false`"),
            TokenKind::Succ => write!(f, "`succ`"),
            TokenKind::Pred => write!(f, "`pred`"),
            TokenKind::IsZero => write!(f, "`iszero`"),
            TokenKind::If => write!(f, "`if`"),
            TokenKind::Then => write!(f, "`then`"),
            TokenKind::Else => write!(f, "`else`"),
            TokenKind::ParenL => write!(f, "`(`"),
            TokenKind::ParenR => write!(f, "`)`"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn lexeme<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }
}

pub use _hide_warnings::*;
mod _hide_warnings {
    #![allow(unused_assignments)]

    use miette::{Diagnostic, SourceSpan};
    use thiserror::Error;

    #[derive(Debug, PartialEq, Error, Diagnostic)]
    pub enum Error {
        #[error("unrecognized input `{fragment}`")]
        #[diagnostic(help("expected `0`, `true`, `false`, `succ`, `pred`, `iszero`, `if`, `then`, `else` or a parenthesis"))]
        Unrecognized {
            fragment: String,
            #[label("no token starts here")]
            span: SourceSpan,
        },
    }
}

/// The complete token sequence of one source string, always terminated by
/// a single [`TokenKind::Eof`] token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.0.iter().map(|t| t.kind).collect()
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = TokenIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub type TokenIter = std::vec::IntoIter<Token>;

/// Scans the whole source up front. The first unrecognized fragment aborts
/// the pass; no partial sequence is returned.
pub fn tokenize(source: &str) -> Result<Tokens, Error> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        match kind {
            Ok(kind) => tokens.push(Token {
                kind,
                span: lexer.span(),
            }),
            Err(()) => {
                return Err(Error::Unrecognized {
                    fragment: lexer.slice().to_string(),
                    span: lexer.span().into(),
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: source.len()..source.len(),
    });

    Ok(Tokens(tokens))
}
