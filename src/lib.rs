use crate::{ast::Expr, eval::Value, parser::Parser};

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;

pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = lexer::tokenize(source)?;
    let mut parser = Parser::new(tokens, source);
    Ok(parser.parse_program()?)
}

pub fn run(source: &str) -> Result<Value, Error> {
    let expr = parse(source)?;
    Ok(eval::eval(&expr)?)
}

pub use _hide_warnings::*;
mod _hide_warnings {
    #![allow(unused_assignments)]

    use crate::{eval, lexer, parser};
    use miette::Diagnostic;

    /// Displays as the fixed failure line for the stage that failed; the
    /// stage error is kept as the source and drives the diagnostic.
    #[derive(thiserror::Error, Diagnostic, Debug, PartialEq)]
    pub enum Error {
        #[error("fail lexical analysis")]
        #[diagnostic(transparent)]
        Lexer(#[from] lexer::Error),
        #[error("fail parse analysis")]
        #[diagnostic(transparent)]
        Parser(#[from] parser::Error),
        #[error("fail running program: something wrong")]
        #[diagnostic(transparent)]
        Eval(#[from] eval::Error),
    }
}
