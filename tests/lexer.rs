use arith::lexer::{Error, TokenKind, tokenize};

#[test]
fn keywords() {
    let tokens = tokenize("if true then succ 0 else pred false").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![
            TokenKind::If,
            TokenKind::True,
            TokenKind::Then,
            TokenKind::Succ,
            TokenKind::Zero,
            TokenKind::Else,
            TokenKind::Pred,
            TokenKind::False,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn iszero_is_not_if() {
    let tokens = tokenize("iszero 0").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![TokenKind::IsZero, TokenKind::Zero, TokenKind::Eof]
    );
}

#[test]
fn parens() {
    let tokens = tokenize("(succ 0)").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![
            TokenKind::ParenL,
            TokenKind::Succ,
            TokenKind::Zero,
            TokenKind::ParenR,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_need_no_separator() {
    let tokens = tokenize("iftrue").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![TokenKind::If, TokenKind::True, TokenKind::Eof]
    );

    let tokens = tokenize("00").unwrap();
    assert_eq!(
        tokens.kinds(),
        vec![TokenKind::Zero, TokenKind::Zero, TokenKind::Eof]
    );
}

#[test]
fn empty_and_blank() {
    assert_eq!(tokenize("").unwrap().kinds(), vec![TokenKind::Eof]);
    assert_eq!(tokenize("   ").unwrap().kinds(), vec![TokenKind::Eof]);
}

#[test]
fn spans_and_lexemes() {
    let source = "  succ  0";
    let tokens: Vec<_> = tokenize(source).unwrap().into_iter().collect();
    assert_eq!(tokens[0].span, 2..6);
    assert_eq!(tokens[0].lexeme(source), "succ");
    assert_eq!(tokens[1].span, 8..9);
    assert_eq!(tokens[1].lexeme(source), "0");
    assert_eq!(tokens[2].span, 9..9);
    assert_eq!(tokens[2].lexeme(source), "");
}

#[test]
fn unrecognized() {
    let Err(Error::Unrecognized { fragment, span }) = tokenize("true x") else {
        panic!("expected a lexical error");
    };
    assert_eq!(fragment, "x");
    assert_eq!(span.offset(), 5);
}

#[test]
fn keyword_with_suffix() {
    assert!(tokenize("truex").is_err());
    assert!(tokenize("foo").is_err());
    assert!(tokenize("1").is_err());
}

#[test]
fn only_spaces_are_skipped() {
    assert!(tokenize("succ\t0").is_err());
    assert!(tokenize("0\n").is_err());
}
