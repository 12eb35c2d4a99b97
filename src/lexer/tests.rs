//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Single and two-character operators
//! - Illegal bytes
//! - End-of-input behaviour and restarting

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_whitespace_only_is_eof() {
    for source in ["", " ", "\t\t", "\n\r\n", "  \t \r\n  "] {
        let mut lexer = Lexer::new(source);
        let token = lexer.next_token();

        assert_eq!(token.kind, TokenKind::EOF, "source {:?}", source);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("=+(){},;");
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[2].literal, "(");
    assert_eq!(tokens[7].literal, ";");
}

#[test]
fn test_tokenize_two_character_operators() {
    let tokens = tokenize("==");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Equals);
    assert_eq!(tokens[0].literal, "==");

    let tokens = tokenize("= ");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[0].literal, "=");

    let tokens = tokenize("!= ! =");
    assert_eq!(tokens[0].kind, TokenKind::NotEquals);
    assert_eq!(tokens[0].literal, "!=");
    assert_eq!(tokens[1].kind, TokenKind::Not);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("+ - * / < > ! == != =");

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Less);
    assert_eq!(tokens[5].kind, TokenKind::Greater);
    assert_eq!(tokens[6].kind, TokenKind::Not);
    assert_eq!(tokens[7].kind, TokenKind::Equals);
    assert_eq!(tokens[8].kind, TokenKind::NotEquals);
    assert_eq!(tokens[9].kind, TokenKind::Assignment);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("fn let true false if else return");

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
    assert_eq!(tokens[6].literal, "return");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo _underscore CamelCase lets");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].literal, "_underscore");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].literal, "CamelCase");
    // Only an exact keyword match is reclassified.
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].literal, "lets");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = tokenize("abc123");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].literal, "123");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 838383 -7");

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].literal, "838383");
    // The sign is a separate token.
    assert_eq!(tokens[3].kind, TokenKind::Dash);
    assert_eq!(tokens[4].kind, TokenKind::Integer);
    assert_eq!(tokens[4].literal, "7");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal() {
    let tokens = tokenize("let x = @;");

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "@");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_nul_byte_is_illegal_not_eof() {
    let tokens = tokenize("a\0b");

    assert_eq!(tokens[0].literal, "a");
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "\0");
    assert_eq!(tokens[2].literal, "b");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_iterator_stops_after_eof() {
    let mut lexer = Lexer::new("a b");

    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Identifier));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Identifier));
    assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::EOF));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_reset_restarts_from_beginning() {
    let mut lexer = Lexer::new("let x = 5;");
    let first = lexer.by_ref().map(|t| t.literal).collect::<Vec<_>>();

    lexer.reset();
    let second = lexer.map(|t| t.literal).collect::<Vec<_>>();

    assert_eq!(first, second);
    assert_eq!(first, vec!["let", "x", "=", "5", ";", ""]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  ab == 12;");

    assert_eq!((tokens[0].span.start.0, tokens[0].span.end.0), (0, 3));
    assert_eq!((tokens[1].span.start.0, tokens[1].span.end.0), (5, 7));
    assert_eq!((tokens[2].span.start.0, tokens[2].span.end.0), (8, 10));
    assert_eq!((tokens[3].span.start.0, tokens[3].span.end.0), (11, 13));
    assert_eq!((tokens[4].span.start.0, tokens[4].span.end.0), (13, 14));
    assert_eq!((tokens[5].span.start.0, tokens[5].span.end.0), (14, 14));
}

#[test]
fn test_tokenize_simple_program() {
    let source = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"#;
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Integer, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Integer, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Integer, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Integer, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Integer, "10"),
        (TokenKind::Equals, "=="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Integer, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Integer, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    let mut lexer = Lexer::new(source);
    for (i, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, *kind, "token {} kind", i);
        assert_eq!(token.literal, *literal, "token {} literal", i);
    }
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Integer.to_string(), "INT");
    assert_eq!(TokenKind::Assignment.to_string(), "=");
    assert_eq!(TokenKind::NotEquals.to_string(), "!=");
    assert_eq!(TokenKind::Fn.to_string(), "FUNCTION");
    assert_eq!(TokenKind::EOF.to_string(), "EOF");
}
