use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Parses one statement starting at the current token.
///
/// On success the current token is the last token of the statement.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::OpenCurly => {
            let block = parse_block_stmt(parser)?;
            parser.expect_terminator(true)?;
            Ok(Stmt::Block(block))
        }
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;

    let name = Identifier {
        token: parser.current_token().clone(),
        value: parser.current_token().literal.clone(),
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect_terminator(value.ends_with_block())?;

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    if matches!(
        parser.peek_token_kind(),
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF
    ) {
        parser.expect_terminator(false)?;
        return Ok(Stmt::Return(ReturnStmt { token, value: None }));
    }

    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect_terminator(value.ends_with_block())?;

    Ok(Stmt::Return(ReturnStmt {
        token,
        value: Some(value),
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect_terminator(expression.ends_with_block())?;

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }`, leaving the current token on the closing `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.enter_block();
    parser.advance();

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        statements.push(parse_stmt(parser)?);
        parser.advance();
    }

    if parser.current_token_kind() == TokenKind::EOF {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseCurly,
                found: TokenKind::EOF,
            },
            parser.get_position(),
        ));
    }

    parser.leave_block();

    Ok(BlockStmt { token, statements })
}
