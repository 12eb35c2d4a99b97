use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, Identifier, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binding_power, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Pratt loop: parse a prefix form, then fold in infix operators while the
/// lookahead binds tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_prefix(parser)?;

    while bp < binding_power(parser.peek_token_kind()) {
        parser.advance();
        let token_bp = binding_power(parser.current_token_kind());
        left = parse_infix(parser, left, token_bp)?;
    }

    Ok(left)
}

/// Dispatches on a token that starts an expression.
pub fn parse_prefix(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => Ok(Expr::Identifier(parse_identifier(parser))),
        TokenKind::Integer => parse_integer_expr(parser),
        TokenKind::True | TokenKind::False => Ok(parse_boolean_expr(parser)),
        TokenKind::Not | TokenKind::Dash => parse_prefix_expr(parser),
        TokenKind::OpenParen => parse_grouping_expr(parser),
        TokenKind::If => parse_if_expr(parser),
        TokenKind::Fn => parse_function_expr(parser),

        kind @ (TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Semicolon
        | TokenKind::Comma
        | TokenKind::Plus
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return) => Err(Error::new(
            ErrorImpl::MissingPrefixRule { kind },
            parser.get_position(),
        )),
    }
}

/// Dispatches on an operator following a complete left operand.
pub fn parse_infix(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Equals
        | TokenKind::NotEquals => parse_binary_expr(parser, left, bp),
        TokenKind::OpenParen => parse_call_expr(parser, left),

        // binding_power keeps these out of the Pratt loop
        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Semicolon
        | TokenKind::Comma
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::True
        | TokenKind::False
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::Return => Ok(left),
    }
}

pub fn parse_identifier(parser: &mut Parser) -> Identifier {
    let token = parser.current_token().clone();
    Identifier {
        value: token.literal.clone(),
        token,
    }
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: token.literal.clone(),
            },
            token.span.start,
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Expr {
    let token = parser.current_token().clone();
    Expr::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        token,
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

/// Right operand is parsed at the operator's own power, so equal powers
/// group to the left.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    parameters.push(parse_identifier(parser));

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(parse_identifier(parser));
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let mut arguments = Vec::new();

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Default)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(Expr::Call(CallExpr {
        token,
        function: Box::new(left),
        arguments,
    }))
}
