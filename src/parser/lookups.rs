use crate::lexer::tokens::TokenKind;

/// Operator precedence, lowest first. The derived ordering drives the
/// Pratt loop in [`super::expr::parse_expr`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
}

/// Binding power of `kind` when it appears after a complete left operand.
///
/// Tokens that never continue an expression bind at `Default`, which stops
/// the Pratt loop.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,
        TokenKind::Less | TokenKind::Greater => BindingPower::Relational,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        TokenKind::OpenParen => BindingPower::Call,

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
        | TokenKind::Return => BindingPower::Default,
    }
}
