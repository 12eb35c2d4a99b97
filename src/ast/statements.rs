use std::{fmt::Display, slice::Iter};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Node, Stmt},
    expressions::Identifier,
};

/// Let Statement
/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Expr,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

/// Return Statement
/// `return <value>;`, or a bare `return;`
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token_literal(), value),
            None => write!(f, "{};", self.token_literal()),
        }
    }
}

/// Expression Statement
/// An expression standing on its own, e.g. `x + 10;`
#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    /// First token of the expression
    pub token: Token,
    pub expression: Expr,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};", self.expression)
    }
}

/// Block Statement
/// `{ <stmt> <stmt> }`, used as the body of `if` and function literals.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for stmt in &self.statements {
            write!(f, " {}", stmt)?;
        }
        write!(f, " }}")
    }
}
