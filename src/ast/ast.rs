use std::fmt::{Debug, Display};

use super::{
    expressions::{
        BooleanExpr, CallExpr, FunctionExpr, Identifier, IfExpr, InfixExpr, IntegerExpr,
        PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Implemented by every AST node. `Display` on a node reconstructs its
/// source text; `token_literal` is the literal of the token that defines it.
pub trait Node: Debug {
    fn token_literal(&self) -> &str;
}

/// Statement
///
/// A unit that appears directly in a block or at the top level.
#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => stmt.token_literal(),
            Stmt::Return(stmt) => stmt.token_literal(),
            Stmt::Expression(stmt) => stmt.token_literal(),
            Stmt::Block(stmt) => stmt.token_literal(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
            Stmt::Block(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
///
/// A unit that yields a value.
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
}

impl Expr {
    /// Whether the expression's source text ends with a `}`.
    pub fn ends_with_block(&self) -> bool {
        match self {
            Expr::If(_) | Expr::Function(_) => true,
            Expr::Prefix(expr) => expr.right.ends_with_block(),
            Expr::Infix(expr) => expr.right.ends_with_block(),
            Expr::Identifier(_) | Expr::Integer(_) | Expr::Boolean(_) | Expr::Call(_) => false,
        }
    }
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(expr) => expr.token_literal(),
            Expr::Integer(expr) => expr.token_literal(),
            Expr::Boolean(expr) => expr.token_literal(),
            Expr::Prefix(expr) => expr.token_literal(),
            Expr::Infix(expr) => expr.token_literal(),
            Expr::If(expr) => expr.token_literal(),
            Expr::Function(expr) => expr.token_literal(),
            Expr::Call(expr) => expr.token_literal(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => write!(f, "{}", expr),
            Expr::Integer(expr) => write!(f, "{}", expr),
            Expr::Boolean(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
            Expr::If(expr) => write!(f, "{}", expr),
            Expr::Function(expr) => write!(f, "{}", expr),
            Expr::Call(expr) => write!(f, "{}", expr),
        }
    }
}

/// Program
///
/// The root of the tree: the top-level statements in source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    /// Literal of the first statement, or `""` for an empty program.
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
