use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Node},
    statements::BlockStmt,
};

// LITERALS

/// Identifier
/// A name, either bound by `let` / a parameter list or referenced in an expression.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// A base-10 signed 64-bit literal.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

// COMPLEX

/// Prefix Expression
/// `!x` or `-x`.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// A binary operation, rendered fully parenthesised so precedence is visible.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If Expression
/// `if (<condition>) { ... } else { ... }`
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Node for IfExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {}", alternative)?;
        }
        Ok(())
    }
}

/// Function Expression
/// `fn(<params>) { ... }`
#[derive(Debug, Clone)]
pub struct FunctionExpr {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStmt,
}

impl Node for FunctionExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<String>>();

        write!(
            f,
            "{}({}) {}",
            self.token_literal(),
            parameters.join(", "),
            self.body
        )
    }
}

/// Call Expression
/// `<callee>(<args>)`. The defining token is the opening parenthesis.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub token: Token,
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl Node for CallExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.function, arguments.join(", "))
    }
}
