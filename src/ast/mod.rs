/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait, the `Stmt` / `Expr` sum types and `Program`
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
