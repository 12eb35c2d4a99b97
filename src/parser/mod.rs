//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, blocks, expression statements)
//! - Expression parsing (prefix and binary operators, `if`, function
//!   literals, calls)
//! - Error collection and skip-to-`;` recovery
//!
//! Prefix and infix rules are chosen by exhaustive matches on the token
//! kind; `lookups::binding_power` supplies operator precedence.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
