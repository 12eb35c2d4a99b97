//! Lexical analysis module.
//!
//! This module contains the lexer (scanner) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Single and two-character operators
//! - Identifiers and the reserved keyword table
//! - Integer literals
//! - Illegal bytes, reported as tokens rather than failures

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
