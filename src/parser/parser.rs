//! Parser state and the program-level entry points.
//!
//! The parser holds the lexer it drains, the current token and exactly one
//! token of lookahead. Grammar rules live in [`super::stmt`] and
//! [`super::expr`]; each returns `Result<_, Error>` and the first error of a
//! statement is recorded here, after which the parser skips past that
//! statement and carries on.

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Syntax errors in discovery order
    errors: Vec<Error>,
    /// Blocks opened by the statement being parsed and not yet closed
    block_depth: usize,
}

impl Parser {
    /// Creates a new Parser, priming the current and lookahead tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            block_depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances only if the lookahead is `expected_kind`.
    ///
    /// On mismatch nothing is consumed and an `UnexpectedToken` error
    /// describing the lookahead is returned for the caller to propagate.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek.kind == expected_kind {
            self.advance();
            Ok(())
        } else {
            Err(self.peek_error(expected_kind))
        }
    }

    /// Consumes the `;` ending a statement.
    ///
    /// The `;` may be left out before `}` or the end of input, or when
    /// `optional` is set because the statement already ends with a block.
    pub fn expect_terminator(&mut self, optional: bool) -> Result<(), Error> {
        match self.peek.kind {
            TokenKind::Semicolon => {
                self.advance();
                Ok(())
            }
            TokenKind::CloseCurly | TokenKind::EOF => Ok(()),
            _ if optional => Ok(()),
            _ => Err(self.peek_error(TokenKind::Semicolon)),
        }
    }

    pub fn peek_error(&self, expected_kind: TokenKind) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            },
            self.peek.span.start,
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }

    /// Parses statements until the end of input.
    ///
    /// Never fails: malformed statements are dropped, their errors recorded,
    /// and parsing resumes after the broken statement.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.has_tokens() {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    tracing::debug!(position = error.get_position().0, "syntax error: {}", error);
                    self.errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        tracing::debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }

    pub(crate) fn enter_block(&mut self) {
        self.block_depth += 1;
    }

    pub(crate) fn leave_block(&mut self) {
        self.block_depth = self.block_depth.saturating_sub(1);
    }

    /// Skips past the broken statement.
    ///
    /// Stops at a `;` outside any block, or at the `}` closing the outermost
    /// block the error was raised in (plus a `;` directly after it), or at
    /// the end of input.
    fn synchronize(&mut self) {
        let mut depth = std::mem::take(&mut self.block_depth);

        loop {
            match self.current.kind {
                TokenKind::EOF => return,
                TokenKind::Semicolon if depth == 0 => return,
                TokenKind::OpenCurly => depth += 1,
                TokenKind::CloseCurly if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        if self.peek.kind == TokenKind::Semicolon {
                            self.advance();
                        }
                        return;
                    }
                }
                _ => {}
            }

            self.advance();
        }
    }

    /// Error messages in discovery order; empty when parsing succeeded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// The structured errors behind [`Parser::errors`].
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

/// Parses source text into a program and its syntax errors.
///
/// This is the main entry point for parsing: it builds the lexer and parser
/// and runs [`Parser::parse_program`] to completion.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
