use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A syntax error together with the source offset it was found at.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingPrefixRule { .. } => "MissingPrefixRule",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Semicolon,
                found,
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                found
            )),
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, found
            )),
            ErrorImpl::MissingPrefixRule {
                kind: TokenKind::Illegal,
            } => ErrorTip::None,
            ErrorImpl::MissingPrefixRule { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    MissingPrefixRule { kind: TokenKind },
    #[error("could not parse {token:?} as integer")]
    NumberParseError { token: String },
}
