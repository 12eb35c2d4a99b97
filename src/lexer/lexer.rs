use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Byte-at-a-time scanner over an owned source string.
///
/// `position` is the byte currently held in `ch`, `read_position` the next
/// byte to be read. Tokens are produced on demand by [`Lexer::next_token`].
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: u8,
    exhausted: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            source: source.into(),
            position: 0,
            read_position: 0,
            ch: 0,
            exhausted: false,
        };
        lexer.read_char();
        lexer
    }

    /// Rewinds to the start of the input.
    pub fn reset(&mut self) {
        self.position = 0;
        self.read_position = 0;
        self.ch = 0;
        self.exhausted = false;
        self.read_char();
    }

    /// Returns the next token, or `EOF` forever once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), start, start);
        }

        let ch = self.ch;
        let kind = match ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    TokenKind::Equals
                } else {
                    TokenKind::Assignment
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    TokenKind::NotEquals
                } else {
                    TokenKind::Not
                }
            }
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'{' => TokenKind::OpenCurly,
            b'}' => TokenKind::CloseCurly,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Dash,
            b'/' => TokenKind::Slash,
            b'*' => TokenKind::Star,
            b'<' => TokenKind::Less,
            b'>' => TokenKind::Greater,
            _ if is_letter(ch) => {
                // The scan loop already stops past the word.
                let literal = self.read_multi_char(is_letter);
                return self.emit(MK_TOKEN!(lookup_ident(&literal), literal, start, self.position));
            }
            _ if is_digit(ch) => {
                let literal = self.read_multi_char(is_digit);
                return self.emit(MK_TOKEN!(TokenKind::Integer, literal, start, self.position));
            }
            _ => {
                self.read_char();
                return self.emit(MK_TOKEN!(TokenKind::Illegal, (ch as char).to_string(), start, self.position));
            }
        };

        self.read_char();
        let literal = self.slice(start, self.position);
        self.emit(MK_TOKEN!(kind, literal, start, self.position))
    }

    fn emit(&self, token: Token) -> Token {
        tracing::trace!(kind = ?token.kind, literal = %token.literal, "token");
        token
    }

    fn read_char(&mut self) {
        self.ch = self.source.as_bytes().get(self.read_position).copied().unwrap_or(0);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        self.source.as_bytes().get(self.read_position).copied().unwrap_or(0)
    }

    fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_multi_char(&mut self, accept: fn(u8) -> bool) -> String {
        let start = self.position;
        while !self.at_eof() && accept(self.ch) {
            self.read_char();
        }
        self.slice(start, self.position)
    }

    fn slice(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.source.as_bytes()[start..end]).into_owned()
    }
}

/// Yields every token up to and including the first `EOF`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.exhausted = true;
        }

        Some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

/// Scans the whole source, returning the tokens terminated by `EOF`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
