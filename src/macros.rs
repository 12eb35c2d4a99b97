//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! The lexer builds every token through this macro so single-character and
//! multi-character tokens share one construction site.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal text
/// * `$start` - Byte offset of the first character
/// * `$end` - Byte offset one past the last character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, String::from("42"), 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $start:expr, $end:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: Span {
                start: Position($start as u32),
                end: Position($end as u32),
            },
        }
    };
}
