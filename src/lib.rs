#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. A position at the very end of the source
/// maps to the end of the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line's content.
    match content.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => Some((line_number - 1, line.to_string(), line.len())),
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Renders a syntax error with a caret excerpt of the offending line.
///
/// ```text
/// Error: UnexpectedToken (Expected `=`, found `INT`)
/// -> main.monkey
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0) else {
        let _ = writeln!(out, "   {}", error);
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();

    (String::from(&string[start..]), start)
}
