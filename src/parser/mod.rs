//! Record Parser
//!
//! Line and field splitting plus line classification.
//! Focused on shape only; whether fields are numbers is a validation concern.

pub mod ast;
pub mod lexer;

pub use ast::{COMMENT_MARKER, ParsedLine};
pub use lexer::{split_fields, split_lines};

/// Parse a single line into its classified form
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    ParsedLine::from_line(line)
}
