//! Parsed line representation
//!
//! Minimal types describing the shape of a line.
//! No validation logic here - numeric checks happen in the validation engine.

use crate::parser::lexer::split_fields;

/// Marker that turns a line into a comment when it is the first character
pub const COMMENT_MARKER: char = '#';

/// A classified line of input
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine<'a> {
    /// A zero-length line
    Empty,
    /// A line starting with `#`
    Comment(&'a str),
    /// Any other line, split into its fields
    Record(Vec<&'a str>),
}

impl<'a> ParsedLine<'a> {
    /// Classify a single line.
    ///
    /// Only a zero-length line is `Empty`; a whitespace-only line is a
    /// record with no fields.
    pub fn from_line(line: &'a str) -> Self {
        if line.is_empty() {
            ParsedLine::Empty
        } else if line.starts_with(COMMENT_MARKER) {
            ParsedLine::Comment(line)
        } else {
            ParsedLine::Record(split_fields(line))
        }
    }
}
