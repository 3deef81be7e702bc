//! Record Lexer
//!
//! Splits raw input into lines and lines into fields.
//! Everything borrows from the input; nothing is copied.

/// Split input text into lines on `\n`.
///
/// A trailing terminator yields a final empty line, and `\r` is kept as part
/// of the line it ends.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input.split('\n')
}

/// Split a line into whitespace-separated fields.
///
/// Leading and trailing whitespace is ignored and runs of whitespace count
/// as a single separator.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
