//! Validation Engine
//!
//! Per-line record rules, separated from splitting and I/O concerns.

use std::fmt;
use std::num::ParseIntError;

use crate::parser::{ParsedLine, parse_line, split_lines};

/// Number of fields a record line must have
pub const EXPECTED_FIELDS: usize = 2;

/// A single deviation from the record format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The line has zero length
    Empty { line: usize },
    /// The line does not split into exactly two fields
    FieldCount { line: usize, count: usize },
    /// A field of a two-field line is not a base-10 integer
    NotANumber {
        line: usize,
        field: usize,
        text: String,
        error: ParseIntError,
    },
}

impl Finding {
    /// 0-based line the finding belongs to
    pub fn line(&self) -> usize {
        match self {
            Finding::Empty { line }
            | Finding::FieldCount { line, .. }
            | Finding::NotANumber { line, .. } => *line,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Empty { line } => write!(f, "line {line} is empty"),
            Finding::FieldCount { line, count } => {
                write!(f, "line {line} has {count} fields, not {EXPECTED_FIELDS}")
            }
            Finding::NotANumber {
                line,
                field,
                text,
                error,
            } => write!(
                f,
                "Line {line}: field {field}({text:?}) is not a number: {error}"
            ),
        }
    }
}

/// What happened to one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Empty(Finding),
    Comment,
    FieldCountMismatch(Finding),
    /// Both fields were inspected; holds zero, one or two numeric findings
    Checked(Vec<Finding>),
}

impl LineOutcome {
    pub fn findings(&self) -> &[Finding] {
        match self {
            LineOutcome::Empty(finding) | LineOutcome::FieldCountMismatch(finding) => {
                std::slice::from_ref(finding)
            }
            LineOutcome::Comment => &[],
            LineOutcome::Checked(findings) => findings,
        }
    }

    pub fn into_findings(self) -> Vec<Finding> {
        match self {
            LineOutcome::Empty(finding) | LineOutcome::FieldCountMismatch(finding) => {
                vec![finding]
            }
            LineOutcome::Comment => Vec::new(),
            LineOutcome::Checked(findings) => findings,
        }
    }
}

/// Counters for a validation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub findings: usize,
    pub empty: usize,
    pub comments: usize,
    pub field_count_mismatches: usize,
    pub numeric: usize,
}

impl Summary {
    pub fn record(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        self.findings += outcome.findings().len();
        match outcome {
            LineOutcome::Empty(_) => self.empty += 1,
            LineOutcome::Comment => self.comments += 1,
            LineOutcome::FieldCountMismatch(_) => self.field_count_mismatches += 1,
            LineOutcome::Checked(findings) => self.numeric += findings.len(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.findings == 0
    }
}

/// Result of validating a whole document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub findings: Vec<Finding>,
    pub summary: Summary,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: LineOutcome) {
        self.summary.record(&outcome);
        self.findings.extend(outcome.into_findings());
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Validate a single classified line
pub fn validate_line(line_num: usize, parsed: &ParsedLine<'_>) -> LineOutcome {
    match parsed {
        ParsedLine::Empty => LineOutcome::Empty(Finding::Empty { line: line_num }),
        ParsedLine::Comment(_) => LineOutcome::Comment,
        ParsedLine::Record(fields) if fields.len() != EXPECTED_FIELDS => {
            LineOutcome::FieldCountMismatch(Finding::FieldCount {
                line: line_num,
                count: fields.len(),
            })
        }
        ParsedLine::Record(fields) => LineOutcome::Checked(check_fields(line_num, fields)),
    }
}

/// Validate an entire document, collecting findings in line order
pub fn validate_document(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (line_num, line) in split_lines(content).enumerate() {
        let parsed = parse_line(line);
        result.push(validate_line(line_num, &parsed));
    }

    result
}

/// Parse every field as an `i64`; a failure never stops the next field
fn check_fields(line_num: usize, fields: &[&str]) -> Vec<Finding> {
    fields
        .iter()
        .enumerate()
        .filter_map(|(field, text)| {
            text.parse::<i64>()
                .err()
                .map(|error| Finding::NotANumber {
                    line: line_num,
                    field,
                    text: (*text).to_string(),
                    error,
                })
        })
        .collect()
}
