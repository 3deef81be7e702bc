//! Validation Engine
//!
//! Record rules applied line by line, independent of I/O.

pub mod engine;

pub use engine::{
    EXPECTED_FIELDS, Finding, LineOutcome, Summary, ValidationResult, validate_document,
    validate_line,
};
