//! checkfile
//!
//! Checks that each line of a text stream is a record of two
//! whitespace-separated integers and reports every line that is not.
//!
//! This library provides:
//! - Line and field splitting
//! - Per-line record validation
//! - Streaming of findings to any writer
//! - Configuration management

pub mod checker;
pub mod config;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use checker::{check_reader, check_text};
pub use config::Config;
pub use parser::{ParsedLine, parse_line};
pub use validation::{Finding, LineOutcome, Summary, ValidationResult, validate_document};
